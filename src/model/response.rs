// Use 3rd party
use serde::Serialize;

// Use local
use crate::client::{ClientError, ClientResult};

/// The `{"success": .., "data": ..}` / `{"success": false, "error": ..}`
/// envelope served to API consumers.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: &ClientError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }

    /// Wraps a client result, returning the HTTP status to answer with.
    pub fn from_result(result: ClientResult<T>) -> (u16, Self) {
        match result {
            Ok(data) => (200, Self::success(data)),
            Err(err) => (err.status(), Self::failure(&err)),
        }
    }
}
