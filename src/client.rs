// Use 3rd party
use log::{debug, error, warn};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// Use internal modules
use crate::config::SaavnConfig;
use crate::media::MediaUrlResolver;

// Possible errors returned from `rsaavn` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("missing {0}")]
    MissingParameter(&'static str),
    #[error("{0} not found")]
    NotFound(String),
    #[error("query encode error: {0}")]
    EncodeQuery(#[from] serde_urlencoded::ser::Error),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream status code: {0}")]
    StatusCode(StatusCode),
}

impl ClientError {
    /// HTTP status a consumer facing layer should answer with.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingParameter(_) => 400,
            Self::NotFound(_) => 404,
            _ => 500,
        }
    }

    pub(crate) fn not_found(what: &str) -> Self {
        Self::NotFound(what.to_owned())
    }
}

impl From<StatusCode> for ClientError {
    fn from(code: StatusCode) -> Self {
        Self::StatusCode(code)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Query parameters sent with every call.
const BASE_PARAMS: [(&str, &str); 2] = [("_format", "json"), ("_marker", "0")];

pub(crate) const CONTEXT: (&str, &str) = ("ctx", "web6dot0");
pub(crate) const API_VERSION: (&str, &str) = ("api_version", "4");

/// Rejects blank identifiers and queries before anything goes over the wire.
pub(crate) fn require<'a>(value: &'a str, name: &'static str) -> ClientResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(ClientError::MissingParameter(name))
    } else {
        Ok(value)
    }
}

// JioSaavn API
pub struct Saavn {
    client: Client,
    config: SaavnConfig,
    media: MediaUrlResolver,
}

impl Default for Saavn {
    fn default() -> Self {
        Self::new(SaavnConfig::default())
    }
}

impl Saavn {
    #[must_use]
    pub fn new(config: SaavnConfig) -> Self {
        Self {
            client: Client::new(),
            media: MediaUrlResolver::new(&config.decryption_key),
            config,
        }
    }

    pub fn config(&self) -> &SaavnConfig {
        &self.config
    }

    pub fn media(&self) -> &MediaUrlResolver {
        &self.media
    }

    async fn api_call(&self, call: &str, params: &[(&str, &str)]) -> ClientResult<Response> {
        let mut query: Vec<(&str, &str)> = vec![("__call", call)];
        query.extend_from_slice(&BASE_PARAMS);
        query.extend_from_slice(params);

        let url = format!(
            "{}?{}",
            self.config.base_url,
            serde_urlencoded::to_string(&query)?
        );
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            warn!("{} answered with {}", call, response.status());
            Err(response.status().into())
        }
    }

    /// Calls `call` and decodes the body as loose JSON.
    pub async fn get(&self, call: &str, params: &[(&str, &str)]) -> ClientResult<Value> {
        let result = self.api_call(call, params).await?.text().await?;
        Self::convert_result::<Value>(&result)
    }

    pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
        serde_json::from_str::<T>(input).map_err(|err| {
            error!("could not decode upstream body: {}", err);
            err.into()
        })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use mockito::{mock, Matcher};

    pub const API_PATH: &str = "/api.php";

    #[tokio::test]
    async fn client_get() {
        let _mock = mock_request_success(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "test.echo".into()),
                Matcher::UrlEncoded("_format".into(), "json".into()),
                Matcher::UrlEncoded("_marker".into(), "0".into()),
                Matcher::UrlEncoded("q".into(), "tum hi ho".into()),
            ],
            r#"{"result": "ok"}"#,
        );

        let response = client()
            .get("test.echo", &[("q", "tum hi ho")])
            .await
            .unwrap();
        assert_eq!(response["result"], "ok");
    }

    #[tokio::test]
    async fn client_get_status_error() {
        let _mock = mock_request_status(
            "GET",
            API_PATH,
            vec![Matcher::UrlEncoded("__call".into(), "test.unavailable".into())],
            503,
        );

        let error = client().get("test.unavailable", &[]).await.unwrap_err();
        assert!(matches!(
            error,
            ClientError::StatusCode(StatusCode::SERVICE_UNAVAILABLE)
        ));
        assert_eq!(error.status(), 500);
    }

    #[tokio::test]
    async fn client_get_bad_json() {
        let _mock = mock_request_success(
            "GET",
            API_PATH,
            vec![Matcher::UrlEncoded("__call".into(), "test.html".into())],
            "<html>maintenance</html>",
        );

        let error = client().get("test.html", &[]).await.unwrap_err();
        assert!(matches!(error, ClientError::ParseJSON(_)));
    }

    #[test]
    fn client_config() {
        let client = Saavn::new(SaavnConfig::new().base_url("http://localhost/api.php"));
        assert_eq!(client.config().base_url, "http://localhost/api.php");
        assert_eq!(client.config().decryption_key, crate::config::DEFAULT_DECRYPTION_KEY);

        let token = "ID2ieOjCrwfgWvL5sXl4B1ImC5QfbsDyQd+aqn5Yzr2U+KewMUhPxQ==";
        assert_eq!(
            client.media().decrypt(token),
            "https://aac.saavncdn.com/123/abc_320.mp4"
        );
    }

    #[test]
    fn require_rejects_blank() {
        assert_eq!(require(" 42 ", "song id").unwrap(), "42");
        let error = require("  ", "song id").unwrap_err();
        assert!(matches!(error, ClientError::MissingParameter("song id")));
        assert_eq!(error.status(), 400);
    }

    #[test]
    fn error_statuses() {
        assert_eq!(ClientError::not_found("album").status(), 404);
        assert_eq!(ClientError::not_found("album").to_string(), "album not found");
        assert_eq!(ClientError::from(StatusCode::NOT_FOUND).status(), 500);
    }

    pub fn mock_request_success(
        method: &str,
        path: &str,
        matchers: Vec<Matcher>,
        body: &str,
    ) -> mockito::Mock {
        mock(method, path)
            .match_query(Matcher::AllOf(matchers))
            .with_status(200)
            .with_body(body)
            .create()
    }

    pub fn mock_request_success_from_file(
        method: &str,
        path: &str,
        matchers: Vec<Matcher>,
        file_path: &str,
    ) -> mockito::Mock {
        mock(method, path)
            .match_query(Matcher::AllOf(matchers))
            .with_status(200)
            .with_body_from_file(file_path)
            .create()
    }

    pub fn mock_request_status(
        method: &str,
        path: &str,
        matchers: Vec<Matcher>,
        status: usize,
    ) -> mockito::Mock {
        mock(method, path)
            .match_query(Matcher::AllOf(matchers))
            .with_status(status)
            .with_body("")
            .create()
    }

    pub fn client() -> Saavn {
        let config = SaavnConfig::new().base_url(&format!("{}{}", mockito::server_url(), API_PATH));
        Saavn::new(config)
    }
}
