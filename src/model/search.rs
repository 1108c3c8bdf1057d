// Use 3rd party
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub total: i64,
    pub start: i64,
    pub results: Vec<T>,
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self {
            total: 0,
            start: 0,
            results: Vec::new(),
        }
    }
}

/// Lightweight song record returned by autocomplete.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSuggestion {
    pub id: String,
    pub title: String,
    pub album: String,
    pub artists: String,
    pub image: String,
    pub url: String,
    pub language: String,
    pub description: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub total: usize,
    pub results: Vec<SongSuggestion>,
}
