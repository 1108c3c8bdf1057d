//! Lightweight song suggestions from `autocomplete.get`.

// Use 3rd party
use serde_json::Value;

// Use local
use crate::format::image::upsized_thumbnail;
use crate::format::{objects, Fallback, Fields};
use crate::model::search::{SongSuggestion, Suggestions};

pub const DEFAULT_LIMIT: usize = 3;
pub const MAX_LIMIT: usize = 10;

/// Parses a requested suggestion count. Absent or non-numeric input gives
/// [`DEFAULT_LIMIT`]; numbers are clamped to `1..=MAX_LIMIT`.
pub fn autocomplete_limit(requested: Option<&str>) -> usize {
    match requested.map(str::trim).map(str::parse::<i64>) {
        Some(Ok(limit)) => limit.clamp(1, MAX_LIMIT as i64) as usize,
        _ => DEFAULT_LIMIT,
    }
}

/// The top query match when it is a song, then the song bucket without
/// repeated ids, cut to `limit` clamped to `1..=MAX_LIMIT`.
pub fn autocomplete(data: &Value, limit: usize) -> Suggestions {
    let mut results: Vec<SongSuggestion> = Vec::new();

    if let Some(top) = data.obj_field("topquery").list_field("data").first() {
        if top.str_field("type") == "song" {
            results.push(suggestion(top));
        }
    }

    for item in objects(data.obj_field("songs").list_field("data")) {
        let candidate = suggestion(item);
        if !results.iter().any(|existing| existing.id == candidate.id) {
            results.push(candidate);
        }
    }

    results.truncate(limit.clamp(1, MAX_LIMIT));

    Suggestions {
        total: results.len(),
        results,
    }
}

pub fn suggestion(data: &Value) -> SongSuggestion {
    let fields = Fallback::new(data.obj_field("more_info"), data);

    let album = data.str_field("album");
    let mut singers = fields.string("singers");
    if singers.is_empty() {
        singers = fields.string("primary_artists");
    }

    SongSuggestion {
        id: data.str_field("id"),
        title: data.str_field("title"),
        description: format!("{} · {}", singers, album),
        album,
        artists: singers,
        image: upsized_thumbnail(&data.str_field("image")),
        url: data.str_field("url"),
        language: fields.string("language"),
    }
}
