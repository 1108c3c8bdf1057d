//! Endpoint functions relating to lyrics

use crate::client::{require, ClientResult, Saavn, API_VERSION, CONTEXT};
use crate::format::lyrics::lyrics;
use crate::model::lyrics::Lyrics;

pub struct LyricsEndpoint<'a>(pub &'a Saavn);

impl LyricsEndpoint<'_> {
    /// Lyrics by the `lyricsId` of a song, which is usually the song id.
    pub async fn get(&self, id: &str) -> ClientResult<Lyrics> {
        let id = require(id, "lyrics id")?;
        let raw = self
            .0
            .get("lyrics.getLyrics", &[("lyrics_id", id), CONTEXT, API_VERSION])
            .await?;
        Ok(lyrics(&raw))
    }
}
