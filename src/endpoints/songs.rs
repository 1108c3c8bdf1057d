//! Endpoint functions relating to songs

use crate::client::{require, ClientError, ClientResult, Saavn, API_VERSION, CONTEXT};
use crate::format::song::{song, DETAIL, TOKEN};
use crate::format::Fields;
use crate::model::search::SearchResults;
use crate::model::song::Song;

pub struct Songs<'a>(pub &'a Saavn);

impl Songs<'_> {
    /// Song by its id.
    pub async fn get(&self, id: &str) -> ClientResult<Song> {
        let id = require(id, "song id")?;
        let raw = self
            .0
            .get("song.getDetails", &[("cc", "in"), ("pids", id)])
            .await?;

        match raw.get(id).filter(|data| data.is_object()) {
            Some(data) => Ok(song(data, &DETAIL, self.0.media())),
            None => Err(ClientError::not_found("song")),
        }
    }

    /// Song by the token at the end of its share link.
    pub async fn get_by_token(&self, token: &str) -> ClientResult<Song> {
        let token = require(token, "song token")?;
        let raw = self
            .0
            .get(
                "webapi.get",
                &[
                    ("token", token),
                    ("type", "song"),
                    ("includeMetaTags", "0"),
                    CONTEXT,
                    API_VERSION,
                ],
            )
            .await?;

        match raw.list_field("songs").first().filter(|data| data.is_object()) {
            Some(data) => Ok(song(data, &TOKEN, self.0.media())),
            None => Err(ClientError::not_found("song")),
        }
    }

    pub async fn search(&self, query: &str, page: u32) -> ClientResult<SearchResults<Song>> {
        self.0.searches().songs(query, page).await
    }
}
