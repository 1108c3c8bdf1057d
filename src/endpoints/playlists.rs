//! Endpoint functions relating to playlists

use crate::client::{require, ClientError, ClientResult, Saavn, API_VERSION, CONTEXT};
use crate::format::playlist::playlist_from_token;
use crate::format::Fields;
use crate::model::playlist::Playlist;
use crate::model::search::SearchResults;

pub struct Playlists<'a>(pub &'a Saavn);

impl Playlists<'_> {
    /// Playlist by share link token. Only the first 50 songs are fetched.
    pub async fn get_by_token(&self, token: &str) -> ClientResult<Playlist> {
        let token = require(token, "playlist token")?;
        let raw = self
            .0
            .get(
                "webapi.get",
                &[
                    ("token", token),
                    ("type", "playlist"),
                    ("p", "1"),
                    ("n", "50"),
                    CONTEXT,
                    API_VERSION,
                ],
            )
            .await?;

        let has_contents = raw.obj_field("more_info").get("contents").is_some();
        if raw.get("list").is_none() && !has_contents {
            return Err(ClientError::not_found("playlist"));
        }

        Ok(playlist_from_token(&raw, self.0.media()))
    }

    pub async fn search(&self, query: &str, page: u32) -> ClientResult<SearchResults<Playlist>> {
        self.0.searches().playlists(query, page).await
    }
}
