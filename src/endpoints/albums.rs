//! Endpoint functions relating to albums

use crate::client::{require, ClientError, ClientResult, Saavn, API_VERSION, CONTEXT};
use crate::format::album::{album, album_from_token};
use crate::format::Fields;
use crate::model::album::Album;
use crate::model::search::SearchResults;

pub struct Albums<'a>(pub &'a Saavn);

impl Albums<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<Album> {
        let id = require(id, "album id")?;
        let raw = self
            .0
            .get("content.getAlbumDetails", &[("cc", "in"), ("albumid", id)])
            .await?;

        // Some responses wrap the album in `data`, others return it bare.
        let data = match raw.obj_field("data") {
            data if !data.is_null() => data,
            _ if !raw.str_field("title").is_empty() => &raw,
            _ => return Err(ClientError::not_found("album")),
        };
        if data.as_object().map_or(true, |fields| fields.is_empty()) {
            return Err(ClientError::not_found("album"));
        }

        Ok(album(data, self.0.media()))
    }

    /// Album by share link token. Songs come back as id and name stubs.
    pub async fn get_by_token(&self, token: &str) -> ClientResult<Album> {
        let token = require(token, "album token")?;
        let raw = self
            .0
            .get(
                "webapi.get",
                &[("token", token), ("type", "album"), CONTEXT, API_VERSION],
            )
            .await?;

        let list = raw
            .get("list")
            .ok_or_else(|| ClientError::not_found("album"))?;
        let album = album_from_token(list);
        if album.name.is_empty() && album.songs.is_empty() {
            return Err(ClientError::not_found("album"));
        }

        Ok(album)
    }

    pub async fn search(&self, query: &str, page: u32) -> ClientResult<SearchResults<Album>> {
        self.0.searches().albums(query, page).await
    }
}
