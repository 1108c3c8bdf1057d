//! Endpoint functions relating to artists

use crate::client::{require, ClientError, ClientResult, Saavn};
use crate::format::artist::artist_details;
use crate::model::artist::{Artist, ArtistDetails};
use crate::model::search::SearchResults;

pub struct Artists<'a>(pub &'a Saavn);

impl Artists<'_> {
    /// Artist page with top songs and albums.
    pub async fn get(&self, id: &str) -> ClientResult<ArtistDetails> {
        let id = require(id, "artist id")?;
        let raw = self
            .0
            .get(
                "artist.getArtistPageDetails",
                &[("cc", "in"), ("artistId", id)],
            )
            .await?;

        if raw.as_object().map_or(true, |fields| fields.is_empty()) {
            return Err(ClientError::not_found("artist"));
        }

        Ok(artist_details(&raw, self.0.media()))
    }

    pub async fn search(&self, query: &str, page: u32) -> ClientResult<SearchResults<Artist>> {
        self.0.searches().artists(query, page).await
    }
}
