//! Endpoint functions related to search

use serde_json::Value;

use crate::client::*;
use crate::format::autocomplete::autocomplete;
use crate::format::{search, Fields};
use crate::model::album::Album;
use crate::model::artist::Artist;
use crate::model::playlist::Playlist;
use crate::model::search::{SearchResults, Suggestions};
use crate::model::song::Song;

/// Hits per search page.
const PAGE_SIZE: &str = "20";

pub struct Search<'a>(pub &'a Saavn);

impl Search<'_> {
    async fn find(&self, call: &str, query: &str, page: u32) -> ClientResult<Value> {
        let query = require(query, "search query")?;
        let page = page.max(1).to_string();
        let raw = self
            .0
            .get(
                call,
                &[
                    ("p", page.as_str()),
                    ("q", query),
                    ("n", PAGE_SIZE),
                    CONTEXT,
                    API_VERSION,
                ],
            )
            .await?;

        // Results are sometimes nested under `data`.
        if raw.obj_field("data").is_null() {
            Ok(raw)
        } else {
            Ok(raw.obj_field("data").clone())
        }
    }

    /// Songs matching `query`, most played first.
    pub async fn songs(&self, query: &str, page: u32) -> ClientResult<SearchResults<Song>> {
        let raw = self.find("search.getResults", query, page).await?;
        Ok(search::songs(&raw, self.0.media()))
    }

    pub async fn albums(&self, query: &str, page: u32) -> ClientResult<SearchResults<Album>> {
        let raw = self.find("search.getAlbumResults", query, page).await?;
        Ok(search::albums(&raw))
    }

    pub async fn artists(&self, query: &str, page: u32) -> ClientResult<SearchResults<Artist>> {
        let raw = self.find("search.getArtistResults", query, page).await?;
        Ok(search::artists(&raw))
    }

    pub async fn playlists(&self, query: &str, page: u32) -> ClientResult<SearchResults<Playlist>> {
        let raw = self.find("search.getPlaylistResults", query, page).await?;
        Ok(search::playlists(&raw))
    }

    /// Quick song suggestions while typing. See
    /// [`autocomplete_limit`](crate::format::autocomplete::autocomplete_limit)
    /// for turning user input into `limit`.
    pub async fn autocomplete(&self, query: &str, limit: usize) -> ClientResult<Suggestions> {
        let query = require(query, "search query")?;
        let raw = self
            .0
            .get("autocomplete.get", &[("query", query), ("type", "song")])
            .await?;
        Ok(autocomplete(&raw, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client, mock_request_success, mock_request_success_from_file, API_PATH};
    use crate::format::autocomplete::autocomplete_limit;
    use mockito::Matcher;

    #[tokio::test]
    async fn songs() {
        let _mock = mock_request_success_from_file(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "search.getResults".into()),
                Matcher::UrlEncoded("q".into(), "aashiqui 2".into()),
                Matcher::UrlEncoded("p".into(), "1".into()),
                Matcher::UrlEncoded("n".into(), "20".into()),
            ],
            "tests/files/search_songs.json",
        );

        let result = client().searches().songs("aashiqui 2", 1).await.unwrap();

        assert_eq!(result.total, 300);
        assert_eq!(result.start, 1);
        assert_eq!(result.results.len(), 2);
        // Re-ranked by play count.
        assert_eq!(result.results[0].id, "5WXAlMNt");
        assert_eq!(result.results[1].id, "gvUgMp3l");
        assert_eq!(result.results[0].artists.primary[0].name, "Arijit Singh");
        assert_eq!(result.results[1].download_url.len(), 2);
    }

    #[tokio::test]
    async fn songs_through_namespace() {
        let _mock = mock_request_success_from_file(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "search.getResults".into()),
                Matcher::UrlEncoded("q".into(), "tum hi ho".into()),
                Matcher::UrlEncoded("p".into(), "2".into()),
            ],
            "tests/files/search_songs.json",
        );

        let result = client().songs().search("tum hi ho", 2).await.unwrap();
        assert_eq!(result.results.len(), 2);
    }

    #[tokio::test]
    async fn albums() {
        let _mock = mock_request_success_from_file(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "search.getAlbumResults".into()),
                Matcher::UrlEncoded("q".into(), "aashiqui".into()),
            ],
            "tests/files/search_albums.json",
        );

        let result = client().albums().search("aashiqui", 1).await.unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.results[0].name, "Aashiqui 2");
        assert_eq!(result.results[0].song_count, 11);
        assert_eq!(result.results[0].artists.all.len(), 2);
    }

    #[tokio::test]
    async fn artists() {
        let _mock = mock_request_success_from_file(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "search.getArtistResults".into()),
                Matcher::UrlEncoded("q".into(), "arijit".into()),
            ],
            "tests/files/search_artists.json",
        );

        let result = client().artists().search("arijit", 1).await.unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.results[0].image.len(), 3);
        assert!(result.results[1].image.is_empty());
    }

    #[tokio::test]
    async fn playlists() {
        let _mock = mock_request_success_from_file(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "search.getPlaylistResults".into()),
                Matcher::UrlEncoded("q".into(), "romance".into()),
            ],
            "tests/files/search_playlists.json",
        );

        let result = client().playlists().search("romance", 1).await.unwrap();

        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0].song_count, 50);
        assert_eq!(result.results[0].language, "hindi");
        assert!(result.results[1].image.is_empty());
    }

    #[tokio::test]
    async fn no_results() {
        let _mock = mock_request_success(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "search.getArtistResults".into()),
                Matcher::UrlEncoded("q".into(), "zzzzzz".into()),
            ],
            "[]",
        );

        let result = client().searches().artists("zzzzzz", 1).await.unwrap();
        assert_eq!(result, SearchResults::default());
    }

    #[tokio::test]
    async fn requires_query() {
        let error = client().searches().playlists("", 1).await.unwrap_err();
        assert!(matches!(error, ClientError::MissingParameter("search query")));
    }

    #[tokio::test]
    async fn autocomplete() {
        let _mock = mock_request_success_from_file(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "autocomplete.get".into()),
                Matcher::UrlEncoded("query".into(), "tum hi ho".into()),
                Matcher::UrlEncoded("type".into(), "song".into()),
            ],
            "tests/files/autocomplete.json",
        );

        let result = client()
            .searches()
            .autocomplete("tum hi ho", autocomplete_limit(None))
            .await
            .unwrap();

        assert_eq!(result.total, 3);
        let ids: Vec<&str> = result.results.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["5WXAlMNt", "gvUgMp3l", "LmVSKT0P"]);
        assert_eq!(result.results[0].title, "Tum Hi Ho");
        assert_eq!(
            result.results[0].image,
            "https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-150x150.jpg"
        );
        assert_eq!(result.results[1].artists, "Ankit Tiwari");
        assert_eq!(result.results[2].description, "Neeraj Shridhar, Kavita Seth · Cocktail");
    }

    #[tokio::test]
    async fn autocomplete_clamps_limit() {
        let _mock = mock_request_success_from_file(
            "GET",
            API_PATH,
            vec![
                Matcher::UrlEncoded("__call".into(), "autocomplete.get".into()),
                Matcher::UrlEncoded("query".into(), "tum hi".into()),
            ],
            "tests/files/autocomplete.json",
        );

        let result = client().searches().autocomplete("tum hi", 0).await.unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.results[0].id, "5WXAlMNt");
    }
}
