// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::artist::Artist;
use crate::model::{DownloadUrl, Image};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "song", rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub name: String,
    pub year: String,
    pub release_date: String,
    pub duration: i64,
    pub label: String,
    pub explicit_content: bool,
    pub play_count: i64,
    pub language: String,
    pub has_lyrics: bool,
    pub lyrics_id: Option<String>,
    pub url: String,
    pub copyright: String,
    pub album: SongAlbum,
    pub artists: Artists,
    pub image: Vec<Image>,
    pub download_url: Vec<DownloadUrl>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongAlbum {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Artist credits bucketed by role. The same artist may appear in more
/// than one bucket.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artists {
    pub primary: Vec<Artist>,
    pub featured: Vec<Artist>,
    pub all: Vec<Artist>,
}
