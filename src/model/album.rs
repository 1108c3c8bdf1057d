// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::song::Artists;
use crate::model::{Image, SongEntry};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "album", rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub year: String,
    pub language: String,
    pub explicit_content: bool,
    pub song_count: i64,
    pub url: String,
    pub image: Vec<Image>,
    pub artists: Artists,
    pub songs: Vec<SongEntry>,
}
