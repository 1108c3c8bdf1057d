// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::{Image, SongEntry};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "playlist", rename_all = "camelCase")]
pub struct Playlist {
  pub id: String,
  pub name: String,
  pub subtitle: String,
  pub image: Vec<Image>,
  pub language: String,
  pub url: String,
  pub description: String,
  pub song_count: i64,
  pub songs: Vec<SongEntry>,
}
