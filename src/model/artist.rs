// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::song::Song;
use crate::model::Image;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "artist")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: Vec<Image>,
    pub url: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "artist", rename_all = "camelCase")]
pub struct ArtistDetails {
    pub id: String,
    pub name: String,
    pub url: String,
    pub follower_count: i64,
    pub fan_count: String,
    pub is_verified: bool,
    pub dominant_language: String,
    pub dominant_type: String,
    pub bio: String,
    pub dob: String,
    pub fb: String,
    pub twitter: String,
    pub wiki: String,
    pub image: Vec<Image>,
    pub top_songs: Vec<Song>,
    pub top_albums: Vec<AlbumSummary>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
    pub image: Vec<Image>,
    pub url: String,
    pub year: String,
}
