pub mod album;
pub mod artist;
pub mod lyrics;
pub mod playlist;
pub mod response;
pub mod search;
pub mod song;

use serde::{Deserialize, Serialize};

use crate::model::song::Song;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageQuality {
    #[serde(rename = "50x50")]
    Small,
    #[serde(rename = "150x150")]
    Medium,
    #[serde(rename = "500x500")]
    Large,
}

impl ImageQuality {
    pub const ALL: [ImageQuality; 3] = [Self::Small, Self::Medium, Self::Large];

    /// The resolution token upstream embeds in image URLs.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "50x50",
            Self::Medium => "150x150",
            Self::Large => "500x500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bitrate {
    #[serde(rename = "96kbps")]
    Kbps96,
    #[serde(rename = "160kbps")]
    Kbps160,
    #[serde(rename = "320kbps")]
    Kbps320,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub quality: ImageQuality,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadUrl {
    pub quality: Bitrate,
    pub url: String,
}

/// A song reference that carries nothing beyond what upstream listed.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongStub {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Album and playlist track lists hold full songs or bare stubs depending
/// on which upstream shape they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SongEntry {
    Full(Box<Song>),
    Stub(SongStub),
}

impl SongEntry {
    pub fn id(&self) -> &str {
        match self {
            Self::Full(song) => &song.id,
            Self::Stub(stub) => &stub.id,
        }
    }
}

impl From<Song> for SongEntry {
    fn from(song: Song) -> Self {
        Self::Full(Box::new(song))
    }
}

impl From<SongStub> for SongEntry {
    fn from(stub: SongStub) -> Self {
        Self::Stub(stub)
    }
}
