// Use 3rd party
use serde_json::Value;

// Use local
use crate::format::image::image_variants;
use crate::format::song::{song, DETAIL};
use crate::format::{objects, Fields};
use crate::media::MediaUrlResolver;
use crate::model::playlist::Playlist;
use crate::model::{SongEntry, SongStub};

/// Playlist from `webapi.get`.
///
/// Songs come from the `list` of full song objects when it has any;
/// otherwise from `more_info.contents`, a comma separated id string, as
/// id-only stubs. Playlist metadata is always read from the top level.
pub fn playlist_from_token(data: &Value, media: &MediaUrlResolver) -> Playlist {
    let mut songs: Vec<SongEntry> = objects(data.list_field("list"))
        .map(|item| SongEntry::from(song(item, &DETAIL, media)))
        .collect();

    if songs.is_empty() {
        songs = song_stubs(&data.obj_field("more_info").str_field("contents"));
    }

    Playlist {
        id: data.str_field("id"),
        name: data.str_field("title"),
        subtitle: data.str_field("subtitle"),
        image: image_variants(&data.str_field("image")),
        language: data.str_field("language"),
        url: data.str_field("perma_url"),
        description: data.str_field("header_desc"),
        song_count: songs.len() as i64,
        songs,
    }
}

/// Splits `"10,20,30"` into id-only stubs, dropping empty pieces.
fn song_stubs(contents: &str) -> Vec<SongEntry> {
    contents
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            SongEntry::from(SongStub {
                id: id.to_owned(),
                name: None,
            })
        })
        .collect()
}
