// Use 3rd party
use serde_json::Value;

// Use local
use crate::format::image::image_variants;
use crate::format::song::{delimited_artists, song, DETAIL};
use crate::format::{objects, Fallback, Fields};
use crate::media::MediaUrlResolver;
use crate::model::album::Album;
use crate::model::{SongEntry, SongStub};

/// Album from `content.getAlbumDetails`. Tracks use the detail song layout
/// and `songCount` is the number of tracks actually returned.
pub fn album(data: &Value, media: &MediaUrlResolver) -> Album {
    let fields = Fallback::new(data, data.obj_field("more_info"));
    let songs: Vec<SongEntry> = objects(data.list_field("songs"))
        .map(|track| SongEntry::from(song(track, &DETAIL, media)))
        .collect();

    Album {
        id: fields.first_string(&["albumid", "id"]),
        name: fields.first_string(&["name", "title"]),
        year: fields.string("year"),
        language: fields.string("language"),
        explicit_content: fields.flag("explicit_content"),
        song_count: songs.len() as i64,
        url: fields.string("perma_url"),
        image: image_variants(&data.str_field("image")),
        artists: delimited_artists(fields),
        songs,
    }
}

/// Album from `webapi.get`, which answers with a flat track `list` where
/// every track repeats the album metadata. Album fields come from the first
/// track; tracks are reduced to id and name.
pub fn album_from_token(list: &Value) -> Album {
    let tracks = match list.as_array() {
        Some(tracks) if !tracks.is_empty() => tracks,
        _ => return Album::default(),
    };

    let first = &tracks[0];
    let first_info = first.obj_field("more_info");
    let songs: Vec<SongEntry> = objects(tracks)
        .map(|track| {
            SongEntry::Stub(SongStub {
                id: track.str_field("id"),
                name: Some(track.str_field("title")),
            })
        })
        .collect();

    Album {
        id: first.str_field("id"),
        name: first.str_field("title"),
        year: first.str_field("year"),
        language: first.str_field("language"),
        explicit_content: first.bool_field("explicit_content"),
        song_count: songs.len() as i64,
        url: first_info.str_field("album_url"),
        image: image_variants(&first.str_field("image")),
        songs,
        ..Default::default()
    }
}
