//! Song normalization.
//!
//! Upstream serves songs in two layouts. The detail layout
//! (`song.getDetails`, album tracks, artist top songs) keeps every field at
//! the top level and credits artists as parallel comma separated name and id
//! strings. The token layout (`webapi.get`, search results) keeps most
//! fields in a nested `more_info` object and credits artists through a
//! role keyed `artistMap`. Both are built by [`song`], parameterized by a
//! [`SongLayout`].

// Use 3rd party
use serde_json::Value;

// Use local
use crate::format::image::image_variants;
use crate::format::{objects, Fallback, Fields};
use crate::media::MediaUrlResolver;
use crate::model::artist::Artist;
use crate::model::song::{Artists, Song, SongAlbum};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArtistSource {
    /// `primary_artists` / `primary_artists_id` style parallel lists.
    Delimited,
    /// `more_info.artistMap` with one array per role.
    ArtistMap,
}

/// Where a song layout keeps its fields.
#[derive(Debug, Clone, Copy)]
pub struct SongLayout {
    /// Keys that may hold the song title, in order of preference.
    pub name_keys: &'static [&'static str],
    /// Whether `more_info` is consulted before the top level.
    pub nested_first: bool,
    pub artists: ArtistSource,
}

pub const DETAIL: SongLayout = SongLayout {
    name_keys: &["song", "title"],
    nested_first: false,
    artists: ArtistSource::Delimited,
};

pub const TOKEN: SongLayout = SongLayout {
    name_keys: &["title", "song"],
    nested_first: true,
    artists: ArtistSource::ArtistMap,
};

const ALBUM_ID_KEYS: &[&str] = &["albumid", "album_id"];

pub fn song(data: &Value, layout: &SongLayout, media: &MediaUrlResolver) -> Song {
    let info = data.obj_field("more_info");
    let fields = if layout.nested_first {
        Fallback::new(info, data)
    } else {
        Fallback::new(data, info)
    };

    let links = media.resolve(
        &fields.string("encrypted_media_url"),
        fields.flag("320kbps"),
    );
    let lyrics_id = fields.string("lyrics_id");

    Song {
        id: data.str_field("id"),
        name: fields.first_string(layout.name_keys),
        year: fields.string("year"),
        release_date: fields.string("release_date"),
        duration: fields.int("duration"),
        label: fields.string("label"),
        explicit_content: fields.flag("explicit_content"),
        play_count: fields.int("play_count"),
        language: fields.string("language"),
        has_lyrics: fields.flag("has_lyrics"),
        lyrics_id: Some(lyrics_id).filter(|id| !id.is_empty()),
        url: fields.string("perma_url"),
        copyright: fields.string("copyright_text"),
        album: SongAlbum {
            id: fields.first_string(ALBUM_ID_KEYS),
            name: fields.string("album"),
            url: fields.string("album_url"),
        },
        artists: match layout.artists {
            ArtistSource::Delimited => delimited_artists(fields),
            ArtistSource::ArtistMap => mapped_artists(fields.object("artistMap")),
        },
        image: image_variants(&data.str_field("image")),
        download_url: links.download_urls,
    }
}

/// Detail layout credits. Only primary and featured lists exist, so `all`
/// repeats the primary artists.
pub(crate) fn delimited_artists(fields: Fallback<'_>) -> Artists {
    let primary = split_artists(fields, "primary_artists");
    let featured = split_artists(fields, "featured_artists");
    Artists {
        all: primary.clone(),
        primary,
        featured,
    }
}

/// Zips `<role>` names with `<role>_id` ids. Names without a matching id get
/// an empty id.
fn split_artists(fields: Fallback<'_>, role: &str) -> Vec<Artist> {
    let names = fields.string(role);
    if names.is_empty() {
        return Vec::new();
    }

    let ids = fields.string(&format!("{}_id", role));
    let ids: Vec<&str> = ids.split(", ").map(str::trim).collect();

    names
        .split(", ")
        .enumerate()
        .map(|(index, name)| Artist {
            id: ids.get(index).copied().unwrap_or_default().to_owned(),
            name: name.trim().to_owned(),
            role: role.to_owned(),
            ..Default::default()
        })
        .collect()
}

/// Token layout credits: each role bucket is mapped on its own.
pub(crate) fn mapped_artists(artist_map: &Value) -> Artists {
    Artists {
        primary: artist_bucket(artist_map, "primary_artists"),
        featured: artist_bucket(artist_map, "featured_artists"),
        all: artist_bucket(artist_map, "artists"),
    }
}

fn artist_bucket(artist_map: &Value, key: &str) -> Vec<Artist> {
    objects(artist_map.list_field(key)).map(artist).collect()
}

/// A credited artist as it appears inside `artistMap` or artist search.
pub(crate) fn artist(data: &Value) -> Artist {
    Artist {
        id: data.str_field("id"),
        name: data.str_field("name"),
        role: data.str_field("role"),
        image: image_variants(&data.str_field("image")),
        url: data.str_field("perma_url"),
    }
}
