// Use 3rd party
use serde_json::Value;

// Use local
use crate::format::image::image_variants;
use crate::format::song::{song, DETAIL};
use crate::format::{objects, Fields};
use crate::media::MediaUrlResolver;
use crate::model::artist::{AlbumSummary, ArtistDetails};

/// Artist page from `artist.getArtistPageDetails`.
pub fn artist_details(data: &Value, media: &MediaUrlResolver) -> ArtistDetails {
    ArtistDetails {
        id: data.str_field("artistId"),
        name: data.str_field("name"),
        url: data.str_field("perma_url"),
        follower_count: data.int_field("follower_count"),
        fan_count: data.str_field("fan_count"),
        is_verified: data.str_field("isVerified") == "true",
        dominant_language: data.str_field("dominantLanguage"),
        dominant_type: data.str_field("dominantType"),
        bio: data.str_field("bio"),
        dob: data.str_field("dob"),
        fb: data.str_field("fb"),
        twitter: data.str_field("twitter"),
        wiki: data.str_field("wiki"),
        image: image_variants(&data.str_field("image")),
        top_songs: objects(data.list_field("topSongs"))
            .map(|item| song(item, &DETAIL, media))
            .collect(),
        top_albums: objects(data.list_field("topAlbums"))
            .map(album_summary)
            .collect(),
    }
}

fn album_summary(data: &Value) -> AlbumSummary {
    AlbumSummary {
        id: data.str_field("albumid"),
        name: data.str_field("title"),
        image: image_variants(&data.str_field("image")),
        url: data.str_field("perma_url"),
        year: data.str_field("year"),
    }
}
