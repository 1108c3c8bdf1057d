//! Per-type search results.
//!
//! Every search call answers with `{total, start, results}`. A response
//! with no hits may not be an object at all, which reads as zero results.

// Use 3rd party
use serde_json::Value;

// Use local
use crate::format::image::image_variants;
use crate::format::song::{artist, mapped_artists, song, TOKEN};
use crate::format::{objects, Fallback, Fields};
use crate::media::MediaUrlResolver;
use crate::model::album::Album;
use crate::model::artist::Artist;
use crate::model::playlist::Playlist;
use crate::model::search::SearchResults;
use crate::model::song::Song;

fn results<T, F>(data: &Value, format: F) -> SearchResults<T>
where
    F: FnMut(&Value) -> T,
{
    if !data.is_object() {
        return SearchResults::default();
    }

    SearchResults {
        total: data.int_field("total"),
        start: data.int_field("start"),
        results: objects(data.list_field("results")).map(format).collect(),
    }
}

/// Song hits, most played first. Equal play counts keep upstream order.
pub fn songs(data: &Value, media: &MediaUrlResolver) -> SearchResults<Song> {
    let mut found = results(data, |item| song(item, &TOKEN, media));
    found
        .results
        .sort_by(|a, b| b.play_count.cmp(&a.play_count));
    found
}

pub fn albums(data: &Value) -> SearchResults<Album> {
    results(data, |item| {
        let info = item.obj_field("more_info");
        let fields = Fallback::new(item, info);
        Album {
            id: item.str_field("id"),
            name: item.str_field("title"),
            year: fields.string("year"),
            language: fields.string("language"),
            explicit_content: fields.flag("explicit_content"),
            song_count: fields.int("song_count"),
            url: item.str_field("perma_url"),
            image: image_variants(&item.str_field("image")),
            artists: mapped_artists(info.obj_field("artistMap")),
            songs: Vec::new(),
        }
    })
}

pub fn artists(data: &Value) -> SearchResults<Artist> {
    results(data, artist)
}

pub fn playlists(data: &Value) -> SearchResults<Playlist> {
    results(data, |item| {
        let fields = Fallback::new(item.obj_field("more_info"), item);
        Playlist {
            id: item.str_field("id"),
            name: item.str_field("title"),
            subtitle: item.str_field("subtitle"),
            image: image_variants(&playlist_image(item)),
            language: fields.string("language"),
            url: item.str_field("perma_url"),
            description: item.str_field("description"),
            song_count: fields.int("song_count"),
            songs: Vec::new(),
        }
    })
}

/// Some playlist hits carry an HTML error page where the image URL belongs.
fn playlist_image(item: &Value) -> String {
    let image = item.str_field("image");
    let lowered = image.to_ascii_lowercase();
    if lowered.starts_with("<!doctype") || lowered.starts_with("<html") {
        String::new()
    } else {
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::tests::resolver;
    use serde_json::json;

    #[test]
    fn songs_sorted_by_play_count() {
        let data = json!({
            "total": 3,
            "start": 1,
            "results": [
                {"id": "first", "title": "A", "play_count": "10"},
                {"id": "popular", "title": "B", "play_count": 50},
                {"id": "last", "title": "C", "more_info": {"play_count": "10"}},
            ],
        });
        let found = songs(&data, &resolver());

        assert_eq!(found.total, 3);
        assert_eq!(found.start, 1);
        let ids: Vec<&str> = found.results.iter().map(|song| song.id.as_str()).collect();
        assert_eq!(ids, vec!["popular", "first", "last"]);
        let counts: Vec<i64> = found.results.iter().map(|song| song.play_count).collect();
        assert_eq!(counts, vec![50, 10, 10]);
    }

    #[test]
    fn song_hits_use_token_layout() {
        let data = json!({
            "results": [{
                "id": "x1",
                "title": "  Kesariya ",
                "image": "https://c.saavncdn.com/1/k-150x150.jpg",
                "more_info": {
                    "album": "Brahmastra",
                    "album_id": "b1",
                    "duration": "268",
                    "320kbps": "true",
                    "artistMap": {
                        "primary_artists": [{"id": "459320", "name": "Arijit Singh", "role": "singer"}],
                    },
                },
            }],
        });
        let found = songs(&data, &resolver());
        let song = &found.results[0];

        assert_eq!(song.name, "Kesariya");
        assert_eq!(song.duration, 268);
        assert_eq!(song.album.id, "b1");
        assert_eq!(song.artists.primary[0].role, "singer");
        assert_eq!(song.download_url.len(), 3);
    }

    #[test]
    fn non_object_is_empty() {
        for data in [json!([]), json!(""), Value::Null] {
            assert_eq!(songs(&data, &resolver()), SearchResults::default());
            assert!(albums(&data).results.is_empty());
            assert_eq!(artists(&data).total, 0);
            assert!(playlists(&data).results.is_empty());
        }
    }

    #[test]
    fn missing_results() {
        let found = artists(&json!({"total": "4", "start": "1"}));
        assert_eq!(found.total, 4);
        assert_eq!(found.start, 1);
        assert!(found.results.is_empty());
    }

    #[test]
    fn album_hits() {
        let data = json!({
            "total": 1,
            "start": 1,
            "results": [{
                "id": "a1",
                "title": "Aashiqui 2",
                "year": "2013",
                "perma_url": "https://www.jiosaavn.com/album/aashiqui-2/x",
                "image": "https://c.saavncdn.com/1/a-150x150.jpg",
                "explicit_content": "0",
                "more_info": {
                    "language": "hindi",
                    "song_count": "11",
                    "artistMap": {
                        "primary_artists": [{"id": "1", "name": "Mithoon"}],
                        "artists": [{"id": "1", "name": "Mithoon"}, {"id": "2", "name": "Ankit Tiwari"}],
                    },
                },
            }],
        });
        let album = &albums(&data).results[0];

        assert_eq!(album.name, "Aashiqui 2");
        assert_eq!(album.language, "hindi");
        assert_eq!(album.song_count, 11);
        assert!(!album.explicit_content);
        assert_eq!(album.artists.primary.len(), 1);
        assert_eq!(album.artists.all.len(), 2);
        assert!(album.artists.featured.is_empty());
        assert!(album.songs.is_empty());
    }

    #[test]
    fn artist_hits() {
        let data = json!({
            "results": [
                {"id": "459320", "name": "Arijit Singh", "role": "singer", "perma_url": "https://www.jiosaavn.com/artist/a/x"},
                "noise",
            ],
        });
        let found = artists(&data);
        assert_eq!(found.results.len(), 1);
        assert_eq!(found.results[0].url, "https://www.jiosaavn.com/artist/a/x");
        assert!(found.results[0].image.is_empty());
    }

    #[test]
    fn playlist_hits() {
        let data = json!({
            "results": [
                {
                    "id": "p1",
                    "title": "Romance",
                    "subtitle": "JioSaavn",
                    "image": "https://c.saavncdn.com/editorial/r_150x150.jpg",
                    "more_info": {"song_count": "50", "language": "hindi"},
                },
                {
                    "id": "p2",
                    "title": "Broken",
                    "language": "english",
                    "song_count": 5,
                    "image": "<!DOCTYPE html><html></html>",
                },
            ],
        });
        let found = playlists(&data);

        assert_eq!(found.results[0].song_count, 50);
        assert_eq!(found.results[0].subtitle, "JioSaavn");
        assert_eq!(found.results[0].language, "hindi");
        assert_eq!(found.results[0].image.len(), 3);
        assert_eq!(found.results[1].song_count, 5);
        assert_eq!(found.results[1].language, "english");
        assert!(found.results[1].image.is_empty());
    }
}
