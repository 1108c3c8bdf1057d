// Use 3rd party
use serde_json::Value;

// Use local
use crate::format::Fields;
use crate::model::lyrics::Lyrics;

/// Lyrics from `lyrics.getLyrics`, with `<br>` breaks turned into newlines.
pub fn lyrics(data: &Value) -> Lyrics {
    Lyrics {
        lyrics: data.str_field("lyrics").replace("<br>", "\n"),
        snippet: data.str_field("snippet"),
        copyright: data.str_field("lyrics_copyright"),
    }
}
