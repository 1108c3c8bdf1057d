use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lyrics {
    pub lyrics: String,
    pub snippet: String,
    pub copyright: String,
}
