pub mod albums;
pub mod artists;
pub mod lyrics;
pub mod playlists;
pub mod search;
pub mod songs;

use crate::client::Saavn;
use crate::endpoints::albums::*;
use crate::endpoints::artists::*;
use crate::endpoints::lyrics::*;
use crate::endpoints::playlists::*;
use crate::endpoints::search::*;
use crate::endpoints::songs::*;

// Endpoint function namespaces

impl Saavn {
    pub const fn albums(&self) -> Albums {
        Albums(self)
    }

    pub const fn artists(&self) -> Artists {
        Artists(self)
    }

    pub const fn lyrics(&self) -> LyricsEndpoint {
        LyricsEndpoint(self)
    }

    pub const fn playlists(&self) -> Playlists {
        Playlists(self)
    }

    pub const fn searches(&self) -> Search {
        Search(self)
    }

    pub const fn songs(&self) -> Songs {
        Songs(self)
    }
}
