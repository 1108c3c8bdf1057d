//! Recovery of streaming URLs from upstream's `encrypted_media_url` tokens.
//!
//! Upstream encrypts each media URL with single DES in ECB mode under a fixed
//! ASCII key and base64-encodes the result. The decrypted URL points at one
//! bitrate; the sibling bitrates and the preview clip live next to it and
//! differ only by file suffix and host.

// Use 3rd party
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cipher::{block_padding::NoPadding, BlockDecryptMut, KeyInit};
use des::Des;
use log::debug;

// Use local
use crate::model::{Bitrate, DownloadUrl};

type DesEcbDecryptor = ecb::Decryptor<Des>;

const BLOCK_SIZE: usize = 8;

const SUFFIX_96: &str = "_96.mp4";
const SUFFIX_160: &str = "_160.mp4";
const SUFFIX_320: &str = "_320.mp4";
const SUFFIX_PREVIEW: &str = "_96_p.mp4";

/// Every URL derived from one media token.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaLinks {
    /// Ascending by bitrate. 320kbps is only present when upstream flags it.
    pub download_urls: Vec<DownloadUrl>,
    pub preview_url: String,
}

#[derive(Debug, Clone)]
pub struct MediaUrlResolver {
    key: Vec<u8>,
}

impl MediaUrlResolver {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self {
            key: key.as_bytes().to_vec(),
        }
    }

    /// Decrypts a media token into its URL, normalized to the 320kbps file
    /// name. Any failure yields an empty string.
    pub fn decrypt(&self, encrypted: &str) -> String {
        if encrypted.is_empty() {
            return String::new();
        }

        match self.decrypt_bytes(encrypted) {
            Some(url) => url.replacen(SUFFIX_96, SUFFIX_320, 1),
            None => {
                debug!("could not decrypt media token {:?}", encrypted);
                String::new()
            }
        }
    }

    fn decrypt_bytes(&self, encrypted: &str) -> Option<String> {
        let mut data = STANDARD.decode(encrypted.trim()).ok()?;
        if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
            return None;
        }

        let decryptor = DesEcbDecryptor::new_from_slice(&self.key).ok()?;
        let decrypted = decryptor.decrypt_padded_mut::<NoPadding>(&mut data).ok()?;

        Some(String::from_utf8_lossy(strip_pkcs5(decrypted)).into_owned())
    }

    /// Decrypts `encrypted` and derives the download and preview URLs.
    pub fn resolve(&self, encrypted: &str, has_320: bool) -> MediaLinks {
        let decrypted = self.decrypt(encrypted);

        // The best available file is the base every other variant is cut from.
        let (base, top) = if has_320 {
            (decrypted, SUFFIX_320)
        } else {
            (decrypted.replacen(SUFFIX_320, SUFFIX_160, 1), SUFFIX_160)
        };

        let mut download_urls = vec![
            DownloadUrl {
                quality: Bitrate::Kbps96,
                url: base.replacen(top, SUFFIX_96, 1),
            },
            DownloadUrl {
                quality: Bitrate::Kbps160,
                url: base.replacen(top, SUFFIX_160, 1),
            },
        ];
        let preview_url = preview_url(&download_urls[1].url);

        if has_320 {
            download_urls.push(DownloadUrl {
                quality: Bitrate::Kbps320,
                url: base,
            });
        }

        MediaLinks {
            download_urls,
            preview_url,
        }
    }
}

/// Drops PKCS#5 padding. An impossible pad length leaves the data as is.
fn strip_pkcs5(data: &[u8]) -> &[u8] {
    match data.last() {
        Some(&pad) if pad > 0 && usize::from(pad) <= data.len() => {
            &data[..data.len() - usize::from(pad)]
        }
        _ => data,
    }
}

fn preview_url(media_url: &str) -> String {
    media_url
        .replacen(SUFFIX_320, SUFFIX_PREVIEW, 1)
        .replacen(SUFFIX_160, SUFFIX_PREVIEW, 1)
        .replacen("//aac.", "//preview.", 1)
}
