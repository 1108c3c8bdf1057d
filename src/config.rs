// Use 3rd party
use log::debug;
use serde::{Deserialize, Serialize};

// Use built-in library
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://www.jiosaavn.com/api.php";
pub const DEFAULT_DECRYPTION_KEY: &str = "38346591";

/// Settings shared by every upstream call.
///
/// The decryption key is the 8 byte ASCII key upstream uses to obfuscate
/// media URLs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaavnConfig {
    pub base_url: String,
    pub decryption_key: String,
}

impl Default for SaavnConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            decryption_key: DEFAULT_DECRYPTION_KEY.to_owned(),
        }
    }
}

impl SaavnConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `JIOSAAVN_BASE_URL` and `DECRYPTION_KEY`, falling back to the
    /// defaults for anything unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            base_url: env_or("JIOSAAVN_BASE_URL", DEFAULT_BASE_URL),
            decryption_key: env_or("DECRYPTION_KEY", DEFAULT_DECRYPTION_KEY),
        };
        debug!("loaded config, base url: {}", config.base_url);
        config
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_owned();
        self
    }

    pub fn decryption_key(mut self, key: &str) -> Self {
        self.decryption_key = key.to_owned();
        self
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_owned(),
    }
}
