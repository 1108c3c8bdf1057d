//! Rsaavn is a wrapper for the unofficial JioSaavn API.
//!
//! Upstream answers the same entity in several loosely typed layouts and
//! hides streaming URLs behind DES encrypted tokens. Rsaavn fetches those
//! payloads and normalizes them into one stable set of models, with every
//! field always present and download and preview URLs already resolved.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rsaavn = "0.1.0"
//! ```
//!
//! Rsaavn uses asynchronous programming with `async` and `await`.
//!
//! The client is built from a [`SaavnConfig`](config::SaavnConfig) holding the
//! upstream base URL and the key media tokens are decrypted with. Both have
//! working defaults and can be overridden through the `JIOSAAVN_BASE_URL` and
//! `DECRYPTION_KEY` environment variables.
//!
//! ## Getting Started
//!
//! Endpoints are grouped by entity: `songs()`, `albums()`, `artists()`,
//! `playlists()`, `lyrics()` and `searches()`. Missing entities come back as
//! [`ClientError::NotFound`](client::ClientError::NotFound); the
//! [`ApiResponse`](model::response::ApiResponse) envelope turns any result
//! into the `{"success": .., "data": ..}` shape served to consumers.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! rsaavn = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```rust,no_run
//! use rsaavn::client::Saavn;
//! use rsaavn::config::SaavnConfig;
//! use dotenv::dotenv;
//!
//! #[tokio::main]
//! async fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     let client = Saavn::new(SaavnConfig::from_env());
//!
//!     let song = client.songs().get("5WXAlMNt").await;
//!     println!("{:?}", song.unwrap());
//!
//!     let hits = client.searches().songs("tum hi ho", 1).await;
//!     for song in hits.unwrap().results {
//!         println!("{} {:?}", song.name, song.download_url);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod format;
pub mod media;
pub mod model;
