// Use local
use crate::model::{Image, ImageQuality};

const LARGE: &str = "500x500";

/// Expands one upstream image URL into the 50x50, 150x150 and 500x500
/// variants. An empty URL means there is no artwork and yields no variants.
pub fn image_variants(url: &str) -> Vec<Image> {
    if url.is_empty() {
        return Vec::new();
    }

    match large_url(url) {
        Some(large) => ImageQuality::ALL
            .iter()
            .map(|quality| Image {
                quality: *quality,
                url: large.replacen(LARGE, quality.token(), 1),
            })
            .collect(),
        None => ImageQuality::ALL
            .iter()
            .map(|quality| Image {
                quality: *quality,
                url: url.to_owned(),
            })
            .collect(),
    }
}

/// Rewrites whichever resolution token the URL carries to 500x500. `None`
/// when the URL has no recognizable size.
fn large_url(url: &str) -> Option<String> {
    if url.contains(LARGE) {
        return Some(url.to_owned());
    }

    for smaller in [ImageQuality::Medium, ImageQuality::Small] {
        if url.contains(smaller.token()) {
            return Some(url.replacen(smaller.token(), LARGE, 1));
        }
    }

    url.strip_suffix(".jpg")
        .map(|stem| format!("{}-{}.jpg", stem, LARGE))
}

/// Autocomplete thumbnails come at 50x50; bump them to 150x150.
pub fn upsized_thumbnail(url: &str) -> String {
    // "150x150" itself contains "50x50".
    if url.contains(ImageQuality::Medium.token()) {
        return url.to_owned();
    }
    url.replacen(ImageQuality::Small.token(), ImageQuality::Medium.token(), 1)
}
