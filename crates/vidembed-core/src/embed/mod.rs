//! Lesson video embed-URL normalization.
//!
//! Rewrites author-pasted share/watch links from the supported video
//! platforms into the URL form an inline player needs, and passes anything
//! unrecognized through unchanged.

mod error;
mod platform;

pub mod loom;
pub mod vimeo;
pub mod youtube;

pub use error::EmbedError;
pub use platform::Platform;

use url::Url;

/// Rewrites `url` to its embeddable form, or returns it unchanged.
///
/// Never fails and never panics: malformed input, unrecognized hosts, and
/// URLs missing a video ID all come back verbatim, so the result can go
/// straight into an iframe `src` attribute or a persisted content row.
/// Calling it again on its own output yields the same string.
///
/// # Examples
///
/// - `"https://youtu.be/dQw4w9WgXcQ"` → `"https://www.youtube.com/embed/dQw4w9WgXcQ"`
/// - `"https://vimeo.com/12345678"` → `"https://player.vimeo.com/video/12345678"`
/// - `"not a url"` → `"not a url"`
pub fn normalize_embed_url(url: &str) -> String {
    match try_embed_url(url) {
        Ok(embed) => embed,
        Err(reason) => {
            tracing::debug!(url, %reason, "passing URL through unchanged");
            url.to_string()
        }
    }
}

/// Fallible form of [`normalize_embed_url`]: reports why a URL was left
/// alone instead of silently passing it through.
///
/// Already-embeddable URLs are `Ok` with the input returned unchanged.
pub fn try_embed_url(url: &str) -> Result<String, EmbedError> {
    let parsed = Url::parse(url)?;
    let host = parsed.host_str().unwrap_or("");
    let platform = Platform::from_host(host).ok_or_else(|| EmbedError::UnrecognizedHost {
        host: host.to_string(),
    })?;
    platform.embed_url(url)
}
