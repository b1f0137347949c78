//! Vimeo link to player embed form.

use url::Url;

use super::error::EmbedError;

/// Rewrites a Vimeo URL to `https://player.vimeo.com/video/{id}`.
///
/// The ID is the last non-empty path segment, so both plain video links and
/// channel/showcase paths resolve to their trailing ID. URLs already on
/// `player.vimeo.com` are returned as-is.
pub fn to_embed(raw: &str) -> Result<String, EmbedError> {
    let parsed = Url::parse(raw)?;
    if parsed.host_str().unwrap_or("").contains("player.vimeo.com") {
        return Ok(raw.to_string());
    }

    let id = parsed
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .ok_or(EmbedError::MissingVideoId)?;
    Ok(format!("https://player.vimeo.com/video/{id}"))
}
