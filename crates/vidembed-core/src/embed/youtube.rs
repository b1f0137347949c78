//! YouTube share/watch link to embed form.

use url::Url;

use super::error::EmbedError;

/// Rewrites a YouTube URL to `https://www.youtube.com/embed/{id}`.
///
/// Handles the three shapes content authors paste:
///
/// - `https://youtu.be/ID` → ID is the path with its leading slash removed
/// - `https://www.youtube.com/watch?v=ID` → ID from the `v` query parameter
/// - `https://www.youtube.com/embed/ID` → already embeddable, returned as-is
///
/// The `v` value is used as the parser decoded it, with no re-encoding.
pub fn to_embed(raw: &str) -> Result<String, EmbedError> {
    let parsed = Url::parse(raw)?;
    let host = parsed.host_str().unwrap_or("");

    let id = if host.contains("youtu.be") {
        let path = parsed.path();
        path.strip_prefix('/').unwrap_or(path).to_string()
    } else if parsed.path().starts_with("/embed/") {
        return Ok(raw.to_string());
    } else {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default()
    };

    if id.is_empty() {
        return Err(EmbedError::MissingVideoId);
    }
    Ok(format!("https://www.youtube.com/embed/{id}"))
}
