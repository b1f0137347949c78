//! Embed transform error taxonomy.

use thiserror::Error;

/// Why a URL could not be rewritten to an embeddable form.
///
/// [`normalize_embed_url`](super::normalize_embed_url) collapses every
/// variant to "return the input unchanged"; the fallible entry points
/// surface it for callers that want the reason.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The input is not parseable as a URL at all.
    #[error("unparseable URL: {0}")]
    Unparseable(#[from] url::ParseError),

    /// The URL parsed, but its hostname matches no supported platform
    /// (or the URL has no host).
    #[error("host {host:?} is not a supported video platform")]
    UnrecognizedHost { host: String },

    /// A platform matched, but no video ID could be extracted.
    #[error("no video ID found in URL")]
    MissingVideoId,
}
