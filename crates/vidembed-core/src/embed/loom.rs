//! Loom share link to embed form.

use url::Url;

use super::error::EmbedError;

/// Rewrites a Loom URL to `https://www.loom.com/embed/{id}`.
///
/// The ID is the last non-empty path segment. Share links carry
/// session-tracking query data (`sid=...`) the embed form does not use;
/// the whole query is discarded.
pub fn to_embed(raw: &str) -> Result<String, EmbedError> {
    let parsed = Url::parse(raw)?;
    let id = parsed
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .ok_or(EmbedError::MissingVideoId)?;
    Ok(format!("https://www.loom.com/embed/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_drops_sid() {
        assert_eq!(
            to_embed(
                "https://www.loom.com/share/42fbf3616982457ba3dd01e1b1d26b83?sid=6928ce21-193e-4382-aca9-42378bd12ea0"
            )
            .unwrap(),
            "https://www.loom.com/embed/42fbf3616982457ba3dd01e1b1d26b83"
        );
    }

    #[test]
    fn share_link_without_query() {
        assert_eq!(
            to_embed("https://www.loom.com/share/42fbf3616982457ba3dd01e1b1d26b83").unwrap(),
            "https://www.loom.com/embed/42fbf3616982457ba3dd01e1b1d26b83"
        );
    }

    #[test]
    fn embed_link_reproduced() {
        // Re-applying the transform to its own output is a fixed point:
        // the embed form's last path segment is the ID itself.
        let embed = "https://www.loom.com/embed/42fbf3616982457ba3dd01e1b1d26b83";
        assert_eq!(to_embed(embed).unwrap(), embed);
    }

    #[test]
    fn root_path_has_no_id() {
        assert!(matches!(
            to_embed("https://www.loom.com/"),
            Err(EmbedError::MissingVideoId)
        ));
    }

    #[test]
    fn unparseable() {
        assert!(matches!(to_embed(""), Err(EmbedError::Unparseable(_))));
    }
}
