//! `vidembed detect` – show the detected platform per URL.

use anyhow::Result;
use std::path::Path;

use vidembed_core::embed::Platform;

use crate::cli::input::collect_urls;

pub fn run_detect(urls: &[String], file: Option<&Path>) -> Result<()> {
    let inputs = collect_urls(urls, file)?;
    if inputs.is_empty() {
        anyhow::bail!("no URLs given (pass them as arguments or via --file)");
    }

    print!("{}", plain_report(&inputs));
    Ok(())
}

/// Renders the detect column layout: a header row, then one row per URL.
fn plain_report(inputs: &[String]) -> String {
    let mut text = format!("{:<8} {}\n", "PLATFORM", "URL");
    for input in inputs {
        let name = Platform::detect(input).map(|p| p.as_str()).unwrap_or("-");
        text.push_str(&format!("{:<8} {}\n", name, input));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_has_header_and_dash_for_unknown() {
        let inputs = vec![
            "https://youtu.be/abc".to_string(),
            "https://example.com/x".to_string(),
        ];
        let text = plain_report(&inputs);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("PLATFORM URL"));
        assert_eq!(lines.next(), Some("youtube  https://youtu.be/abc"));
        assert_eq!(lines.next(), Some("-        https://example.com/x"));
        assert!(lines.next().is_none());
    }
}
