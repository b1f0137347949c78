//! `vidembed normalize` – rewrite URLs to embeddable form.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use vidembed_core::config::{OutputFormat, VidembedConfig};
use vidembed_core::embed::{self, Platform};

use crate::cli::input::collect_urls;

/// One row of the normalize report.
#[derive(Debug, Serialize)]
struct UrlReport {
    input: String,
    output: String,
    platform: Option<Platform>,
    changed: bool,
}

pub fn run_normalize(
    cfg: &VidembedConfig,
    urls: &[String],
    file: Option<&Path>,
    json: bool,
    strict: bool,
) -> Result<()> {
    let inputs = collect_urls(urls, file)?;
    if inputs.is_empty() {
        anyhow::bail!("no URLs given (pass them as arguments or via --file)");
    }

    let mut failed = 0usize;
    let mut reports = Vec::with_capacity(inputs.len());
    for input in inputs {
        let platform = Platform::detect(&input);
        let output = match embed::try_embed_url(&input) {
            Ok(out) => out,
            Err(reason) => {
                tracing::debug!(url = %input, %reason, "not normalized");
                failed += 1;
                input.clone()
            }
        };
        let changed = output != input;
        reports.push(UrlReport {
            input,
            output,
            platform,
            changed,
        });
    }

    if json || cfg.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", plain_report(&reports));
    }

    if (strict || cfg.strict) && failed > 0 {
        anyhow::bail!("{failed} URL(s) could not be normalized to an embeddable form");
    }
    Ok(())
}

/// Renders the plain column layout: a header row, then one row per URL.
fn plain_report(reports: &[UrlReport]) -> String {
    let mut text = format!("{:<8} {}\n", "PLATFORM", "URL");
    for report in reports {
        let name = report.platform.map(|p| p.as_str()).unwrap_or("-");
        text.push_str(&format!("{:<8} {}\n", name, report.output));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_report_has_header_and_columns() {
        let reports = vec![
            UrlReport {
                input: "https://youtu.be/abc".to_string(),
                output: "https://www.youtube.com/embed/abc".to_string(),
                platform: Some(Platform::Youtube),
                changed: true,
            },
            UrlReport {
                input: "not a url".to_string(),
                output: "not a url".to_string(),
                platform: None,
                changed: false,
            },
        ];
        let text = plain_report(&reports);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("PLATFORM URL"));
        assert_eq!(lines.next(), Some("youtube  https://www.youtube.com/embed/abc"));
        assert_eq!(lines.next(), Some("-        not a url"));
        assert!(lines.next().is_none());
    }
}
