//! Line-oriented URL list input shared by the normalize and detect commands.

use anyhow::{Context, Result};
use std::path::Path;

/// Collects URLs from positional arguments plus an optional list file.
///
/// File entries are one URL per line; blank lines and lines starting with
/// `#` are skipped. Argument order is preserved, arguments first.
pub fn collect_urls(urls: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut out: Vec<String> = urls.to_vec();
    if let Some(path) = file {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read URL list: {}", path.display()))?;
        out.extend(parse_url_lines(&data));
    }
    Ok(out)
}

/// Splits a URL list file into entries.
fn parse_url_lines(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
