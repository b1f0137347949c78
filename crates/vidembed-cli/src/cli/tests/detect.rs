//! Tests for the detect subcommand's argument surface.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_detect_urls() {
    match parse(&[
        "vidembed",
        "detect",
        "https://www.loom.com/share/abc",
        "https://example.com/page",
    ]) {
        CliCommand::Detect { urls, file } => {
            assert_eq!(urls.len(), 2);
            assert_eq!(urls[0], "https://www.loom.com/share/abc");
            assert!(file.is_none());
        }
        _ => panic!("expected Detect"),
    }
}

#[test]
fn cli_parse_detect_file() {
    match parse(&["vidembed", "detect", "--file", "urls.txt"]) {
        CliCommand::Detect { urls, file } => {
            assert!(urls.is_empty());
            assert_eq!(file.as_deref(), Some(std::path::Path::new("urls.txt")));
        }
        _ => panic!("expected Detect with --file"),
    }
}
