//! CLI for the vidembed embed-URL normalizer.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vidembed_core::config;

use commands::{run_detect, run_normalize};

/// Top-level CLI for the vidembed embed-URL normalizer.
#[derive(Debug, Parser)]
#[command(name = "vidembed")]
#[command(about = "vidembed: rewrite lesson video links to embeddable form", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite video URLs to their embeddable form.
    Normalize {
        /// URLs to normalize, in addition to any read from --file.
        urls: Vec<String>,

        /// Read URLs from a file, one per line ('#' starts a comment).
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Print a JSON report instead of plain columns.
        #[arg(long)]
        json: bool,

        /// Exit non-zero if any URL could not be normalized.
        #[arg(long)]
        strict: bool,
    },

    /// Show which platform each URL is detected as.
    Detect {
        /// URLs to inspect, in addition to any read from --file.
        urls: Vec<String>,

        /// Read URLs from a file, one per line ('#' starts a comment).
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Normalize {
                urls,
                file,
                json,
                strict,
            } => run_normalize(&cfg, &urls, file.as_deref(), json, strict)?,
            CliCommand::Detect { urls, file } => run_detect(&urls, file.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
