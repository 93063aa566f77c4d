// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// commit-msg - validate a commit message against the conventional format
///
/// Meant to be run as git's commit-msg hook, which passes the path of the
/// message file as the only argument.
#[derive(Parser, Debug)]
#[command(name = "commit-msg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(long_version = crate::version::long_version())]
#[command(about = "Validate a commit message against the conventional format", long_about = None)]
pub struct Cli {
    /// Path to the commit message file (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Additional configuration file, applied after the discovered ones
    #[arg(short, long, env = "COMMIT_MSG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Language of the hints (overrides the configured one)
    #[arg(long)]
    pub lang: Option<String>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}
