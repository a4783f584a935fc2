//! Command-line arguments

use crate::config::manifest::MANIFEST_FILE_NAME;
use crate::core::logging::LogFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Resolve a Python package version from its configured source
#[derive(Parser, Debug, Clone)]
#[command(name = "poetry-version")]
#[command(about = "Resolve a package version from __init__.py, a git tag or a file")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct Args {
    /// Project manifest
    #[arg(short = 'm', long = "manifest", value_name = "FILE", default_value = MANIFEST_FILE_NAME)]
    pub manifest: PathBuf,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Force colored output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Suppress progress lines
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    pub quiet: bool,

    /// Print the result as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,
}

impl Args {
    /// Color decision: explicit flags win, otherwise follow the terminal
    pub fn use_color(&self, is_terminal: bool) -> bool {
        if self.no_color {
            false
        } else {
            self.color || is_terminal
        }
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
            .as_deref()
            .and_then(LogFormat::parse)
            .unwrap_or(LogFormat::Text)
    }
}
