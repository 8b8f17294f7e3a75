//! Command line argument parsing for the Bandolier CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Bandolier - helpers for environment values, number words and site URLs
#[derive(Parser, Debug, Clone)]
#[command(name = "bandolier")]
#[command(about = "Helpers for environment values, number words and site URLs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BandolierArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BandolierArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a number phrase such as "one hundred thousand"
    #[command(name = "words-to-number")]
    WordsToNumber(WordsToNumberArgs),

    /// Extract a float from a formatted value such as "$1,000.25"
    #[command(name = "to-float")]
    ToFloat(ToFloatArgs),

    /// Read and coerce an environment variable
    Env(EnvArgs),

    /// Build a URL on the current site
    #[command(name = "curl-path")]
    CurlPath(CurlPathArgs),

    /// Remove escaping backslashes
    #[command(name = "strip-slashes")]
    StripSlashes(StripSlashesArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct WordsToNumberArgs {
    /// Phrase to parse
    #[arg(value_name = "PHRASE", num_args = 1.., required = true)]
    pub phrase: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ToFloatArgs {
    /// Formatted value
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EnvArgs {
    /// Variable name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Value returned when the variable is unset
    #[arg(short, long)]
    pub default: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CurlPathArgs {
    /// Path on the site
    #[arg(value_name = "PATH")]
    pub path: String,

    /// JSON config with `curl_check_file` and `server` variables
    #[arg(short, long, value_name = "CONFIG_FILE", env = "BANDOLIER_PATHS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct StripSlashesArgs {
    /// Escaped value
    #[arg(value_name = "VALUE")]
    pub value: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
