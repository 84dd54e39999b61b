//! Clap argument definitions for the `ssp` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "ssp")]
#[command(about = "Search string parser - split search input into required, optional and excluded terms")]
pub struct Cli {
    /// Logging flags shared by every subcommand.
    #[command(flatten)]
    pub log: LogArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags controlling diagnostic log output on stderr.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LogArgs {
    /// Show debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for `ssp parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseCommand {
    /// Search strings to parse
    #[arg(required = true, allow_hyphen_values = true)]
    pub queries: Vec<String>,

    /// Minimum term length in characters [default: 2]
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub min_length: Option<String>,

    /// Bucket for terms without a modifier: and, or [default: or]
    #[arg(long, value_name = "SYMBOL")]
    pub default_symbol: Option<String>,

    /// Fail on the first syntax problem instead of warning
    #[arg(long)]
    pub strict: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Ignore .ssp.toml configuration files
    #[arg(long)]
    pub no_config: bool,
}

/// Arguments for `ssp init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.ssp.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `ssp` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse search strings and show the resulting term buckets
    #[command(after_help = "\
QUERY SYNTAX:
  term              Bucket given by --default-symbol
  +term             Term must appear
  -term             Term must NOT appear
  \"a phrase\"        Phrase, may also be prefixed with + or -
  a AND b           Both terms must appear
  a OR b            Either term may appear
  NOT term          Term must NOT appear

Terms shorter than --min-length are reported as skipped.")]
    Parse(ParseCommand),

    /// Validate configuration and show effective settings
    Check,

    /// Initialize ssp configuration in current directory
    Init(InitCommand),
}
