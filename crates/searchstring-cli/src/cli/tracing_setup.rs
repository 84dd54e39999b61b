//! Tracing subscriber initialization for the `ssp` binary.
//!
//! Wires the `--verbose`, `--quiet` and `--no-color` flags plus the `SSP_LOG` and
//! `RUST_LOG` environment variables into one `tracing-subscriber` stack writing to stderr.
//!
//! # Priority (highest to lowest)
//!
//! 1. `SSP_LOG` env var (per-target directives, e.g. `searchstring=trace,warn`)
//! 2. `RUST_LOG` env var
//! 3. CLI flags (`-v` gives debug, `-q` gives error)
//! 4. Default level: `warn`

use std::{
    env,
    io::{self, IsTerminal},
};

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Project-specific log filter variable.
const LOG_ENV_VAR: &str = "SSP_LOG";

/// Crates whose events are raised to debug in verbose mode.
const OWN_TARGETS: [&str; 3] = ["searchstring", "searchstring_config", "ssp"];

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet` / `-q`: only errors.
    Quiet,
    /// Default: warnings and above.
    Normal,
    /// `--verbose` / `-v`: debug-level output.
    Verbose,
}

impl Verbosity {
    /// Determines verbosity from the parsed CLI flags. Verbose wins if both are set.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Maps to a default `tracing::Level`.
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Call once, early in `main()`, before configuration is loaded so discovery events are
/// captured. A second call is ignored.
pub fn init_subscriber(verbosity: Verbosity, no_color: bool) {
    let filter = build_env_filter(verbosity);
    let use_ansi = !no_color && io::stderr().is_terminal();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true);

    let result = if verbosity == Verbosity::Verbose {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_timer(fmt::time::uptime()))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.without_time().compact())
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("warning: could not install log subscriber: {e}");
    }
}

/// Builds an `EnvFilter` from `SSP_LOG`, then `RUST_LOG`, then the CLI verbosity.
///
/// Unparseable environment values fall through to the next source.
fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = env::var(LOG_ENV_VAR)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::try_new(default_directive(verbosity))
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_level().as_str()))
}

/// Filter directive used when no environment override is set.
fn default_directive(verbosity: Verbosity) -> String {
    let level = verbosity.default_level();
    if verbosity == Verbosity::Verbose {
        let own: Vec<String> = OWN_TARGETS
            .iter()
            .map(|target| format!("{target}=debug"))
            .collect();
        format!("{level},{}", own.join(","))
    } else {
        level.to_string()
    }
}
