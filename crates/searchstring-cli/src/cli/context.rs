//! Shared state for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use searchstring::ParseOptions;
use searchstring_config::Config;
use tracing::debug;

/// Command execution context built once per CLI invocation.
///
/// Configuration is loaded on demand so that `init` and `parse --no-config` work even
/// when a config file in scope is broken.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
}

impl CommandContext {
    /// Captures the current working directory.
    pub fn new() -> Result<Self, ExitCode> {
        match env::current_dir() {
            Ok(cwd) => Ok(Self { cwd }),
            Err(e) => {
                eprintln!("error: could not determine current directory: {e}");
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Loads the configuration in effect for the working directory.
    pub fn config(&self) -> Result<Config, ExitCode> {
        Config::load(&self.cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })
    }

    /// Parser options before any command-line overrides.
    ///
    /// With `use_config` false the parser defaults are returned and no file is read.
    pub fn base_options(&self, use_config: bool) -> Result<ParseOptions, ExitCode> {
        if !use_config {
            return Ok(ParseOptions::default());
        }
        let config = self.config()?;
        debug!(files = config.sources.len(), "parser options loaded from configuration");
        Ok(config.options)
    }
}
