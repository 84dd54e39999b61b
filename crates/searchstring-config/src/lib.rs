//! Configuration system for ssp.
//!
//! ssp uses TOML configuration files named `.ssp.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.ssp.toml`
//! files found, then loading `~/.ssp.toml` as the global config with lowest precedence.
//! The result is a set of [`ParseOptions`] ready for [`searchstring::parse`].
//!
//! ```toml
//! [parser]
//! min_length = 2
//! default_symbol = "or"
//! throw_on_error = false
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;

use std::path::Path;

pub use discovery::{CONFIG_FILENAME, ConfigScope, ConfigSource, discover_configs, global_config_path};
pub use error::ConfigError;
pub use merge::merge_configs;
pub use parse::{ParsedConfig, RawConfig, RawMinLength, RawParserSettings, parse_config_str};
use searchstring::{DefaultSymbol, ParseOptions};
use serde::Serialize;
pub use templates::{global_template, local_template};
use toml::ser;

/// Configuration in effect for a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Parser options after layering every file over the defaults.
    pub options: ParseOptions,
    /// Files that contributed, highest precedence first.
    pub sources: Vec<ConfigSource>,
}

impl Config {
    /// Discovers, reads and merges the configuration that applies to `cwd`.
    ///
    /// Returns the defaults with no sources if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        merge_configs(&discover_configs(cwd)?)
    }

    /// Serializes the effective options in the shape of a `.ssp.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ser::Error> {
        toml::to_string_pretty(&SettingsFile::from(&self.options))
    }
}

/// Serializable view of the effective options.
#[derive(Serialize)]
struct SettingsFile {
    /// The `[parser]` section.
    parser: ParserSection,
}

/// Serializable `[parser]` section.
#[derive(Serialize)]
struct ParserSection {
    /// Minimum term length.
    min_length: usize,
    /// Bucket for unmarked terms.
    default_symbol: DefaultSymbol,
    /// Whether the first diagnostic fails the parse.
    throw_on_error: bool,
}

impl From<&ParseOptions> for SettingsFile {
    fn from(options: &ParseOptions) -> Self {
        Self {
            parser: ParserSection {
                min_length: options.min_length(),
                default_symbol: options.default_symbol(),
                throw_on_error: options.throw_on_error(),
            },
        }
    }
}
