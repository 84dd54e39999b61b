//! Deserializing `.ssp.toml` files.
//!
//! Every field of [`RawConfig`] is optional so that partial files can be layered. Values
//! are kept loose here and checked against the parser's rules when merged, so a bad value
//! is reported with its setting name rather than as a TOML type error. Unknown keys are
//! rejected to catch misspelled settings.

use std::{fs, path::Path};

use searchstring::{ArgumentError, ParseOptions};
use serde::Deserialize;

use crate::{ConfigError, discovery::ConfigSource};

/// A configuration file as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, files further up the tree and the global file are ignored.
    pub root: Option<bool>,
    /// The `[parser]` section.
    pub parser: Option<RawParserSettings>,
}

/// The `[parser]` section as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawParserSettings {
    /// Minimum term length in characters.
    pub min_length: Option<RawMinLength>,
    /// Bucket for unmarked terms ("and" or "or").
    pub default_symbol: Option<String>,
    /// Whether the first diagnostic fails the parse.
    pub throw_on_error: Option<bool>,
}

/// A minimum length written either as a TOML integer or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawMinLength {
    /// `min_length = 3`
    Integer(i64),
    /// `min_length = "3"`, checked like the parser's textual option.
    Text(String),
}

impl RawMinLength {
    /// Sets the minimum length on `options`, with the parser's validation.
    pub fn apply(&self, options: ParseOptions) -> Result<ParseOptions, ArgumentError> {
        match self {
            Self::Integer(n) => usize::try_from(*n)
                .map_err(|_| ArgumentError::InvalidMinLength {
                    value: n.to_string(),
                })
                .and_then(|n| options.with_min_length(n)),
            Self::Text(s) => options.with_min_length_str(s),
        }
    }
}

/// One configuration file, read and deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfig {
    /// Where the file was found.
    pub source: ConfigSource,
    /// Its contents.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Reads and deserializes the file at `source`.
    pub fn read(source: ConfigSource) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&source.path).map_err(|err| ConfigError::Read {
            path: source.path.clone(),
            source: err,
        })?;
        let config = parse_config_str(&contents, &source.path)?;
        Ok(Self { source, config })
    }

    /// Whether the file carries `root = true`.
    pub fn is_root(&self) -> bool {
        self.config.root == Some(true)
    }
}

/// Parses configuration from a TOML string. `path` is only used in errors.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Syntax {
        path: path.to_path_buf(),
        source,
    })
}
