//! Errors raised while loading configuration.

use std::{
    io,
    path::{Path, PathBuf},
};

use searchstring::ArgumentError;
use thiserror::Error;
use toml::de;

/// Why a configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// The unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A config file is not valid TOML or has keys ssp does not know.
    #[error("{} is not a valid config file: {source}", .path.display())]
    Syntax {
        /// The malformed file.
        path: PathBuf,
        /// Deserialization error with line and column.
        source: de::Error,
    },

    /// A `[parser]` value was rejected by the parser's own option checks.
    #[error("{}: invalid `{key}`: {source}", .path.display())]
    InvalidSetting {
        /// The file holding the value.
        path: PathBuf,
        /// Setting name within `[parser]`.
        key: &'static str,
        /// The parser's reason.
        source: ArgumentError,
    },

    /// There is no home directory, so the global config has no location.
    #[error("could not determine home directory for the global .ssp.toml")]
    NoHomeDirectory,
}

impl ConfigError {
    /// The file the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Syntax { path, .. } | Self::InvalidSetting { path, .. } => {
                Some(path)
            }
            Self::NoHomeDirectory => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_reported_for_file_errors() {
        let err = ConfigError::InvalidSetting {
            path: PathBuf::from("/p/.ssp.toml"),
            key: "min_length",
            source: ArgumentError::InvalidMinLength { value: "0".into() },
        };
        assert_eq!(err.path(), Some(Path::new("/p/.ssp.toml")));
        assert!(err.to_string().starts_with("/p/.ssp.toml: invalid `min_length`"));

        assert!(ConfigError::NoHomeDirectory.path().is_none());
    }
}
