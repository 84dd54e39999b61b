//! Finding the `.ssp.toml` files that apply to a directory.
//!
//! Every ancestor of the working directory is checked, nearest first. Each file found is
//! read once, here, so a `root = true` marker can end the walk. The global
//! `~/.ssp.toml` comes last unless a root marker was seen.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use tracing::debug;

use crate::{ConfigError, parse::ParsedConfig};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".ssp.toml";

/// Whether a config file is the user-wide one or belongs to a directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// A `.ssp.toml` in the working directory or one of its ancestors.
    Local,
    /// `~/.ssp.toml`.
    Global,
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Global => "global",
        })
    }
}

/// Location of a config file that contributed to a [`crate::Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Path of the file.
    pub path: PathBuf,
    /// Where the file sits in the lookup.
    pub scope: ConfigScope,
}

/// Reads every configuration file that applies to `cwd`, highest precedence first.
///
/// A file that exists but cannot be read or parsed is an error, even if a closer file
/// would have overridden all of its settings.
pub fn discover_configs(cwd: &Path) -> Result<Vec<ParsedConfig>, ConfigError> {
    let global = global_config_path();
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            continue;
        }
        // The home directory can be an ancestor; its file is still the global one.
        let scope = if global.as_ref() == Some(&path) {
            ConfigScope::Global
        } else {
            ConfigScope::Local
        };
        let parsed = ParsedConfig::read(ConfigSource { path, scope })?;
        let is_root = parsed.is_root();
        configs.push(parsed);
        if is_root {
            debug!(count = configs.len(), cwd = %cwd.display(), "config lookup ended at root file");
            return Ok(configs);
        }
    }

    if let Some(path) = global
        && path.is_file()
        && !configs.iter().any(|c| c.source.path == path)
    {
        configs.push(ParsedConfig::read(ConfigSource {
            path,
            scope: ConfigScope::Global,
        })?);
    }

    debug!(count = configs.len(), cwd = %cwd.display(), "discovered config files");
    Ok(configs)
}

/// Returns the path of the global configuration file (`~/.ssp.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}
