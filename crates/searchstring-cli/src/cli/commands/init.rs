//! Implementation of `ssp init`.

use std::{fs, path::PathBuf, process::ExitCode};

use searchstring_config::{
    CONFIG_FILENAME, ConfigError, global_config_path, global_template, local_template,
};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Initializes a `.ssp.toml` configuration file.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let cwd = &ctx.cwd;

    let is_home_dir = global_config_path()
        .and_then(|p| p.parent().map(|h| h == cwd))
        .unwrap_or(false);

    let use_global = cmd.global || is_home_dir;

    let config_path = match target_path(cwd.join(CONFIG_FILENAME), use_global) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = if use_global {
        global_template()
    } else {
        local_template()
    };

    if let Err(e) = fs::write(&config_path, template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    ExitCode::SUCCESS
}

/// Picks the file to write: the global config or the one in the current directory.
fn target_path(local: PathBuf, use_global: bool) -> Result<PathBuf, ConfigError> {
    if use_global {
        global_config_path().ok_or(ConfigError::NoHomeDirectory)
    } else {
        Ok(local)
    }
}
