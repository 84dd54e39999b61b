//! Implementation of `ssp check`.

use std::process::ExitCode;

use searchstring_config::Config;

use crate::cli::context::CommandContext;

/// Validates the configuration files that apply to the current directory.
pub fn run(ctx: &CommandContext) -> ExitCode {
    println!("Checking configuration...");
    println!();

    let config = match Config::load(&ctx.cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(path) = e.path() {
                eprintln!("fix or remove {} and run 'ssp check' again", path.display());
            }
            return ExitCode::FAILURE;
        }
    };

    if config.sources.is_empty() {
        println!("No configuration files found; using defaults.");
        println!("Run 'ssp init' to create a configuration file.");
    } else {
        println!("Config files (highest precedence first):");
        for source in &config.sources {
            println!("  {} ({})", source.path.display(), source.scope);
        }
    }
    println!();

    let settings = match config.settings_to_toml() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: failed to render settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Effective settings:");
    print!("{settings}");
    println!();
    println!("No issues found.");
    ExitCode::SUCCESS
}
