//! Command-line interface for `ssp`, the search string parser.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{
    CommandContext,
    args::Cli,
    commands,
    tracing_setup::{self, Verbosity},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.log.verbose, cli.log.quiet);
    tracing_setup::init_subscriber(verbosity, cli.log.no_color);

    match CommandContext::new() {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
