//! Implementation of `ssp parse`.

use std::process::ExitCode;

use searchstring::{ArgumentError, DefaultSymbol, ParseOptions, SearchTerms, parse};
use tracing::debug;

use crate::cli::{args::ParseCommand, context::CommandContext, output};

/// Parses each query and prints the resulting buckets.
pub fn run(ctx: &CommandContext, cmd: &ParseCommand) -> ExitCode {
    let options = match resolve_options(ctx, cmd) {
        Ok(options) => options,
        Err(code) => return code,
    };
    debug!(?options, queries = cmd.queries.len(), "parsing queries");

    let results = match parse_all(&cmd.queries, &options) {
        Ok(results) => results,
        Err(code) => return code,
    };

    if cmd.json {
        return match output::print_json(&results) {
            Ok(()) => ExitCode::SUCCESS,
            Err(code) => code,
        };
    }

    for terms in &results {
        for diagnostic in terms.errors() {
            eprintln!(
                "warning: {}",
                diagnostic.format_with_context(terms.query())
            );
        }
    }
    output::print_tables(&results);
    ExitCode::SUCCESS
}

/// Starts from the configured options, then applies flag overrides.
fn resolve_options(ctx: &CommandContext, cmd: &ParseCommand) -> Result<ParseOptions, ExitCode> {
    let mut options = ctx.base_options(!cmd.no_config)?;

    if let Some(value) = &cmd.min_length {
        options = options
            .with_min_length_str(value)
            .map_err(argument_failure)?;
    }
    if let Some(value) = &cmd.default_symbol {
        let symbol = value
            .parse::<DefaultSymbol>()
            .map_err(argument_failure)?;
        options = options.with_default_symbol(symbol);
    }
    if cmd.strict {
        options = options.with_throw_on_error(true);
    }

    Ok(options)
}

/// Parses every query, stopping at the first failure.
fn parse_all(queries: &[String], options: &ParseOptions) -> Result<Vec<SearchTerms>, ExitCode> {
    queries
        .iter()
        .map(|query| {
            parse(query, options).map_err(|e| {
                // Syntax errors render with the query and a caret.
                eprintln!("error: {e}");
                ExitCode::FAILURE
            })
        })
        .collect()
}

/// Reports an invalid option value.
fn argument_failure(e: ArgumentError) -> ExitCode {
    eprintln!("error: {e}");
    ExitCode::FAILURE
}
