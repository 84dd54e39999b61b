//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use searchstring::SearchTerms;
use serde::Serialize;

/// JSON output for `ssp parse`.
#[derive(Serialize)]
struct JsonParseOutput<'a> {
    /// Results in the order the queries were given.
    queries: &'a [SearchTerms],
}

/// Shows a term for display, quoting phrases so their boundaries stay visible.
fn display_term(term: &str) -> String {
    if term.chars().any(char::is_whitespace) {
        format!("\"{term}\"")
    } else {
        term.to_string()
    }
}

/// Joins a bucket's terms into one cell.
fn bucket_cell(terms: &[String]) -> Cell {
    if terms.is_empty() {
        return Cell::new("(none)");
    }
    let shown: Vec<String> = terms.iter().map(|t| display_term(t)).collect();
    Cell::new(shown.join(", "))
}

/// Builds the bucket table for one parse result.
pub fn bucket_table(terms: &SearchTerms) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Bucket", "Terms"]);

    let rows = [
        ("and (required)", terms.and_terms()),
        ("or (optional)", terms.or_terms()),
        ("not (excluded)", terms.not_terms()),
        ("skipped", terms.skipped()),
    ];
    for (name, bucket) in rows {
        table.add_row(vec![Cell::new(name), bucket_cell(bucket)]);
    }

    table
}

/// Prints one table per result, headed by the query when there are several.
pub fn print_tables(results: &[SearchTerms]) {
    let show_query = results.len() > 1;
    for (i, terms) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if show_query {
            println!("Query: {}", terms.query());
        }
        println!("{}", bucket_table(terms));
    }
}

/// Prints all results as one JSON document.
pub fn print_json(results: &[SearchTerms]) -> Result<(), ExitCode> {
    let output = JsonParseOutput { queries: results };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}
