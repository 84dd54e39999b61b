//! The parsing pipeline.
//!
//! Stages run strictly in order, each consuming the previous stage's output:
//!
//! 1. phrase extraction and word splitting ([`crate::phrase`], [`crate::words`])
//! 2. keyword resolution ([`crate::keywords`])
//! 3. classification ([`crate::classify`])

use std::str::FromStr;

use tracing::debug;

use crate::{
    classify::{SearchTerms, classify},
    error::{ArgumentError, SearchError},
    keywords::resolve_keywords,
    options::ParseOptions,
    phrase::extract_terms,
};

/// Parses a search string into AND, OR and NOT terms.
///
/// Returns [`SearchError::Argument`] before parsing if the input is blank or the options
/// are invalid. Syntax problems are recorded in [`SearchTerms::errors`] and do not stop
/// the parse; if [`ParseOptions::throw_on_error`] is set and any were recorded, the first
/// one is returned as [`SearchError::Syntax`] together with the complete result.
pub fn parse(input: &str, options: &ParseOptions) -> Result<SearchTerms, SearchError> {
    if input.trim().is_empty() {
        return Err(ArgumentError::EmptyInput.into());
    }
    options.validate()?;

    let mut diagnostics = Vec::new();
    let terms = extract_terms(input, &mut diagnostics);
    let terms = resolve_keywords(terms, &mut diagnostics);
    let result = classify(input, &terms, options, diagnostics);

    if let Some(first) = result.errors().first().cloned() {
        debug!(
            error_count = result.errors().len(),
            first_error = %first,
            "search string parsed with diagnostics"
        );
        if options.throw_on_error() {
            return Err(SearchError::Syntax {
                diagnostic: first,
                terms: Box::new(result),
            });
        }
    }

    Ok(result)
}

impl FromStr for SearchTerms {
    type Err = SearchError;

    /// Parses with [`ParseOptions::default`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, &ParseOptions::default())
    }
}
