//! Routes resolved terms into buckets.

use serde::Serialize;

use crate::{
    error::Diagnostic,
    options::ParseOptions,
    term::{Symbol, Term},
};

/// The result of parsing a search string.
///
/// Each bucket keeps the order in which its terms appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchTerms {
    /// The input that was parsed.
    query: String,
    /// Terms that must appear.
    and_terms: Vec<String>,
    /// Terms that may appear.
    or_terms: Vec<String>,
    /// Terms that must not appear.
    not_terms: Vec<String>,
    /// Terms shorter than the minimum length.
    skipped: Vec<String>,
    /// Diagnostics in the order they were found.
    errors: Vec<Diagnostic>,
}

impl SearchTerms {
    /// The input that was parsed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Terms that must appear.
    pub fn and_terms(&self) -> &[String] {
        &self.and_terms
    }

    /// Terms that may appear.
    pub fn or_terms(&self) -> &[String] {
        &self.or_terms
    }

    /// Terms that must not appear.
    pub fn not_terms(&self) -> &[String] {
        &self.not_terms
    }

    /// Terms dropped for being shorter than the minimum length.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Diagnostics recorded while parsing.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Returns true if any diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if no term ended up in the AND, OR or NOT buckets.
    pub fn is_empty(&self) -> bool {
        self.and_terms.is_empty() && self.or_terms.is_empty() && self.not_terms.is_empty()
    }
}

/// Sorts `terms` into buckets according to their symbols and `options`.
pub fn classify(
    query: &str,
    terms: &[Term],
    options: &ParseOptions,
    errors: Vec<Diagnostic>,
) -> SearchTerms {
    let mut result = SearchTerms {
        query: query.to_string(),
        errors,
        ..SearchTerms::default()
    };
    let default_symbol = Symbol::from(options.default_symbol());

    for term in terms {
        let text = term.text.clone();
        if term.char_len() < options.min_length() {
            result.skipped.push(text);
            continue;
        }
        match term.symbol.unwrap_or(default_symbol) {
            Symbol::And => result.and_terms.push(text),
            Symbol::Or => result.or_terms.push(text),
            Symbol::Not => result.not_terms.push(text),
        }
    }

    result
}
