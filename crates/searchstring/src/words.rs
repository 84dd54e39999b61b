//! Splits unquoted text into word terms.

use crate::term::{Symbol, Term};

/// Splits `span` on whitespace into word terms.
///
/// `base` is the byte offset of `span` within the full input, so that term offsets refer
/// to the input rather than to the span. A leading `+` or `-` becomes the term's symbol.
/// Tokens that are empty once the prefix is stripped are dropped.
pub fn split_words(span: &str, base: usize) -> Vec<Term> {
    let mut terms = Vec::new();
    let mut rest = span;
    let mut offset = base;

    loop {
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            break;
        }

        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        if let Some(term) = word_term(&trimmed[..end], offset) {
            terms.push(term);
        }

        offset += end;
        rest = &trimmed[end..];
    }

    terms
}

/// Builds a term from a single whitespace-free token.
fn word_term(token: &str, offset: usize) -> Option<Term> {
    let mut chars = token.chars();
    let (symbol, text) = match chars.next().and_then(Symbol::from_prefix) {
        Some(symbol) => (Some(symbol), chars.as_str()),
        None => (None, token),
    };

    if text.is_empty() {
        return None;
    }

    Some(Term::word(symbol, text, offset))
}
