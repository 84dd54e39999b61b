//! Extracts quoted phrases and splits the text between them.
//!
//! The input is scanned for `"`. Everything up to the opening quote goes through
//! [`split_words`]; the quoted span becomes a single phrase term. A `+` or `-` directly
//! before the opening quote is the phrase's modifier. A quote preceded by a backslash does
//! not close the phrase, and `\"` is unescaped to `"` in the phrase text. A phrase without a
//! closing quote runs to the end of the input and records [`Diagnostic::UnclosedQuote`].

use crate::{
    error::Diagnostic,
    term::{Symbol, Term},
    words::split_words,
};

/// The quote character.
const QUOTE: char = '"';

/// The escaped form of a quote inside a phrase.
const ESCAPED_QUOTE: &str = "\\\"";

/// Splits `input` into word and phrase terms in left-to-right order.
pub fn extract_terms(input: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<Term> {
    let mut terms = Vec::new();
    // Start of the text not yet consumed.
    let mut cursor = 0;

    while let Some(found) = input[cursor..].find(QUOTE) {
        let open = cursor + found;

        // A modifier is only taken from text not already consumed by a previous phrase.
        let symbol = input[cursor..open]
            .chars()
            .next_back()
            .and_then(Symbol::from_prefix);
        let phrase_start = if symbol.is_some() { open - 1 } else { open };

        terms.extend(split_words(&input[cursor..phrase_start], cursor));

        let content_start = open + QUOTE.len_utf8();
        let (content_end, next) = match find_closing_quote(input, content_start) {
            Some(close) => (close, close + QUOTE.len_utf8()),
            None => {
                diagnostics.push(Diagnostic::UnclosedQuote { position: open });
                (input.len(), input.len())
            }
        };

        let text = input[content_start..content_end].replace(ESCAPED_QUOTE, "\"");
        if !text.is_empty() {
            terms.push(Term::phrase(symbol, text, phrase_start));
        }

        cursor = next;
    }

    terms.extend(split_words(&input[cursor..], cursor));
    terms
}

/// Returns the byte index of the first unescaped quote at or after `from`.
fn find_closing_quote(input: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(found) = input[search..].find(QUOTE) {
        let index = search + found;
        if !input[..index].ends_with('\\') {
            return Some(index);
        }
        search = index + QUOTE.len_utf8();
    }
    None
}
