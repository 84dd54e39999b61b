//! Error types for search string parsing.
//!
//! Two tiers exist. [`ArgumentError`] covers caller mistakes that stop a parse before it
//! starts. [`Diagnostic`] covers syntax irregularities found while parsing; these are
//! collected and never stop the parse. [`SearchError`] is what [`crate::parse`] returns.

use std::{error::Error, fmt};

use serde::Serialize;
use thiserror::Error;

use crate::{classify::SearchTerms, term::Symbol};

/// A non-fatal syntax irregularity found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An opening quote has no closing quote; the rest of the input became the phrase.
    #[error("the search string contains an unclosed quote (incomplete phrase)")]
    UnclosedQuote {
        /// Byte position of the opening quote.
        position: usize,
    },

    /// `NOT` was the last term and was dropped.
    #[error("the search string must not end with NOT")]
    TrailingNot {
        /// Byte position of the keyword.
        position: usize,
    },

    /// `AND` or `OR` lacked a term on one side and was dropped.
    #[error("the search string must neither start nor end with AND or OR (found {keyword})")]
    BoundaryMisuse {
        /// The misplaced keyword.
        keyword: Symbol,
        /// Byte position of the keyword.
        position: usize,
    },

    /// A keyword asked for a modifier that conflicts with the one a term already has.
    #[error(
        "the search string contains contradictory instructions: \"{term}\" is {existing} but {requested} was requested"
    )]
    Contradiction {
        /// Text of the affected term.
        term: String,
        /// The modifier the term keeps.
        existing: Symbol,
        /// The modifier that was refused.
        requested: Symbol,
        /// Byte position of the affected term.
        position: usize,
    },
}

impl Diagnostic {
    /// Byte position in the input that the diagnostic refers to.
    pub fn position(&self) -> usize {
        match self {
            Self::UnclosedQuote { position }
            | Self::TrailingNot { position }
            | Self::BoundaryMisuse { position, .. }
            | Self::Contradiction { position, .. } => *position,
        }
    }

    /// Short machine-readable name of the diagnostic kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnclosedQuote { .. } => "unclosed_quote",
            Self::TrailingNot { .. } => "trailing_not",
            Self::BoundaryMisuse { .. } => "boundary_misuse",
            Self::Contradiction { .. } => "contradiction",
        }
    }

    /// Returns a suggestion for fixing the input.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::UnclosedQuote { .. } => "Add a closing quote (\") to complete the phrase",
            Self::TrailingNot { .. } => "NOT needs a term after it, e.g., 'rust NOT golang'",
            Self::BoundaryMisuse { .. } => {
                "AND and OR require terms on both sides, e.g., 'rust OR golang'"
            }
            Self::Contradiction { .. } => {
                "A term cannot be both excluded and required or optional, e.g., '-rust OR golang'"
            }
        }
    }

    /// Formats the diagnostic with the input and a pointer at the offending position.
    pub fn format_with_context(&self, input: &str) -> String {
        // Column in characters, not bytes, so the caret lines up in a terminal.
        let column = input
            .get(..self.position())
            .map_or_else(|| input.chars().count(), |prefix| prefix.chars().count());

        let mut result = String::new();
        result.push_str(&format!("query syntax error: {self}\n"));
        result.push_str(&format!("  {input}\n"));
        result.push_str(&format!("  {}^\n", " ".repeat(column)));
        result.push_str(&format!("hint: {}", self.suggestion()));
        result
    }
}

/// Invalid arguments passed to [`crate::parse`] or the options builder.
///
/// These are raised before any parsing happens and are never collected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The input is empty or whitespace only.
    #[error("empty search string")]
    EmptyInput,

    /// The minimum length is not an integer of at least 1.
    #[error("invalid minimum length: {value:?}")]
    InvalidMinLength {
        /// The rejected value.
        value: String,
    },

    /// The default symbol is neither AND nor OR.
    #[error("invalid default symbol: {value:?} (expected \"and\" or \"or\")")]
    InvalidDefaultSymbol {
        /// The rejected value.
        value: String,
    },
}

/// Error returned by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The call itself was invalid.
    Argument(ArgumentError),

    /// Parsing completed but recorded diagnostics and `throw_on_error` was set.
    Syntax {
        /// The first diagnostic recorded.
        diagnostic: Diagnostic,
        /// The complete parse, including every diagnostic.
        terms: Box<SearchTerms>,
    },
}

impl SearchError {
    /// Returns true for caller errors raised before parsing.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::Argument(_))
    }

    /// The diagnostic that caused the error, for syntax errors.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Argument(_) => None,
            Self::Syntax { diagnostic, .. } => Some(diagnostic),
        }
    }

    /// The completed parse, for syntax errors.
    pub fn terms(&self) -> Option<&SearchTerms> {
        match self {
            Self::Argument(_) => None,
            Self::Syntax { terms, .. } => Some(terms),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(err) => write!(f, "{err}"),
            Self::Syntax { diagnostic, terms } => {
                write!(f, "{}", diagnostic.format_with_context(terms.query()))
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Argument(err) => Some(err),
            Self::Syntax { diagnostic, .. } => Some(diagnostic),
        }
    }
}

impl From<ArgumentError> for SearchError {
    fn from(err: ArgumentError) -> Self {
        Self::Argument(err)
    }
}
