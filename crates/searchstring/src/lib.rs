//! Search string parsing.
//!
//! Breaks a search-engine style query into the terms that must appear, may appear, and
//! must not appear:
//!
//! - **Terms**: `rust` - classified by the default symbol (OR unless configured)
//! - **Phrases**: `"error handling"` - kept as one term, `\"` escapes a quote
//! - **Required**: `+rust`, `rust AND golang`
//! - **Optional**: `rust OR golang`
//! - **Excluded**: `-deprecated`, `NOT deprecated`, `-"old api"`
//!
//! Terms shorter than the minimum length are set aside as skipped. Syntax problems such as
//! an unclosed quote are collected as [`Diagnostic`]s instead of aborting the parse.
//!
//! # Example
//!
//! ```
//! use searchstring::{ParseOptions, parse};
//!
//! let terms = parse("\"error handling\" +rust -golang C", &ParseOptions::new()).unwrap();
//! assert_eq!(terms.and_terms(), ["rust"]);
//! assert_eq!(terms.or_terms(), ["error handling"]);
//! assert_eq!(terms.not_terms(), ["golang"]);
//! assert_eq!(terms.skipped(), ["C"]);
//! ```

#![warn(missing_docs)]

mod classify;
mod error;
mod keywords;
mod options;
mod parser;
mod phrase;
mod term;
mod words;

pub use classify::SearchTerms;
pub use error::{ArgumentError, Diagnostic, SearchError};
pub use options::{DEFAULT_MIN_LENGTH, ParseOptions};
pub use parser::parse;
pub use term::{DefaultSymbol, Symbol, Term};
