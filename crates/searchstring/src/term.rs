//! Terms and the modifier symbols attached to them.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::ArgumentError;

/// Inclusion modifier attached to a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// The term must appear.
    And,
    /// The term may appear.
    Or,
    /// The term must not appear.
    Not,
}

impl Symbol {
    /// Returns the single-character form of the symbol (`+`, `|`, `-`).
    pub const fn as_char(self) -> char {
        match self {
            Self::And => '+',
            Self::Or => '|',
            Self::Not => '-',
        }
    }

    /// Returns the symbol expressed by a leading `+` or `-`, if any.
    pub const fn from_prefix(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::And),
            '-' => Some(Self::Not),
            _ => None,
        }
    }

    /// Returns the keyword spelling of the symbol.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Symbol applied to terms that carry no modifier after keyword resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultSymbol {
    /// Unmarked terms are required.
    And,
    /// Unmarked terms are optional.
    #[default]
    Or,
}

impl DefaultSymbol {
    /// Returns the name used in configuration files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl From<DefaultSymbol> for Symbol {
    fn from(symbol: DefaultSymbol) -> Self {
        match symbol {
            DefaultSymbol::And => Self::And,
            DefaultSymbol::Or => Self::Or,
        }
    }
}

impl fmt::Display for DefaultSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefaultSymbol {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("and") || value == "+" {
            Ok(Self::And)
        } else if value.eq_ignore_ascii_case("or") || value == "|" {
            Ok(Self::Or)
        } else {
            Err(ArgumentError::InvalidDefaultSymbol {
                value: s.to_string(),
            })
        }
    }
}

/// A word or quoted phrase together with its modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Modifier, if one has been attached.
    pub symbol: Option<Symbol>,
    /// Literal text with escapes resolved.
    pub text: String,
    /// Whether the term came from a quoted phrase.
    pub quoted: bool,
    /// Byte offset of the term (including any prefix or quote) in the input.
    pub offset: usize,
}

impl Term {
    /// Creates an unquoted word term.
    pub fn word(symbol: Option<Symbol>, text: impl Into<String>, offset: usize) -> Self {
        Self {
            symbol,
            text: text.into(),
            quoted: false,
            offset,
        }
    }

    /// Creates a quoted phrase term.
    pub fn phrase(symbol: Option<Symbol>, text: impl Into<String>, offset: usize) -> Self {
        Self {
            symbol,
            text: text.into(),
            quoted: true,
            offset,
        }
    }

    /// Length of the text in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
