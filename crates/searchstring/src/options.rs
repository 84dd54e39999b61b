//! Options controlling classification and error reporting.

use crate::{error::ArgumentError, term::DefaultSymbol};

/// Minimum term length used when none is configured.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Options for [`crate::parse`].
///
/// Construct with [`ParseOptions::new`] and the `with_*` builders. The builders validate
/// their input, so an options value built that way always passes [`ParseOptions::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Terms shorter than this many characters are skipped.
    min_length: usize,
    /// Whether the first diagnostic is returned as an error.
    throw_on_error: bool,
    /// Bucket for terms without a modifier.
    default_symbol: DefaultSymbol,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            throw_on_error: false,
            default_symbol: DefaultSymbol::Or,
        }
    }
}

impl ParseOptions {
    /// Creates options with the defaults: minimum length 2, no throwing, OR as default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum term length in characters. Must be at least 1.
    pub fn with_min_length(mut self, min_length: usize) -> Result<Self, ArgumentError> {
        if min_length == 0 {
            return Err(ArgumentError::InvalidMinLength {
                value: min_length.to_string(),
            });
        }
        self.min_length = min_length;
        Ok(self)
    }

    /// Sets the minimum term length from its textual form.
    ///
    /// Surrounding whitespace is ignored; the rest must be a positive integer without sign
    /// or leading zeros.
    pub fn with_min_length_str(self, value: &str) -> Result<Self, ArgumentError> {
        let invalid = || ArgumentError::InvalidMinLength {
            value: value.to_string(),
        };

        let trimmed = value.trim();
        let well_formed = trimmed.starts_with(|c: char| matches!(c, '1'..='9'))
            && trimmed.chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }

        let min_length = trimmed.parse::<usize>().map_err(|_| invalid())?;
        self.with_min_length(min_length)
    }

    /// Sets whether the first diagnostic is returned as an error.
    pub fn with_throw_on_error(mut self, throw_on_error: bool) -> Self {
        self.throw_on_error = throw_on_error;
        self
    }

    /// Sets the bucket for terms without a modifier.
    pub fn with_default_symbol(mut self, default_symbol: DefaultSymbol) -> Self {
        self.default_symbol = default_symbol;
        self
    }

    /// Minimum term length in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether the first diagnostic is returned as an error.
    pub fn throw_on_error(&self) -> bool {
        self.throw_on_error
    }

    /// Bucket for terms without a modifier.
    pub fn default_symbol(&self) -> DefaultSymbol {
        self.default_symbol
    }

    /// Checks that the options are usable.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if self.min_length == 0 {
            return Err(ArgumentError::InvalidMinLength {
                value: self.min_length.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ParseOptions::new();
        assert_eq!(options.min_length(), 2);
        assert!(!options.throw_on_error());
        assert_eq!(options.default_symbol(), DefaultSymbol::Or);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn accepts_valid_min_length() {
        let options = ParseOptions::new().with_min_length(2).unwrap();
        assert_eq!(options.min_length(), 2);
        let options = ParseOptions::new().with_min_length(1).unwrap();
        assert_eq!(options.min_length(), 1);
    }

    #[test]
    fn rejects_zero_min_length() {
        let err = ParseOptions::new().with_min_length(0).unwrap_err();
        assert_eq!(err, ArgumentError::InvalidMinLength { value: "0".into() });
    }

    #[test]
    fn min_length_from_text() {
        let options = ParseOptions::new().with_min_length_str(" 3 ").unwrap();
        assert_eq!(options.min_length(), 3);
        let options = ParseOptions::new().with_min_length_str("10").unwrap();
        assert_eq!(options.min_length(), 10);
    }

    #[test]
    fn min_length_text_must_be_positive_integer() {
        for bad in ["abc", "0", "-1", "+2", "2.5", "", "  ", "02", "1e3"] {
            let err = ParseOptions::new().with_min_length_str(bad).unwrap_err();
            assert_eq!(
                err,
                ArgumentError::InvalidMinLength {
                    value: bad.to_string()
                },
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn min_length_text_overflow_is_rejected() {
        assert!(
            ParseOptions::new()
                .with_min_length_str("99999999999999999999999999")
                .is_err()
        );
    }

    #[test]
    fn builders_chain() {
        let options = ParseOptions::new()
            .with_throw_on_error(true)
            .with_default_symbol(DefaultSymbol::And);
        assert!(options.throw_on_error());
        assert_eq!(options.default_symbol(), DefaultSymbol::And);
    }
}
