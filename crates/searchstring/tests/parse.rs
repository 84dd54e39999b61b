//! End-to-end tests for search string parsing.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use searchstring::{
    ArgumentError, DefaultSymbol, Diagnostic, ParseOptions, SearchError, SearchTerms, Symbol,
    parse,
};

/// Parses with default options, panicking on error.
fn parse_ok(input: &str) -> SearchTerms {
    parse(input, &ParseOptions::new()).unwrap()
}

/// Parses with `throw_on_error` set, expecting an error.
fn parse_strict_err(input: &str) -> SearchError {
    parse(input, &ParseOptions::new().with_throw_on_error(true)).unwrap_err()
}

/// Asserts all four buckets at once.
fn assert_buckets(terms: &SearchTerms, and: &[&str], or: &[&str], not: &[&str], skipped: &[&str]) {
    assert_eq!(terms.and_terms(), and, "and terms of {:?}", terms.query());
    assert_eq!(terms.or_terms(), or, "or terms of {:?}", terms.query());
    assert_eq!(terms.not_terms(), not, "not terms of {:?}", terms.query());
    assert_eq!(terms.skipped(), skipped, "skipped terms of {:?}", terms.query());
}

mod arguments {
    use super::*;

    #[test]
    fn empty_search_string() {
        let err = parse("", &ParseOptions::new()).unwrap_err();
        assert_eq!(err, SearchError::Argument(ArgumentError::EmptyInput));
        assert_eq!(err.to_string(), "empty search string");
    }

    #[test]
    fn min_length_not_an_integer() {
        let err = ParseOptions::new().with_min_length_str("abc").unwrap_err();
        assert!(err.to_string().contains("invalid minimum length"));
    }

    #[test]
    fn min_length_below_one() {
        assert!(ParseOptions::new().with_min_length(0).is_err());
        assert!(ParseOptions::new().with_min_length_str("0").is_err());
    }

    #[test]
    fn invalid_default_symbol() {
        let err = "xor".parse::<DefaultSymbol>().unwrap_err();
        assert!(err.to_string().contains("invalid default symbol"));
    }

    #[test]
    fn argument_errors_are_not_suppressed() {
        let options = ParseOptions::new().with_throw_on_error(false);
        assert!(parse("   ", &options).unwrap_err().is_argument_error());
    }
}

mod buckets {
    use super::*;

    #[test]
    fn terms_are_optional_by_default() {
        assert_buckets(&parse_ok("Hello World"), &[], &["Hello", "World"], &[], &[]);
    }

    #[test]
    fn terms_are_required_with_and_default() {
        let options = ParseOptions::new().with_default_symbol(DefaultSymbol::And);
        let terms = parse("Hello World", &options).unwrap();
        assert_buckets(&terms, &["Hello", "World"], &[], &[], &[]);
    }

    #[test]
    fn minus_prefix_excludes() {
        assert_buckets(&parse_ok("Hello -World"), &[], &["Hello"], &["World"], &[]);
    }

    #[test]
    fn not_keyword_excludes() {
        assert_buckets(&parse_ok("Hello NOT World"), &[], &["Hello"], &["World"], &[]);
    }

    #[test]
    fn plus_prefix_requires() {
        assert_buckets(&parse_ok("Hello +World"), &["World"], &["Hello"], &[], &[]);
    }

    #[test]
    fn and_requires_both_neighbours() {
        assert_buckets(
            &parse_ok("Hello AND World AnotherString"),
            &["Hello", "World"],
            &["AnotherString"],
            &[],
            &[],
        );
    }

    #[test]
    fn or_makes_both_neighbours_optional() {
        let options = ParseOptions::new().with_default_symbol(DefaultSymbol::And);
        let terms = parse("term1 OR term2 term3", &options).unwrap();
        assert_buckets(&terms, &["term3"], &["term1", "term2"], &[], &[]);
    }

    #[test]
    fn phrases() {
        assert_buckets(
            &parse_ok("test \"Hello World\""),
            &[],
            &["test", "Hello World"],
            &[],
            &[],
        );
    }

    #[test]
    fn escaped_quotes_in_phrases() {
        assert_buckets(&parse_ok("\"Hello \\\" World\""), &[], &["Hello \" World"], &[], &[]);
    }

    #[test]
    fn excluded_phrase() {
        assert_buckets(
            &parse_ok("test -\"Hello World\""),
            &[],
            &["test"],
            &["Hello World"],
            &[],
        );
    }

    #[test]
    fn short_terms_are_skipped() {
        assert_buckets(&parse_ok("AB C"), &[], &["AB"], &[], &["C"]);
    }

    #[test]
    fn combination_of_syntaxes() {
        let terms =
            parse_ok("\"search string parser\" \"PHP 5.4\" OR \"PHP 5.3\" NOT \"PHP 4\" +OOP NOT C# -C++ C");
        assert_buckets(
            &terms,
            &["OOP"],
            &["search string parser", "PHP 5.4", "PHP 5.3"],
            &["PHP 4", "C#", "C++"],
            &["C"],
        );
        assert!(!terms.has_errors());
    }

    #[test]
    fn combination_of_syntaxes_with_and_default() {
        let options = ParseOptions::new().with_default_symbol(DefaultSymbol::And);
        let terms = parse(
            "\"search string parser\" \"PHP 5.4\" OR \"PHP 5.3\" NOT \"PHP 4\" +OOP NOT C# -C++ C",
            &options,
        )
        .unwrap();
        assert_buckets(
            &terms,
            &["search string parser", "OOP"],
            &["PHP 5.4", "PHP 5.3"],
            &["PHP 4", "C#", "C++"],
            &["C"],
        );
    }

    #[test]
    fn combination_using_and() {
        let terms = parse_ok(
            "Word1 AND Word2 +\"Phrase 1\" -\"Phrase 2\" Word3 -Word4 Word5 OR Word6 OR Word7 NOT Word8 X",
        );
        assert_buckets(
            &terms,
            &["Word1", "Word2", "Phrase 1"],
            &["Word3", "Word5", "Word6", "Word7"],
            &["Phrase 2", "Word4", "Word8"],
            &["X"],
        );
        assert!(!terms.has_errors());
    }

    #[test]
    fn unmarked_words_keep_input_order() {
        let inputs = [
            "alpha beta gamma",
            "  one   two\tthree\nfour ",
            "zz yy xx ww vv uu",
            "über straße café",
        ];
        for input in inputs {
            let expected: Vec<&str> = input.split_whitespace().collect();
            for default_symbol in [DefaultSymbol::And, DefaultSymbol::Or] {
                let options = ParseOptions::new().with_default_symbol(default_symbol);
                let terms = parse(input, &options).unwrap();
                let (hit, miss) = match default_symbol {
                    DefaultSymbol::And => (terms.and_terms(), terms.or_terms()),
                    DefaultSymbol::Or => (terms.or_terms(), terms.and_terms()),
                };
                assert_eq!(hit, expected.as_slice(), "{input:?}");
                assert!(miss.is_empty());
                assert!(terms.not_terms().is_empty());
                assert!(terms.skipped().is_empty());
            }
        }
    }

    #[test]
    fn word_after_not_is_excluded_literally() {
        // The operand of NOT is taken as written, even when it spells a keyword.
        assert_buckets(&parse_ok("NOT NOT word"), &[], &["word"], &["NOT"], &[]);
        assert_buckets(&parse_ok("one NOT OR two"), &[], &["one", "two"], &["OR"], &[]);
        assert!(!parse_ok("NOT NOT word").has_errors());
    }

    #[test]
    fn ideographic_space_separates_words() {
        assert_buckets(&parse_ok("検索\u{3000}エンジン"), &[], &["検索", "エンジン"], &[], &[]);
    }

    #[test]
    fn reparsing_gives_identical_result() {
        let input = "a1 OR b2 -c3 \"d e\" NOT f6 +g7 h";
        assert_eq!(parse_ok(input), parse_ok(input));
    }
}

mod diagnostics {
    use super::*;

    #[test]
    fn unclosed_quote_throws_when_requested() {
        let err = parse_strict_err("Hello \"World");
        assert!(matches!(
            err.diagnostic(),
            Some(Diagnostic::UnclosedQuote { .. })
        ));
    }

    #[test]
    fn unclosed_quote_is_silent_otherwise() {
        let terms = parse_ok("Test \"Hello World");
        assert_buckets(&terms, &[], &["Test", "Hello World"], &[], &[]);
        assert!(matches!(
            terms.errors()[0],
            Diagnostic::UnclosedQuote { .. }
        ));
    }

    #[test]
    fn trailing_not_throws_when_requested() {
        let err = parse_strict_err("Hello NOT");
        assert!(matches!(
            err.diagnostic(),
            Some(Diagnostic::TrailingNot { .. })
        ));
        assert!(err.to_string().contains("must not end with NOT"));
    }

    #[test]
    fn trailing_not_is_dropped_otherwise() {
        let terms = parse_ok("Test not");
        assert_buckets(&terms, &[], &["Test"], &[], &[]);
        assert!(matches!(terms.errors()[0], Diagnostic::TrailingNot { .. }));
    }

    #[test]
    fn leading_and_or_throw_when_requested() {
        for input in ["AND Hello", "OR Hello"] {
            let err = parse_strict_err(input);
            assert!(
                err.to_string()
                    .contains("must neither start nor end with AND or OR"),
                "{input}"
            );
        }
    }

    #[test]
    fn trailing_and_or_throw_when_requested() {
        for (input, keyword) in [("Hello AND", Symbol::And), ("Hello OR", Symbol::Or)] {
            let err = parse_strict_err(input);
            assert_eq!(
                err.diagnostic(),
                Some(&Diagnostic::BoundaryMisuse {
                    keyword,
                    position: 6
                })
            );
        }
    }

    #[test]
    fn boundary_or_is_dropped_otherwise() {
        for input in ["or Test", "Test or"] {
            let terms = parse_ok(input);
            assert_buckets(&terms, &[], &["Test"], &[], &[]);
            assert!(matches!(
                terms.errors()[0],
                Diagnostic::BoundaryMisuse { .. }
            ));
        }
    }

    #[test]
    fn negated_term_before_or() {
        let err = parse_strict_err("-Hello OR World");
        assert!(err.to_string().contains("contradictory instructions"));

        let terms = parse_ok("-Hello OR World");
        assert_buckets(&terms, &[], &["World"], &["Hello"], &[]);
        assert!(matches!(
            terms.errors()[0],
            Diagnostic::Contradiction { .. }
        ));
    }

    #[test]
    fn required_term_after_not() {
        let err = parse_strict_err("Word1 NOT +Word");
        assert!(err.to_string().contains("contradictory instructions"));

        let terms = parse_ok("Word1 NOT +Word");
        assert_buckets(&terms, &["Word"], &["Word1"], &[], &[]);
    }

    #[test]
    fn negated_term_after_or() {
        assert!(matches!(
            parse_strict_err("Hello OR -negated").diagnostic(),
            Some(Diagnostic::Contradiction { .. })
        ));

        let terms = parse_ok("Test or -negated");
        assert_buckets(&terms, &[], &["Test"], &["negated"], &[]);
        assert!(matches!(
            terms.errors()[0],
            Diagnostic::Contradiction { .. }
        ));
    }

    #[test]
    fn explicit_modifier_matching_keyword_is_not_an_error() {
        for input in [
            "+Word1 AND Word2",
            "Word1 AND +Word2",
            "+Word1 AND +Word2",
            "NOT -Word1",
            "Word1 OR Word2 OR Word3",
        ] {
            let terms = parse_ok(input);
            assert!(!terms.has_errors(), "{input}: {:?}", terms.errors());
        }
    }

    #[test]
    fn diagnostics_are_in_discovery_order() {
        let terms = parse_ok("OR -a1 OR b2 NOT \"open");
        let kinds: Vec<&str> = terms.errors().iter().map(Diagnostic::kind).collect();
        assert_eq!(kinds, ["unclosed_quote", "boundary_misuse", "contradiction"]);
    }

    #[test]
    fn strict_error_carries_later_diagnostics() {
        let err = parse_strict_err("OR Hello OR");
        let terms = err.terms().unwrap();
        assert_eq!(terms.errors().len(), 2);
        assert_eq!(terms.or_terms(), ["Hello"]);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn result_serializes_all_buckets() {
        let terms = parse_ok("+rust -go C \"open");
        let json = serde_json::to_value(&terms).unwrap();
        assert_eq!(json["and_terms"][0], "rust");
        assert_eq!(json["not_terms"][0], "go");
        assert_eq!(json["skipped"][0], "C");
        assert_eq!(json["or_terms"][0], "open");
        assert_eq!(json["errors"][0]["kind"], "unclosed_quote");
        assert_eq!(json["query"], "+rust -go C \"open");
    }
}
