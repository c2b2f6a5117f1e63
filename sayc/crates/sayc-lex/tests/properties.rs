//! Property tests for the token stream invariants.

use proptest::prelude::*;
use sayc_lex::classify::{classify, Classification};
use sayc_lex::{tokenize, Lexer, LexerConfig, TokenKind, TokenStream};
use sayc_util::Handler;

const VOCABULARY: &[&str] = &[
    "create", "as", "start", "end", "if", "else", "while", "stop", "skip", "say", "input", "with",
    "return", "true", "false", "and", "or", "int", "float", "char", "list", "string", "repeat",
    "repeat on", "is", "is not", "less than", "more than", "not less than", "not more than", "=",
    "+", "-", "*", "/", "%", "++", "--", "+=", "-=", "*=", "/=", "%=", "(", ")", "[", "]", ",",
    ":", "x", "total_2", "_tmp", "0", "42", "3.5", "7.", "'a'", "''", "\"hi there\"", "'it\"s'",
];

const SEPARATORS: &[&str] = &[" ", "\n", "\t", " |note| ", "\r\n", " |two\nlines| "];

/// Programs built only from valid lexemes.
fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(VOCABULARY), prop::sample::select(SEPARATORS)),
        0..60,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

fn assert_well_formed(stream: &TokenStream) {
    let tokens = stream.as_slice();
    let last = tokens.last().expect("stream is never empty");
    assert!(last.is_eof());
    assert_eq!(last.text(), "");
    assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);

    for token in tokens {
        assert_eq!(token.length(), token.text().chars().count());
        assert_ne!(token.kind(), TokenKind::Unknown);
        if !token.is_eof() && token.kind() != TokenKind::CharLiteral {
            assert!(!token.text().is_empty(), "empty text for {token}");
        }
    }
    assert!(tokens.windows(2).all(|w| w[0].line() <= w[1].line()));
}

#[test]
fn test_property_valid_programs_are_well_formed() {
    proptest!(|(source in program())| {
        let stream = tokenize(&source).unwrap();
        assert_well_formed(&stream);
        prop_assert_eq!(stream.eof().line() as usize, source.matches('\n').count() + 1);
    });
}

#[test]
fn test_property_round_trip_keeps_kinds() {
    proptest!(|(source in program())| {
        let first = tokenize(&source).unwrap();
        let second = tokenize(&first.to_source()).unwrap();
        prop_assert_eq!(first.kinds(), second.kinds());
    });
}

#[test]
fn test_property_recovery_agrees_on_valid_programs() {
    proptest!(|(source in program())| {
        let handler = Handler::new();
        let recovered = Lexer::new(&source).tokenize_recovering(&handler);
        prop_assert!(!handler.has_errors());
        prop_assert_eq!(recovered, tokenize(&source).unwrap());
    });
}

#[test]
fn test_property_legacy_lines_never_lower() {
    proptest!(|(source in program())| {
        let plain = tokenize(&source).unwrap();
        let legacy = Lexer::with_config(&source, LexerConfig::legacy()).tokenize().unwrap();
        prop_assert_eq!(plain.kinds(), legacy.kinds());
        for (a, b) in plain.iter().zip(legacy.iter()) {
            prop_assert!(a.line() <= b.line());
        }
    });
}

#[test]
fn test_property_arbitrary_input_never_panics() {
    proptest!(|(source in "\\PC{0,200}")| {
        if let Ok(stream) = tokenize(&source) {
            assert_well_formed(&stream);
        }
        let handler = Handler::new();
        let stream = Lexer::new(&source).tokenize_recovering(&handler);
        assert_well_formed(&stream);
    });
}

#[test]
fn test_property_identifier_shapes() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}")| {
        prop_assume!(classify(&input) == Classification::Kind(TokenKind::Identifier));
        let stream = tokenize(&input).unwrap();
        prop_assert_eq!(stream.len(), 2);
        prop_assert_eq!(stream[0].kind(), TokenKind::Identifier);
        prop_assert_eq!(stream[0].text(), input.as_str());
    });
}

#[test]
fn test_property_number_shapes() {
    proptest!(|(whole in "[0-9]{1,12}", frac in proptest::option::of("[0-9]{0,6}"))| {
        let input = match &frac {
            Some(frac) => format!("{whole}.{frac}"),
            None => whole.clone(),
        };
        let stream = tokenize(&input).unwrap();
        let expected = if frac.is_some() { TokenKind::FloatLiteral } else { TokenKind::IntegerLiteral };
        prop_assert_eq!(stream[0].kind(), expected);
        prop_assert_eq!(stream[0].text(), input.as_str());
    });
}

#[test]
fn test_property_quoted_literals() {
    proptest!(|(content in "[^'\\r]{0,40}")| {
        let stream = tokenize(&format!("'{content}'")).unwrap();
        let expected = if content.chars().count() <= 1 {
            TokenKind::CharLiteral
        } else {
            TokenKind::StringLiteral
        };
        prop_assert_eq!(stream[0].kind(), expected);
        prop_assert_eq!(stream[0].text(), content.as_str());
    });
}
