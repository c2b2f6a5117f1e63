//! Edge case tests for sayc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexErrorKind, Lexer, LexerConfig, Token, TokenKind};
    use sayc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|token| !token.is_eof())
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let stream = tokenize("").unwrap();
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.eof().line(), 1);
        assert_eq!(stream.eof().text(), "");
    }

    #[test]
    fn test_edge_only_trivia() {
        let stream = tokenize("  | just a comment |\n\n").unwrap();
        assert!(stream.is_empty());
        assert_eq!(stream.eof().line(), 3);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].text(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("create {} as int,", name));
        assert_eq!(t[1].text(), name);
        assert_eq!(t[1].length(), 10000);
    }

    #[test]
    fn test_edge_long_literal() {
        let body = "z".repeat(5000);
        let t = lex_all(&format!("say \"{}\",", body));
        assert_eq!(t[1].kind(), TokenKind::StringLiteral);
        assert_eq!(t[1].length(), 5000);
    }

    #[test]
    fn test_edge_adjacent_tokens_without_spaces() {
        let t = lex_all("x+=1,y--,");
        let kinds: Vec<_> = t.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::AddTo,
                TokenKind::IntegerLiteral,
                TokenKind::Terminator,
                TokenKind::Identifier,
                TokenKind::Decrement,
                TokenKind::Terminator,
            ]
        );
    }

    #[test]
    fn test_edge_comment_between_tokens() {
        let with_comment: Vec<_> = lex_all("create |this is ignored| x")
            .iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect();
        let without: Vec<_> = lex_all("create x")
            .iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect();
        assert_eq!(with_comment, without);
    }

    #[test]
    fn test_edge_comment_glued_to_word() {
        let t = lex_all("say|c|x");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].text(), "x");
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let stream = tokenize("say 1,\r\nsay 2,\r\n").unwrap();
        assert_eq!(stream[3].line(), 2);
        assert_eq!(stream.eof().line(), 3);
    }

    #[test]
    fn test_edge_boolean_keywords() {
        let t = lex_all("true false");
        assert_eq!(t[0].kind(), TokenKind::True);
        assert_eq!(t[1].kind(), TokenKind::False);
    }

    #[test]
    fn test_edge_multiword_at_end_of_input() {
        let t = lex_all("x is");
        assert_eq!(t[1].kind(), TokenKind::Is);

        let err = tokenize("x not").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::Unknown);
    }

    #[test]
    fn test_edge_filler_words_alone() {
        let t = lex_all("on than");
        assert!(t.iter().all(|t| t.kind() == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_unrecognized_characters() {
        for source in ["#", "@", "&", "!", "<", ">", ".5", ";", "{", "é"] {
            let err = tokenize(source).unwrap_err();
            assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter, "source {source:?}");
            assert_eq!(err.line, 1);
        }
    }

    #[test]
    fn test_edge_error_line_is_lexeme_start() {
        let err = tokenize("say 1,\n\n\nsay \"never\nclosed").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedLiteral);
        assert_eq!(err.line, 4);
    }

    #[test]
    fn test_edge_lines_non_decreasing() {
        let source = "x\n| a\nb |\nis\n\nnot 1,\n'q\nr' y";
        let stream = tokenize(source).unwrap();
        let lines: Vec<u32> = stream.iter().map(Token::line).collect();
        assert!(lines.windows(2).all(|w| w[0] <= w[1]), "{lines:?}");
    }

    #[test]
    fn test_edge_legacy_counts_comment_newlines() {
        let stream = Lexer::with_config("stop, |a\nb| skip,", LexerConfig::legacy())
            .tokenize()
            .unwrap();
        // stop on 1, terminator bumps to 2, comment newline bumps to 3
        assert_eq!(stream[2].line(), 3);
    }

    #[test]
    fn test_edge_recovery_on_clean_source_matches_fail_fast() {
        let source = "create x as list, x = [1, 2],";
        let handler = Handler::new();
        let recovered = Lexer::new(source).tokenize_recovering(&handler);
        assert!(!handler.has_errors());
        assert_eq!(recovered, tokenize(source).unwrap());
    }

    #[test]
    fn test_edge_recovery_after_bad_multiword() {
        let handler = Handler::new();
        let stream = Lexer::new("if a not b, stop,").tokenize_recovering(&handler);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            stream.kinds(),
            vec![
                TokenKind::If,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Terminator,
                TokenKind::Stop,
                TokenKind::Terminator,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_round_trip() {
        let source = "create n as float = 1.5, repeat on n: n *= 2, if n is not 'ab' or n not less than 3 start say \"it's\", end";
        let first = tokenize(source).unwrap();
        let second = tokenize(&first.to_source()).unwrap();
        assert_eq!(first.kinds(), second.kinds());
        let texts = |s: &crate::TokenStream| s.iter().map(|t| t.text().to_string()).collect::<Vec<_>>();
        assert_eq!(texts(&first), texts(&second));
    }
}
