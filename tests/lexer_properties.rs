//! Интеграционные тесты для boolquery
//!
//! Проверяют свойства лексера через публичный API крейта.

use std::cell::Cell;
use std::rc::Rc;

use boolquery::lexer::{CharSource, ContentReader, SymbolSource};
use boolquery::{tokenize, Error, Lexer, LexicalErrorKind, Token, TokenType};

fn summary(tokens: &[Token]) -> Vec<(TokenType, &str)> {
    tokens
        .iter()
        .map(|t| (t.token_type, t.lexeme.as_str()))
        .collect()
}

#[test]
fn whitespace_only_input_yields_end_of_input() {
    for input in ["", " ", "\t", "\r\n", " \n\t \r "] {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.token_type, TokenType::EndOfInput, "input {:?}", input);
        assert!(token.lexeme.is_empty());
    }
}

#[test]
fn end_of_input_repeats_forever() {
    for input in ["", "a", "(a AND b)", "[x,y] | 'z'"] {
        let mut lexer = Lexer::new(input);
        let mut seen_end = 0;
        for _ in 0..20 {
            let token = lexer.next_token().unwrap();
            if seen_end > 0 {
                assert!(token.is_end_of_input(), "input {:?}", input);
            }
            if token.is_end_of_input() {
                seen_end += 1;
            }
        }
        assert!(seen_end > 1);
    }
}

#[test]
fn keywords_are_case_insensitive() {
    for input in ["and", "AND", "And", "aNd"] {
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens[0].token_type, TokenType::And, "input {:?}", input);
    }
}

#[test]
fn quoting_shields_keywords() {
    let tokens = tokenize("'AND'").unwrap();
    assert_eq!(
        summary(&tokens),
        vec![(TokenType::Identifier, "'AND'"), (TokenType::EndOfInput, "")]
    );
}

#[test]
fn bracket_list_is_one_token() {
    let tokens = tokenize("[a,b,c]").unwrap();
    assert_eq!(
        summary(&tokens),
        vec![(TokenType::Identifier, "[a,b,c]"), (TokenType::EndOfInput, "")]
    );
}

#[test]
fn boolean_expression_token_sequence() {
    let tokens = tokenize("(a AND b) OR ~c").unwrap();
    assert_eq!(
        summary(&tokens),
        vec![
            (TokenType::LeftParenthesis, "("),
            (TokenType::Identifier, "a"),
            (TokenType::And, "AND"),
            (TokenType::Identifier, "b"),
            (TokenType::RightParenthesis, ")"),
            (TokenType::Or, "OR"),
            (TokenType::Not, "~"),
            (TokenType::Identifier, "c"),
            (TokenType::EndOfInput, ""),
        ]
    );
}

#[test]
fn unterminated_quote_fails() {
    let mut lexer = Lexer::new("\"abc");
    let err = lexer.next_token().unwrap_err();
    assert!(err.is_lexical());
    assert_eq!(err.lexical_kind(), Some(LexicalErrorKind::UnterminatedQuote));
}

#[test]
fn unterminated_bracket_list_fails() {
    let err = tokenize("[a,b").unwrap_err();
    assert_eq!(
        err.lexical_kind(),
        Some(LexicalErrorKind::ExpectedClosingBracket)
    );
    match err {
        Error::Lexical {
            message, fragment, ..
        } => {
            assert!(message.starts_with("Symbol ] expected"));
            assert_eq!(fragment, "[a,b");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn escape_is_kept_verbatim() {
    let tokens = tokenize(r#""a\"b""#).unwrap();
    assert_eq!(
        summary(&tokens),
        vec![(TokenType::Identifier, r#""a\"b""#), (TokenType::EndOfInput, "")]
    );
}

#[test]
fn overlong_word_fails_before_any_token() {
    let word = "k".repeat(1025);
    let mut lexer = Lexer::new(&word);
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.lexical_kind(), Some(LexicalErrorKind::LexemeTooLong));
}

#[test]
fn whitespace_variants_tokenize_identically() {
    let expected = vec![
        (TokenType::Identifier, "a"),
        (TokenType::And, "AND"),
        (TokenType::Identifier, "b"),
        (TokenType::EndOfInput, ""),
    ];
    for input in ["a AND b", "a  AND  b", "a\tAND\nb"] {
        let tokens = tokenize(input).unwrap();
        assert_eq!(summary(&tokens), expected, "input {:?}", input);
    }
}

#[test]
fn streaming_source_matches_buffer() {
    let query = "title:'rust lang' & [\"a\",b] | NOT draft xor z";
    let buffered = tokenize(query).unwrap();

    let streamed = Lexer::from_source(CharSource::new(query.chars()))
        .tokenize()
        .unwrap();
    assert_eq!(buffered, streamed);
}

/// Источник, считающий запрошенные символы
struct CountingSource {
    inner: ContentReader,
    pulls: Rc<Cell<usize>>,
}

impl SymbolSource for CountingSource {
    fn next_symbol(&mut self) -> Option<char> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next_symbol()
    }
}

#[test]
fn lexer_looks_ahead_one_symbol() {
    let pulls = Rc::new(Cell::new(0));
    let source = CountingSource {
        inner: ContentReader::new("ab OR c"),
        pulls: Rc::clone(&pulls),
    };

    let mut lexer = Lexer::from_source(source);
    assert_eq!(pulls.get(), 1);

    // "ab" завершается пробелом, который остается непотребленным
    assert_eq!(lexer.next_token().unwrap().lexeme, "ab");
    assert_eq!(pulls.get(), 3);

    assert_eq!(lexer.next_token().unwrap().token_type, TokenType::Or);
    assert_eq!(pulls.get(), 6);
}
