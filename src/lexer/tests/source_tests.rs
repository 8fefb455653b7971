//! Тесты для источников символов и курсора

use crate::lexer::{CharSource, ContentReader, Cursor, Lexer, Position, SymbolSource, TokenType};

#[test]
fn test_content_reader_sentinel_is_sticky() {
    let mut reader = ContentReader::new("ab");
    assert_eq!(reader.remaining(), 2);
    assert_eq!(reader.next_symbol(), Some('a'));
    assert_eq!(reader.next_symbol(), Some('b'));
    assert_eq!(reader.remaining(), 0);
    for _ in 0..3 {
        assert_eq!(reader.next_symbol(), None);
    }
}

#[test]
fn test_char_source_is_fused() {
    // Итератор, который "оживает" после None
    let mut calls = 0;
    let flaky = std::iter::from_fn(move || {
        calls += 1;
        match calls {
            1 => Some('x'),
            2 => None,
            _ => Some('y'),
        }
    });

    let mut source = CharSource::new(flaky);
    assert_eq!(source.next_symbol(), Some('x'));
    assert_eq!(source.next_symbol(), None);
    assert_eq!(source.next_symbol(), None);
}

#[test]
fn test_cursor_holds_one_symbol() {
    let mut cursor = Cursor::new(ContentReader::new("a\nb"));
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.position(), &Position::start());

    assert_eq!(cursor.pull(), Some('a'));
    assert_eq!(cursor.current(), Some('\n'));
    assert_eq!(cursor.position(), &Position::new(1, 2, 1));

    assert_eq!(cursor.pull(), Some('\n'));
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.position(), &Position::new(2, 1, 2));

    assert_eq!(cursor.pull(), Some('b'));
    assert!(cursor.is_at_end());
}

#[test]
fn test_cursor_does_not_advance_past_end() {
    let mut cursor = Cursor::new(ContentReader::new("z"));
    cursor.pull();
    let end = cursor.position().clone();

    assert_eq!(cursor.pull(), None);
    assert_eq!(cursor.pull(), None);
    assert_eq!(cursor.position(), &end);
}

#[test]
fn test_lexer_over_char_source() {
    let text = String::from("x XOR (y)");
    let mut lexer = Lexer::from_source(CharSource::new(text.chars()));
    let types: Vec<TokenType> = lexer
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.token_type)
        .collect();
    assert_eq!(
        types,
        vec![
            TokenType::Identifier,
            TokenType::Xor,
            TokenType::LeftParenthesis,
            TokenType::Identifier,
            TokenType::RightParenthesis,
            TokenType::EndOfInput,
        ]
    );
}

#[test]
fn test_lexer_over_boxed_source() {
    let source: Box<dyn SymbolSource> = Box::new(ContentReader::new("~a"));
    let mut lexer = Lexer::from_source(source);
    assert_eq!(lexer.next_token().unwrap().token_type, TokenType::Not);
    assert_eq!(lexer.next_token().unwrap().lexeme, "a");
}
