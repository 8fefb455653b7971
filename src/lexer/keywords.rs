//! Распознавание ключевых слов-операторов
//!
//! Ключевые слова сравниваются без учета регистра (только ASCII) и только
//! с завершенной лексемой целиком. Лексема при этом не меняется.

use crate::lexer::token::TokenType;

pub const AND: &str = "AND";
pub const OR: &str = "OR";
pub const NOT: &str = "NOT";
pub const XOR: &str = "XOR";

/// Определяет тип завершенного слова
///
/// Первый символ выбирает единственного кандидата; лексемы, начинающиеся
/// с других символов, сразу остаются `Identifier`.
pub fn classify(lexeme: &str) -> TokenType {
    let candidate = match lexeme.chars().next() {
        Some('a' | 'A') => (AND, TokenType::And),
        Some('o' | 'O') => (OR, TokenType::Or),
        Some('n' | 'N') => (NOT, TokenType::Not),
        Some('x' | 'X') => (XOR, TokenType::Xor),
        _ => return TokenType::Identifier,
    };

    let (keyword, token_type) = candidate;
    if lexeme.eq_ignore_ascii_case(keyword) {
        token_type
    } else {
        TokenType::Identifier
    }
}

/// Проверяет, является ли лексема ключевым словом
pub fn is_keyword(lexeme: &str) -> bool {
    classify(lexeme) != TokenType::Identifier
}
