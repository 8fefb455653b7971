//! boolquery - лексический анализатор языка булевых фильтров
//!
//! Преобразует запросы вида `(a AND b) OR ~c` в поток токенов для парсера
//! предикатов поискового движка.

pub mod cli;
pub mod common;
pub mod lexer;

pub use common::error::{Error, LexicalErrorKind, Result};
pub use lexer::{Lexer, Position, Token, TokenType};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Разбивает запрос на токены, включая завершающий `EndOfInput`
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}
