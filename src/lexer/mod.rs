//! Лексический анализатор языка булевых запросов boolquery

pub mod keywords;
pub mod lexer;
pub mod source;
pub mod state;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use keywords::classify;
pub use lexer::Lexer;
pub use source::{CharSource, ContentReader, Cursor, SymbolSource};
pub use token::{Position, Token, TokenType};
