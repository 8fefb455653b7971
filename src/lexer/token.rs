//! Токены языка булевых запросов
//!
//! Определяет типы токенов, которые выдает лексический анализатор:
//! идентификаторы, логические операторы, скобки и конец ввода.

use serde::Serialize;
use std::fmt;

/// Позиция символа в исходном тексте
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Сдвигает позицию за прочитанный символ
    pub(crate) fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += 1;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Токен с типом, лексемой и позицией
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    /// Исходный текст токена; пуст только у `EndOfInput`
    pub lexeme: String,
    /// Позиция первого символа лексемы
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: String, position: Position) -> Self {
        Self {
            token_type,
            lexeme,
            position,
        }
    }

    pub fn end_of_input(position: Position) -> Self {
        Self::new(TokenType::EndOfInput, String::new(), position)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.token_type == TokenType::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end_of_input() {
            write!(f, "{} at {}", self.token_type, self.position)
        } else {
            write!(f, "{:?}('{}') at {}", self.token_type, self.lexeme, self.position)
        }
    }
}

/// Типы токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    /// Идентификатор: слово, строка в кавычках или список в скобках
    Identifier,

    // Логические операторы
    And,           // AND, &
    Or,            // OR, |
    Not,           // NOT, ~
    Xor,           // XOR

    // Группировка
    LeftParenthesis,   // (
    RightParenthesis,  // )

    /// Конец ввода
    EndOfInput,
}

impl TokenType {
    /// Проверяет, является ли токен логическим оператором
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::And | TokenType::Or | TokenType::Not | TokenType::Xor
        )
    }

    /// Проверяет, является ли токен скобкой
    pub fn is_parenthesis(&self) -> bool {
        matches!(self, TokenType::LeftParenthesis | TokenType::RightParenthesis)
    }

    /// Возвращает тип токена для символа-оператора
    pub fn from_operator_symbol(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(TokenType::LeftParenthesis),
            ')' => Some(TokenType::RightParenthesis),
            '&' => Some(TokenType::And),
            '|' => Some(TokenType::Or),
            '~' => Some(TokenType::Not),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Identifier => "IDENTIFIER",
            TokenType::And => "AND",
            TokenType::Or => "OR",
            TokenType::Not => "NOT",
            TokenType::Xor => "XOR",
            TokenType::LeftParenthesis => "(",
            TokenType::RightParenthesis => ")",
            TokenType::EndOfInput => "EOF",
        };
        write!(f, "{}", name)
    }
}
