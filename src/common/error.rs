//! Обработка ошибок для boolquery

use crate::lexer::Position;
use std::fmt;
use thiserror::Error;

/// Вид лексической ошибки
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum LexicalErrorKind {
    /// Лексема превысила допустимую длину
    LexemeTooLong,
    /// Строка в кавычках не закрыта до конца ввода
    UnterminatedQuote,
    /// Экранирование оборвано концом ввода
    UnterminatedEscape,
    /// После элемента списка ожидалась `]` или `,`
    ExpectedClosingBracket,
}

impl fmt::Display for LexicalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexicalErrorKind::LexemeTooLong => "lexeme too long",
            LexicalErrorKind::UnterminatedQuote => "unterminated quote",
            LexicalErrorKind::UnterminatedEscape => "unterminated escape",
            LexicalErrorKind::ExpectedClosingBracket => "expected closing bracket",
        };
        write!(f, "{}", name)
    }
}

/// Основной тип ошибки для boolquery
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Лексическая ошибка
    #[error("Lexical error at {position}: {message}")]
    Lexical {
        kind: LexicalErrorKind,
        message: String,
        /// Часть лексемы, накопленная до ошибки
        fragment: String,
        position: Position,
    },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для boolquery
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает лексическую ошибку
    pub fn lexical(
        kind: LexicalErrorKind,
        message: impl Into<String>,
        fragment: impl Into<String>,
        position: Position,
    ) -> Self {
        Self::Lexical {
            kind,
            message: message.into(),
            fragment: fragment.into(),
            position,
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Проверяет, является ли ошибка лексической
    pub fn is_lexical(&self) -> bool {
        matches!(self, Error::Lexical { .. })
    }

    /// Возвращает вид лексической ошибки
    pub fn lexical_kind(&self) -> Option<LexicalErrorKind> {
        match self {
            Error::Lexical { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Возвращает позицию лексической ошибки
    pub fn position(&self) -> Option<&Position> {
        match self {
            Error::Lexical { position, .. } => Some(position),
            _ => None,
        }
    }
}
