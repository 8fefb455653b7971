//! Общие типы и утилиты для boolquery

pub mod config;
pub mod constants;
pub mod error;

pub use config::{Config, LexerConfig, LoggingConfig};
pub use constants::*;
pub use error::{Error, LexicalErrorKind, Result};
