//! Конфигурация для boolquery
//!
//! Предоставляет структуры конфигурации для лексера и логирования

use crate::common::constants::{DEFAULT_LOG_LEVEL, ENV_PREFIX, LOG_LEVELS, MAX_LEXEME_LENGTH};
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Основная конфигурация
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Настройки лексического анализатора
    pub lexer: LexerConfig,
    /// Настройки логирования
    pub logging: LoggingConfig,
}

/// Конфигурация лексического анализатора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Максимальная длина лексемы в символах
    pub max_lexeme_length: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_length: MAX_LEXEME_LENGTH,
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Сериализует конфигурацию в TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("failed to serialize config: {}", e)))
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(format!("{}{}", ENV_PREFIX, name)).ok())
    }

    /// Собирает конфигурацию из произвольного источника переменных
    pub(crate) fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(max_len) = lookup("MAX_LEXEME_LENGTH") {
            config.lexer.max_lexeme_length = max_len.parse().map_err(|_| {
                Error::configuration(format!("invalid {}MAX_LEXEME_LENGTH: {}", ENV_PREFIX, max_len))
            })?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой
    ///
    /// Значения `other`, отличные от значений по умолчанию, имеют приоритет.
    pub fn merge(mut self, other: Self) -> Self {
        if other.lexer.max_lexeme_length != MAX_LEXEME_LENGTH {
            self.lexer.max_lexeme_length = other.lexer.max_lexeme_length;
        }
        if other.logging.level != DEFAULT_LOG_LEVEL {
            self.logging.level = other.logging.level;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.lexer.max_lexeme_length == 0 {
            return Err(Error::configuration(
                "max_lexeme_length must be greater than 0",
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
