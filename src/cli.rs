//! CLI интерфейс для boolquery
//!
//! Позволяет разобрать запрос на токены из командной строки или stdin

use crate::common::{Config, Error, Result};
use crate::lexer::{ContentReader, Lexer};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{Read, Write};
use std::path::PathBuf;

/// boolquery - лексический анализатор булевых фильтров
#[derive(Parser)]
#[command(name = "boolquery")]
#[command(about = "boolquery - tokenizer for boolean filter queries")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Максимальная длина лексемы
    #[arg(long, value_name = "N")]
    pub max_lexeme_length: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разобрать запрос и напечатать токены
    Tokenize {
        /// Запрос; если не указан, читается из stdin
        query: Option<String>,

        /// Формат вывода
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Проверить запрос на лексические ошибки
    Check {
        /// Запрос; если не указан, читается из stdin
        query: Option<String>,
    },

    /// Показать действующую конфигурацию
    Config,
}

/// Формат вывода токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Загружает конфигурацию: файл, затем окружение, затем аргументы
    pub fn load_config(&self) -> Result<Config> {
        let file_config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        let mut config = file_config.merge(Config::from_env()?);

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(max_len) = self.max_lexeme_length {
            config.lexer.max_lexeme_length = max_len;
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду
    pub fn execute<W: Write>(&self, config: &Config, out: &mut W) -> Result<()> {
        match &self.command {
            Commands::Tokenize { query, format } => {
                let query = read_query(query.as_deref())?;
                tokenize_query(&query, config, *format, out)
            }
            Commands::Check { query } => {
                let query = read_query(query.as_deref())?;
                let count = lexer_for(&query, config).tokenize()?.len() - 1;
                writeln!(out, "ok: {} tokens", count)?;
                Ok(())
            }
            Commands::Config => {
                write!(out, "{}", config.to_toml()?)?;
                Ok(())
            }
        }
    }
}

fn lexer_for(query: &str, config: &Config) -> Lexer<ContentReader> {
    Lexer::with_config(ContentReader::new(query), &config.lexer)
}

/// Печатает токены запроса в выбранном формате
pub fn tokenize_query<W: Write>(
    query: &str,
    config: &Config,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let tokens = lexer_for(query, config).tokenize()?;

    match format {
        OutputFormat::Text => {
            for token in &tokens {
                writeln!(out, "{}\t{}\t{}", token.position, token.token_type, token.lexeme)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn read_query(query: Option<&str>) -> Result<String> {
    match query {
        Some(query) => Ok(query.to_string()),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            if input.is_empty() {
                return Err(Error::configuration("no query given on command line or stdin"));
            }
            Ok(input)
        }
    }
}
