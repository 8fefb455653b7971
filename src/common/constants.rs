//! Константы для boolquery

/// Максимальная длина лексемы в символах
pub const MAX_LEXEME_LENGTH: usize = 1024;

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Допустимые уровни логирования
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Префикс переменных окружения
pub const ENV_PREFIX: &str = "BOOLQUERY_";

// Символы языка запросов

pub const LEFT_PARENTHESIS: char = '(';
pub const RIGHT_PARENTHESIS: char = ')';
pub const AMPERSAND: char = '&';
pub const PIPE: char = '|';
pub const TILDE: char = '~';

pub const SINGLE_QUOTE: char = '\'';
pub const DOUBLE_QUOTE: char = '"';
pub const BACKSLASH: char = '\\';

pub const LEFT_SQUARE_BRACKET: char = '[';
pub const RIGHT_SQUARE_BRACKET: char = ']';
pub const LIST_SEPARATOR: char = ',';

/// Символы-операторы, образующие токен из одного символа
pub const OPERATOR_SYMBOLS: [char; 5] = [LEFT_PARENTHESIS, RIGHT_PARENTHESIS, AMPERSAND, PIPE, TILDE];

/// Пробельные символы, разделяющие токены
pub const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Проверяет, является ли символ оператором из одного символа
pub fn is_operator_symbol(ch: char) -> bool {
    OPERATOR_SYMBOLS.contains(&ch)
}

/// Проверяет, является ли символ разделителем токенов
pub fn is_whitespace(ch: char) -> bool {
    WHITESPACE.contains(&ch)
}

/// Проверяет, открывает ли символ строку в кавычках
pub fn is_quote(ch: char) -> bool {
    ch == SINGLE_QUOTE || ch == DOUBLE_QUOTE
}
