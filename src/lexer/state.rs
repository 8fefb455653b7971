//! Состояния конечного автомата лексера и буфер лексемы

use crate::common::{Error, LexicalErrorKind, Result};
use crate::lexer::token::{Position, Token, TokenType};

/// Куда вернуться после закрывающей кавычки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteReturn {
    /// Продолжить слово
    BareWord,
    /// Ожидать `,` или `]` списка
    BracketList,
}

/// Состояние автомата
///
/// Контекст строки в кавычках (открывающая кавычка и состояние возврата)
/// хранится в самом состоянии.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    BareWord,
    InQuote { quote: char, return_to: QuoteReturn },
    Escape { quote: char, return_to: QuoteReturn },
    BracketListItem,
    BracketListClose,
    OperatorSymbol(TokenType),
    DoneEof,
}

/// Результат одного перехода
#[derive(Debug)]
pub enum Step {
    /// Перейти в состояние
    Next(State),
    /// Токен готов
    Emit(Token),
}

/// Накапливаемая лексема с ограничением длины
#[derive(Debug)]
pub struct Lexeme {
    text: String,
    length: usize,
    limit: usize,
    start: Option<Position>,
}

impl Lexeme {
    pub fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            length: 0,
            limit,
            start: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Длина в символах
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Добавляет символ, прочитанный в позиции `at`
    ///
    /// Символ, с которым лексема превысила бы лимит, не добавляется.
    pub fn push(&mut self, ch: char, at: &Position) -> Result<()> {
        if self.length >= self.limit {
            return Err(Error::lexical(
                LexicalErrorKind::LexemeTooLong,
                format!(
                    "Symbol {:?} not expected: lexeme exceeds {} characters",
                    ch, self.limit
                ),
                self.text.clone(),
                at.clone(),
            ));
        }
        if self.start.is_none() {
            self.start = Some(at.clone());
        }
        self.text.push(ch);
        self.length += 1;
        Ok(())
    }

    /// Забирает накопленный текст в токен
    pub fn finish(&mut self, token_type: TokenType) -> Token {
        let position = self.start.take().unwrap_or_default();
        self.length = 0;
        Token::new(token_type, std::mem::take(&mut self.text), position)
    }
}
