//! Лексический анализатор языка булевых запросов
//!
//! Преобразует поток символов в последовательность токенов для парсера
//! выражений. Каждый вызов `next_token` проходит автомат от `Start` до
//! готового токена; символ, завершивший слово, остается в курсоре и
//! начинает следующий токен.

use crate::common::config::LexerConfig;
use crate::common::constants::*;
use crate::common::{Error, LexicalErrorKind, Result};
use crate::lexer::keywords;
use crate::lexer::source::{ContentReader, Cursor, SymbolSource};
use crate::lexer::state::{Lexeme, QuoteReturn, State, Step};
use crate::lexer::token::{Token, TokenType};
use log::{debug, trace};

/// Лексический анализатор
pub struct Lexer<S: SymbolSource = ContentReader> {
    /// Курсор с одним символом предпросмотра
    cursor: Cursor<S>,
    /// Максимальная длина лексемы
    max_lexeme_length: usize,
    /// Токен, прочитанный через `peek_token`
    peeked: Option<Token>,
    /// Итератор уже вернул конец ввода или ошибку
    exhausted: bool,
}

impl Lexer<ContentReader> {
    /// Создает лексер над текстом
    pub fn new(input: &str) -> Self {
        Self::from_source(ContentReader::new(input))
    }
}

impl<S: SymbolSource> Lexer<S> {
    /// Создает лексер над произвольным источником символов
    pub fn from_source(source: S) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    pub fn with_config(source: S, config: &LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            max_lexeme_length: config.max_lexeme_length,
            peeked: None,
            exhausted: false,
        }
    }

    pub fn max_lexeme_length(&self) -> usize {
        self.max_lexeme_length
    }

    /// Возвращает следующий токен
    ///
    /// После `EndOfInput` каждый следующий вызов снова возвращает
    /// `EndOfInput`. После ошибки лексер не восстанавливается, и
    /// дальнейшие токены не имеют смысла.
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }

        let mut lexeme = Lexeme::new(self.max_lexeme_length);
        let mut state = State::Start;
        loop {
            match self.step(state, &mut lexeme) {
                Ok(Step::Next(next)) => state = next,
                Ok(Step::Emit(token)) => {
                    trace!("token {}", token);
                    return Ok(token);
                }
                Err(err) => {
                    debug!("lexing failed in state {:?}: {}", state, err);
                    return Err(err);
                }
            }
        }
    }

    /// Возвращает следующий токен без его потребления
    pub fn peek_token(&mut self) -> Result<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.next_token()?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Возвращает все токены, включая завершающий `EndOfInput`
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_end = token.is_end_of_input();
            tokens.push(token);
            if is_end {
                break;
            }
        }

        Ok(tokens)
    }

    // === Переходы автомата ===

    fn step(&mut self, state: State, lexeme: &mut Lexeme) -> Result<Step> {
        match state {
            State::Start => self.start(lexeme),
            State::BareWord => self.bare_word(lexeme),
            State::InQuote { quote, return_to } => self.in_quote(quote, return_to, lexeme),
            State::Escape { quote, return_to } => self.escape(quote, return_to, lexeme),
            State::BracketListItem => self.bracket_list_item(lexeme),
            State::BracketListClose => self.bracket_list_close(lexeme),
            State::OperatorSymbol(token_type) => Ok(Step::Emit(lexeme.finish(token_type))),
            State::DoneEof => Ok(Step::Emit(Token::end_of_input(
                self.cursor.position().clone(),
            ))),
        }
    }

    fn start(&mut self, lexeme: &mut Lexeme) -> Result<Step> {
        let ch = match self.cursor.current() {
            Some(ch) => ch,
            None => return Ok(Step::Next(State::DoneEof)),
        };

        if is_whitespace(ch) {
            self.cursor.pull();
            return Ok(Step::Next(State::Start));
        }

        if ch == LEFT_SQUARE_BRACKET {
            debug!("bracket list opened at {}", self.cursor.position());
        }
        self.accept(ch, lexeme)?;
        let next = if ch == LEFT_SQUARE_BRACKET {
            State::BracketListItem
        } else if is_quote(ch) {
            State::InQuote {
                quote: ch,
                return_to: QuoteReturn::BareWord,
            }
        } else if let Some(token_type) = TokenType::from_operator_symbol(ch) {
            State::OperatorSymbol(token_type)
        } else {
            State::BareWord
        };
        Ok(Step::Next(next))
    }

    fn bare_word(&mut self, lexeme: &mut Lexeme) -> Result<Step> {
        match self.cursor.current() {
            Some(ch) if is_quote(ch) => {
                self.accept(ch, lexeme)?;
                Ok(Step::Next(State::InQuote {
                    quote: ch,
                    return_to: QuoteReturn::BareWord,
                }))
            }
            Some(ch) if !is_operator_symbol(ch) && !is_whitespace(ch) => {
                self.accept(ch, lexeme)?;
                Ok(Step::Next(State::BareWord))
            }
            // Завершающий символ не потребляется
            _ => {
                let token_type = keywords::classify(lexeme.as_str());
                Ok(Step::Emit(lexeme.finish(token_type)))
            }
        }
    }

    fn in_quote(&mut self, quote: char, return_to: QuoteReturn, lexeme: &mut Lexeme) -> Result<Step> {
        let ch = match self.cursor.current() {
            Some(ch) => ch,
            None => {
                return Err(self.error(
                    LexicalErrorKind::UnterminatedQuote,
                    format!("Symbol {} expected", quote_name(quote)),
                    lexeme,
                ))
            }
        };

        self.accept(ch, lexeme)?;
        let next = if ch == BACKSLASH {
            State::Escape { quote, return_to }
        } else if ch == quote {
            match return_to {
                QuoteReturn::BareWord => State::BareWord,
                QuoteReturn::BracketList => State::BracketListClose,
            }
        } else {
            State::InQuote { quote, return_to }
        };
        Ok(Step::Next(next))
    }

    fn escape(&mut self, quote: char, return_to: QuoteReturn, lexeme: &mut Lexeme) -> Result<Step> {
        match self.cursor.current() {
            Some(ch) => {
                self.accept(ch, lexeme)?;
                Ok(Step::Next(State::InQuote { quote, return_to }))
            }
            None => Err(self.error(
                LexicalErrorKind::UnterminatedEscape,
                "Symbol EOF not expected",
                lexeme,
            )),
        }
    }

    fn bracket_list_item(&mut self, lexeme: &mut Lexeme) -> Result<Step> {
        match self.cursor.current() {
            Some(ch) if is_quote(ch) => {
                self.accept(ch, lexeme)?;
                Ok(Step::Next(State::InQuote {
                    quote: ch,
                    return_to: QuoteReturn::BracketList,
                }))
            }
            // `]` и конец ввода разбираются так же, как после элемента
            None | Some(RIGHT_SQUARE_BRACKET) => self.bracket_list_close(lexeme),
            Some(ch) => {
                self.accept(ch, lexeme)?;
                Ok(Step::Next(State::BracketListItem))
            }
        }
    }

    fn bracket_list_close(&mut self, lexeme: &mut Lexeme) -> Result<Step> {
        match self.cursor.current() {
            Some(RIGHT_SQUARE_BRACKET) => {
                self.accept(RIGHT_SQUARE_BRACKET, lexeme)?;
                Ok(Step::Next(State::BareWord))
            }
            Some(LIST_SEPARATOR) => {
                self.accept(LIST_SEPARATOR, lexeme)?;
                Ok(Step::Next(State::BracketListItem))
            }
            found => {
                let found = match found {
                    Some(ch) => format!("{:?}", ch),
                    None => "end of input".to_string(),
                };
                Err(self.error(
                    LexicalErrorKind::ExpectedClosingBracket,
                    format!("Symbol ] expected, found {}", found),
                    lexeme,
                ))
            }
        }
    }

    // === Вспомогательные методы ===

    /// Добавляет текущий символ к лексеме и потребляет его
    fn accept(&mut self, ch: char, lexeme: &mut Lexeme) -> Result<()> {
        lexeme.push(ch, self.cursor.position())?;
        self.cursor.pull();
        Ok(())
    }

    fn error(&self, kind: LexicalErrorKind, message: impl Into<String>, lexeme: &Lexeme) -> Error {
        Error::lexical(
            kind,
            message,
            lexeme.as_str(),
            self.cursor.position().clone(),
        )
    }
}

impl<S: SymbolSource> Iterator for Lexer<S> {
    type Item = Result<Token>;

    /// Выдает токены до конца ввода; `EndOfInput` не выдается,
    /// ошибка выдается один раз
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_end_of_input() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}

fn quote_name(quote: char) -> &'static str {
    if quote == DOUBLE_QUOTE {
        "double quote"
    } else {
        "single quote"
    }
}
