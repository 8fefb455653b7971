//! Источники символов для лексического анализатора
//!
//! Лексер читает ввод по одному символу через [`SymbolSource`] и держит
//! ровно один прочитанный, но еще не потребленный символ в [`Cursor`].

use crate::lexer::token::Position;
use std::iter::Fuse;

/// Источник символов
///
/// `None` обозначает конец ввода. После первого `None` источник обязан
/// возвращать `None` при каждом следующем вызове.
pub trait SymbolSource {
    fn next_symbol(&mut self) -> Option<char>;
}

impl<S: SymbolSource + ?Sized> SymbolSource for Box<S> {
    fn next_symbol(&mut self) -> Option<char> {
        (**self).next_symbol()
    }
}

/// Источник по умолчанию: текст в памяти
#[derive(Debug, Clone)]
pub struct ContentReader {
    input: Vec<char>,
    position: usize,
}

impl ContentReader {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Количество еще не прочитанных символов
    pub fn remaining(&self) -> usize {
        self.input.len() - self.position
    }
}

impl SymbolSource for ContentReader {
    fn next_symbol(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(ch)
    }
}

impl From<&str> for ContentReader {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

/// Адаптер для произвольного итератора символов
pub struct CharSource<I: Iterator<Item = char>> {
    chars: Fuse<I>,
}

impl<I: Iterator<Item = char>> CharSource<I> {
    pub fn new<T>(chars: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            chars: chars.into_iter().fuse(),
        }
    }
}

impl<I: Iterator<Item = char>> SymbolSource for CharSource<I> {
    fn next_symbol(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// Курсор с одним символом предпросмотра
///
/// Хранит текущий символ и его позицию. `pull` потребляет текущий символ
/// и читает следующий; на конце ввода позиция больше не сдвигается.
pub struct Cursor<S: SymbolSource> {
    source: S,
    current: Option<char>,
    position: Position,
}

impl<S: SymbolSource> Cursor<S> {
    pub fn new(mut source: S) -> Self {
        let current = source.next_symbol();
        Self {
            source,
            current,
            position: Position::start(),
        }
    }

    /// Текущий непотребленный символ
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Позиция текущего символа
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Потребляет текущий символ и возвращает его
    pub fn pull(&mut self) -> Option<char> {
        let consumed = self.current?;
        self.position.advance(consumed);
        self.current = self.source.next_symbol();
        Some(consumed)
    }
}
