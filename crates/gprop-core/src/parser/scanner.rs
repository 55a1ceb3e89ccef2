use crate::error::Position;
use std::iter::Peekable;
use std::str::Chars;

/// Character reader that tracks the 1-based line and column of the next
/// character.
pub(crate) struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Position of the next character to be read.
    pub(crate) fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub(crate) fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Skips whitespace other than line breaks.
    pub(crate) fn skip_blanks(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_whitespace() && c != '\n')
        {
            self.bump();
        }
    }
}
