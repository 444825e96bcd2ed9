//! Scanner state: the owned source buffer and the read position in it.
//!
//! Only the scanner's advance operations touch this value. Resetting the
//! scanner replaces it wholesale with [`ScannerState::new`].

/// Lexical mode at the point the scanner last stopped.
///
/// Between tokens the mode is `Default`. It is left at `InString` or
/// `InComment` only when the unit ended inside a string or block comment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LexMode {
    #[default]
    Default,
    InString,
    InComment,
}

/// A point in the unit: byte offset plus 1-based line and column.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

#[derive(Clone, Debug)]
pub(crate) struct ScannerState {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    pub mode: LexMode,
}

impl ScannerState {
    pub fn new(source: impl Into<String>) -> Self {
        ScannerState {
            source: source.into(),
            pos: 0,
            line: 1,
            column: 1,
            mode: LexMode::Default,
        }
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Character under the cursor, `None` at end of unit.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Character after the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next()?;
        chars.next()
    }

    /// Consume one character, keeping line and column in step.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.current().is_some_and(&mut pred) {
            self.bump();
        }
    }

    /// Consume `prefix` if the cursor is at it.
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if self.source[self.pos..].starts_with(prefix) {
            for _ in prefix.chars() {
                self.bump();
            }
            true
        } else {
            false
        }
    }

    /// Source text from `from` up to the cursor.
    #[inline]
    pub fn slice_from(&self, from: Position) -> &str {
        &self.source[from.offset..self.pos]
    }
}
