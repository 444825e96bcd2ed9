//! The finite-state scanner.
//!
//! Each call to [`Scanner::next_token`] runs the automaton from `Start` until
//! it reaches `Done` with a token kind. Whitespace and comments loop back to
//! `Start` and only leave a trace in the next token's flags and
//! `leading_trivia`.
//!
//! ```text
//! Start ──letter/_──> InIdent ────> Done(Identifier | Keyword)
//!   │ ──digit───────> InNumber ───> Done(Number | Error)
//!   │ ──"───────────> InString ───> Done(String | Error)
//!   │ ──symbol──────> InOperator ─> Done(Operator | Error)
//!   │ ──// or /*────> InComment ──> Start | Done(Error)
//!   └ ──( ) ; , EOF, other ───────> Done(..)
//! ```

use cly_diagnostic::{
    malformed_number, unexpected_character, unknown_escape, unterminated_comment,
    unterminated_string, Diagnostic, DiagnosticSink,
};
use cly_ir::{Op, Punct, Span, Token, TokenFlags, TokenKind};
use tracing::trace;

use crate::keywords;
use crate::state::{LexMode, Position, ScannerState};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum CommentKind {
    Line,
    Block,
}

/// Automaton states.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum ScanState {
    Start,
    InIdent,
    InNumber,
    InOperator,
    InString,
    InComment(CommentKind),
    Done(TokenKind),
}

/// Bookkeeping for the token being scanned.
struct Pending {
    trivia_start: Position,
    /// Where the token proper begins; set when `Start` hands off.
    token_start: Position,
    /// Where the last comment opened, in case it never closes.
    comment_start: Position,
    flags: TokenFlags,
}

impl Pending {
    fn new(at: Position, first_token: bool) -> Self {
        let flags = if first_token {
            TokenFlags::LINE_START
        } else {
            TokenFlags::empty()
        };
        Pending {
            trivia_start: at,
            token_start: at,
            comment_start: at,
            flags,
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "a compilation unit is far smaller than u32::MAX bytes"
)]
#[inline]
fn to_u32(n: usize) -> u32 {
    n as u32
}

fn span_between(start: Position, end: usize) -> Span {
    Span::new(
        to_u32(start.offset),
        to_u32(end - start.offset),
        start.line,
        start.column,
    )
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scanner over one compilation unit.
///
/// Owns its source text, so a `Scanner` is `Send` and can be moved into a
/// worker. Once `Eof` has been produced, every later call returns that same
/// token.
pub struct Scanner {
    state: ScannerState,
    lookahead: Option<Token>,
    eof: Option<Token>,
    produced: usize,
    diagnostics: DiagnosticSink,
}

impl Scanner {
    pub fn new(text: impl Into<String>) -> Self {
        Scanner {
            state: ScannerState::new(text),
            lookahead: None,
            eof: None,
            produced: 0,
            diagnostics: DiagnosticSink::new(),
        }
    }

    /// Rebind to `text`, discarding the buffer, position, lookahead and
    /// diagnostics of the previous unit.
    pub fn reset(&mut self, text: impl Into<String>) {
        *self = Scanner::new(text);
    }

    /// Next token, consuming it.
    pub fn next_token(&mut self) -> Token {
        match self.lookahead.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    /// Next token without consuming it.
    ///
    /// Any diagnostic for the peeked token is recorded now, and only once.
    pub fn peek_token(&mut self) -> Token {
        if let Some(token) = &self.lookahead {
            return token.clone();
        }
        let token = self.scan();
        self.lookahead = Some(token.clone());
        token
    }

    /// Diagnostics recorded so far for this unit.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.all()
    }

    /// Remove and return the diagnostics recorded so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Lexical mode where the scanner last stopped.
    pub fn mode(&self) -> LexMode {
        self.state.mode
    }

    /// The unit being scanned.
    pub fn source(&self) -> &str {
        self.state.source()
    }

    fn scan(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }

        let recorded_before = self.diagnostics.len();
        let mut pending = Pending::new(self.state.position(), self.produced == 0);
        let mut state = ScanState::Start;
        let kind = loop {
            state = match state {
                ScanState::Start => self.start(&mut pending),
                ScanState::InIdent => self.ident(pending.token_start),
                ScanState::InNumber => self.number(pending.token_start),
                ScanState::InOperator => self.operator(pending.token_start),
                ScanState::InString => self.string(pending.token_start),
                ScanState::InComment(kind) => self.comment(kind, &mut pending),
                ScanState::Done(kind) => break kind,
            };
        };

        if self.diagnostics.len() > recorded_before {
            pending.flags |= TokenFlags::HAS_ERROR;
        }

        let start = pending.token_start;
        let token = Token::new(
            kind,
            self.state.slice_from(start),
            span_between(start, self.state.position().offset),
            to_u32(start.offset - pending.trivia_start.offset),
            pending.flags,
        );
        trace!(
            kind = %token.kind,
            lexeme = ?token.lexeme,
            span = ?token.span,
            "token"
        );

        self.produced += 1;
        if token.is_eof() {
            self.eof = Some(token.clone());
        }
        token
    }

    /// `Start`: skip trivia, then pick the state for the next character.
    fn start(&mut self, pending: &mut Pending) -> ScanState {
        let Some(c) = self.state.current() else {
            pending.token_start = self.state.position();
            return ScanState::Done(TokenKind::Eof);
        };

        match c {
            ' ' | '\t' | '\r' => {
                self.state.bump();
                pending.flags |= TokenFlags::SPACE_BEFORE;
                return ScanState::Start;
            }
            '\n' => {
                self.state.bump();
                pending.flags |= TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START;
                return ScanState::Start;
            }
            '/' if matches!(self.state.peek(), Some('/' | '*')) => {
                pending.comment_start = self.state.position();
                self.state.bump();
                let kind = match self.state.bump() {
                    Some('*') => CommentKind::Block,
                    _ => CommentKind::Line,
                };
                self.state.mode = LexMode::InComment;
                return ScanState::InComment(kind);
            }
            _ => {}
        }

        pending.token_start = self.state.position();
        match c {
            c if is_ident_start(c) => ScanState::InIdent,
            '0'..='9' => ScanState::InNumber,
            '"' => {
                self.state.bump();
                self.state.mode = LexMode::InString;
                ScanState::InString
            }
            '(' => self.punct(Punct::LParen),
            ')' => self.punct(Punct::RParen),
            ';' => self.punct(Punct::Semicolon),
            ',' => self.punct(Punct::Comma),
            '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' | '%' | '^' | '&' | '|' => {
                ScanState::InOperator
            }
            _ => self.unexpected(pending.token_start),
        }
    }

    fn punct(&mut self, punct: Punct) -> ScanState {
        self.state.bump();
        ScanState::Done(TokenKind::Punctuation(punct))
    }

    fn unexpected(&mut self, start: Position) -> ScanState {
        if let Some(c) = self.state.bump() {
            let span = span_between(start, self.state.position().offset);
            self.diagnostics.record(unexpected_character(span, c));
        }
        ScanState::Done(TokenKind::Error)
    }

    fn ident(&mut self, start: Position) -> ScanState {
        self.state.eat_while(is_ident_continue);
        let kind = match keywords::lookup(self.state.slice_from(start)) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier,
        };
        ScanState::Done(kind)
    }

    /// Digits with at most one `.`, which must be followed by a digit.
    ///
    /// A second dot, or a dot with no digit after it, turns the whole run
    /// (digits, dots and trailing identifier characters) into one error.
    fn number(&mut self, start: Position) -> ScanState {
        self.state.eat_while(|c| c.is_ascii_digit());

        let mut seen_dot = false;
        let mut malformed = false;
        while self.state.current() == Some('.') {
            let digit_follows = self.state.peek().is_some_and(|c| c.is_ascii_digit());
            if seen_dot || !digit_follows {
                malformed = true;
            }
            seen_dot = true;
            self.state.bump();
            self.state.eat_while(|c| c.is_ascii_digit());
        }

        if !malformed {
            return ScanState::Done(TokenKind::Number);
        }

        self.state.eat_while(|c| is_ident_continue(c) || c == '.');
        let span = span_between(start, self.state.position().offset);
        let diag = malformed_number(span, self.state.slice_from(start));
        self.diagnostics.record(diag);
        ScanState::Done(TokenKind::Error)
    }

    /// Maximal munch over the operator table.
    fn operator(&mut self, start: Position) -> ScanState {
        let Some(first) = self.state.bump() else {
            return ScanState::Done(TokenKind::Eof);
        };
        let second = self.state.current();

        let double = match (first, second) {
            ('=', Some('=')) => Some(Op::Equal),
            ('!', Some('=')) => Some(Op::NotEqual),
            ('<', Some('=')) => Some(Op::LessEqual),
            ('>', Some('=')) => Some(Op::GreaterEqual),
            ('&', Some('&')) => Some(Op::AndAnd),
            ('|', Some('|')) => Some(Op::OrOr),
            _ => None,
        };
        if let Some(op) = double {
            self.state.bump();
            return ScanState::Done(TokenKind::Operator(op));
        }

        let op = match first {
            '=' => Op::Assign,
            '!' => Op::Bang,
            '<' => Op::Less,
            '>' => Op::Greater,
            '+' => Op::Plus,
            '-' => Op::Minus,
            '*' => Op::Star,
            '/' => Op::Slash,
            '%' => Op::Percent,
            '^' => Op::Caret,
            other => {
                let span = span_between(start, self.state.position().offset);
                self.diagnostics.record(unexpected_character(span, other));
                return ScanState::Done(TokenKind::Error);
            }
        };
        ScanState::Done(TokenKind::Operator(op))
    }

    /// Body of a string literal; the opening quote is already consumed.
    fn string(&mut self, start: Position) -> ScanState {
        loop {
            match self.state.current() {
                None => {
                    let quote = Span::new(to_u32(start.offset), 1, start.line, start.column);
                    self.diagnostics.record(unterminated_string(quote));
                    return ScanState::Done(TokenKind::Error);
                }
                Some('"') => {
                    self.state.bump();
                    self.state.mode = LexMode::Default;
                    return ScanState::Done(TokenKind::String);
                }
                Some('\\') => {
                    let escape_start = self.state.position();
                    self.state.bump();
                    match self.state.bump() {
                        Some('"' | '\\' | 'n' | 't' | 'r' | '0') | None => {}
                        Some(other) => {
                            let span = span_between(escape_start, self.state.position().offset);
                            self.diagnostics.record(unknown_escape(span, other));
                        }
                    }
                }
                Some(_) => {
                    self.state.bump();
                }
            }
        }
    }

    /// Comment body; the opening `//` or `/*` is already consumed.
    fn comment(&mut self, kind: CommentKind, pending: &mut Pending) -> ScanState {
        match kind {
            CommentKind::Line => {
                self.state.eat_while(|c| c != '\n');
            }
            CommentKind::Block => loop {
                if self.state.eat_str("*/") {
                    break;
                }
                if self.state.bump().is_none() {
                    let open = pending.comment_start;
                    pending.token_start = open;
                    let opener = Span::new(to_u32(open.offset), 2, open.line, open.column);
                    self.diagnostics.record(unterminated_comment(opener));
                    return ScanState::Done(TokenKind::Error);
                }
            },
        }
        pending.flags |= TokenFlags::COMMENT_BEFORE;
        self.state.mode = LexMode::Default;
        ScanState::Start
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens up to and including the first `Eof`, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.eof.is_some() && self.lookahead.is_none() {
            return None;
        }
        Some(self.next_token())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
