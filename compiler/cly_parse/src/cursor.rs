//! Token cursor over a live scanner.
//!
//! Holds exactly one scanned-but-unconsumed token. Everything after it is
//! still unscanned source, so diagnostics come out of the scanner in the
//! order the parser reaches the tokens that caused them.

use cly_diagnostic::Diagnostic;
use cly_ir::{Span, Token, TokenKind};
use cly_lexer::Scanner;
use tracing::trace;

/// `current` is the parser's one-token lookahead, the same token
/// [`Scanner::peek_token`] would return, so the grammar never peeks the
/// scanner directly.
pub(crate) struct Cursor {
    scanner: Scanner,
    current: Token,
    /// Tokens consumed so far in this unit.
    consumed: usize,
}

impl Cursor {
    pub fn new(mut scanner: Scanner) -> Self {
        let current = scanner.next_token();
        Cursor {
            scanner,
            current,
            consumed: 0,
        }
    }

    /// Rebind to a new unit. Nothing from the previous unit survives.
    pub fn reset(&mut self, text: String) {
        self.scanner.reset(text);
        self.current = self.scanner.next_token();
        self.consumed = 0;
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.consumed
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the current token and return it.
    ///
    /// At EOF this returns another copy of the EOF token; the scanner
    /// guarantees nothing follows it.
    pub fn advance(&mut self) -> Token {
        let next = self.scanner.next_token();
        let token = std::mem::replace(&mut self.current, next);
        trace!(
            pos = self.consumed,
            kind = %token.kind,
            span = ?token.span,
            "advance"
        );
        if !token.is_eof() {
            self.consumed += 1;
        }
        token
    }

    /// Diagnostics the scanner has recorded since the last call.
    pub fn take_scanner_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.scanner.take_diagnostics()
    }
}

#[cfg(test)]
mod tests;
