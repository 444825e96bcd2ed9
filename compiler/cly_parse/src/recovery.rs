//! Error recovery for the parser.
//!
//! Panic mode: after a syntax error the parser stops building the current
//! statement and skips tokens until a statement boundary, then resumes.
//! Membership in a boundary set is a single bit test.

use cly_ir::{Punct, TokenKind};
use tracing::debug;

use crate::{Parser, ParserState};

/// Bit position of a token kind inside a [`TokenSet`].
///
/// Operators, keywords and punctuation each get one bit per tag.
const fn token_index(kind: TokenKind) -> u32 {
    match kind {
        TokenKind::Identifier => 0,
        TokenKind::Number => 1,
        TokenKind::String => 2,
        TokenKind::Operator(op) => 3 + op as u32,
        TokenKind::Keyword(kw) => 19 + kw as u32,
        TokenKind::Punctuation(p) => 24 + p as u32,
        TokenKind::Eof => 28,
        TokenKind::Error => 29,
    }
}

const _: () = assert!(
    token_index(TokenKind::Error) < 32,
    "TokenSet uses a u32 bitset; every token index must be < 32"
);

/// A set of token kinds, one bit each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TokenSet(u32);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1 << token_index(kind)))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1 << token_index(kind)) != 0
    }
}

/// Tokens that always end a statement.
pub(crate) const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Punctuation(Punct::Semicolon))
    .with(TokenKind::Eof);

impl Parser {
    /// Skip to the next statement boundary and leave recovery.
    ///
    /// Stops at a token in `recovery`, or at a token that starts a new line
    /// once at least one token of the failed statement has been consumed.
    /// Returns the number of tokens skipped.
    pub(crate) fn synchronize(&mut self, recovery: TokenSet, statement_start: usize) -> usize {
        let mut skipped = 0;
        loop {
            let token = self.cursor.current();
            if recovery.contains(token.kind) {
                break;
            }
            if token.starts_line() && self.cursor.position() > statement_start {
                break;
            }
            self.advance();
            skipped += 1;
        }
        debug!(skipped, "synchronized");
        self.state = ParserState::ExpectStatement;
        skipped
    }
}
