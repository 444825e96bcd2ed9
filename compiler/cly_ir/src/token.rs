//! Tokens produced by the scanner.

use std::fmt;

use bitflags::bitflags;

use crate::Span;

bitflags! {
    /// Trivia context preceding a token.
    ///
    /// The scanner skips whitespace and comments without emitting tokens;
    /// these flags keep enough of that layout for the parser to find
    /// statement boundaries on line breaks.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Spaces or tabs preceded this token.
        const SPACE_BEFORE = 1 << 0;
        /// A newline preceded this token.
        const NEWLINE_BEFORE = 1 << 1;
        /// A comment preceded this token.
        const COMMENT_BEFORE = 1 << 2;
        /// First token on its line (including the first token of the unit).
        const LINE_START = 1 << 3;
        /// Scanner reported a diagnostic while producing this token.
        const HAS_ERROR = 1 << 4;
    }
}

/// Operator tags.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Op {
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Bang,
    AndAnd,
    OrOr,
}

impl Op {
    /// Source spelling of the operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Op::Assign => "=",
            Op::Equal => "==",
            Op::NotEqual => "!=",
            Op::Less => "<",
            Op::LessEqual => "<=",
            Op::Greater => ">",
            Op::GreaterEqual => ">=",
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Percent => "%",
            Op::Caret => "^",
            Op::Bang => "!",
            Op::AndAnd => "&&",
            Op::OrOr => "||",
        }
    }
}

/// Reserved words.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Let,
    Print,
    True,
    False,
    Nil,
}

impl Keyword {
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Print => "print",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Nil => "nil",
        }
    }
}

/// Punctuation tags.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Punct {
    LParen,
    RParen,
    Semicolon,
    Comma,
}

impl Punct {
    pub const fn as_str(self) -> &'static str {
        match self {
            Punct::LParen => "(",
            Punct::RParen => ")",
            Punct::Semicolon => ";",
            Punct::Comma => ",",
        }
    }
}

/// Token kinds.
///
/// The coarse classes mirror the language's token taxonomy; operators,
/// keywords and punctuation carry a tag so the parser never re-inspects the
/// lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Operator(Op),
    Keyword(Keyword),
    Punctuation(Punct),
    Eof,
    /// Lexically invalid input. The scanner has already recorded why.
    Error,
}

impl TokenKind {
    /// Name of the token class, as used in the token dump.
    pub const fn class_name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator(_) => "OPERATOR",
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::Punctuation(_) => "PUNCTUATION",
            TokenKind::Eof => "EOF",
            TokenKind::Error => "ERROR",
        }
    }

    /// Human-readable name for "expected ..." messages.
    pub fn display_name(&self) -> String {
        match self {
            TokenKind::Identifier => "identifier".to_string(),
            TokenKind::Number => "number".to_string(),
            TokenKind::String => "string".to_string(),
            TokenKind::Operator(op) => format!("`{}`", op.as_str()),
            TokenKind::Keyword(kw) => format!("`{}`", kw.as_str()),
            TokenKind::Punctuation(p) => format!("`{}`", p.as_str()),
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Error => "invalid token".to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Operator(op) => write!(f, "OPERATOR({})", op.as_str()),
            TokenKind::Keyword(kw) => write!(f, "KEYWORD({})", kw.as_str()),
            TokenKind::Punctuation(p) => write!(f, "PUNCTUATION({})", p.as_str()),
            other => f.write_str(other.class_name()),
        }
    }
}

/// A scanned token.
///
/// `leading_trivia` is the byte length of the whitespace and comments the
/// scanner skipped immediately before `span.start`. Over one scan, the
/// trivia regions and token spans tile the input with no gaps.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    pub leading_trivia: u32,
    pub flags: TokenFlags,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        span: Span,
        leading_trivia: u32,
        flags: TokenFlags,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
            leading_trivia,
            flags,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Offset where the trivia preceding this token begins.
    #[inline]
    pub fn trivia_start(&self) -> u32 {
        self.span.start - self.leading_trivia
    }

    /// True when the token is the first one on a new line of the unit.
    #[inline]
    pub fn starts_line(&self) -> bool {
        self.flags.contains(TokenFlags::NEWLINE_BEFORE)
    }

    /// How the token is quoted in "found ..." messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof | TokenKind::Error => self.kind.display_name(),
            _ => format!("`{}`", self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{} @ {}", self.kind, self.span),
            _ => write!(f, "{} {:?} @ {}", self.kind, self.lexeme, self.span),
        }
    }
}
