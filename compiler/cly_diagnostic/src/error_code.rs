//! Error codes for every diagnostic the front-end can produce.
//!
//! Format: E#### where the first digit is the phase:
//! - E0xxx: scanner
//! - E1xxx: parser

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner
    /// Unterminated string literal
    E0001,
    /// Unexpected character
    E0002,
    /// Malformed number literal
    E0003,
    /// Unterminated block comment
    E0004,
    /// Unknown escape sequence (warning)
    E0005,

    // Parser
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Invalid assignment target
    E1004,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }

    /// One-line explanation shown by `cly explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "a string literal was opened with `\"` but the unit ended before the closing quote"
            }
            ErrorCode::E0002 => "a character that cannot start any token was found",
            ErrorCode::E0003 => {
                "a number literal has more than one decimal point, or a point with no digits after it"
            }
            ErrorCode::E0004 => "a `/*` comment was never closed with `*/`",
            ErrorCode::E0005 => {
                "a string literal contains a backslash escape other than \\\" \\\\ \\n \\t \\r \\0"
            }
            ErrorCode::E1001 => "the parser found a token that no rule expects at this point",
            ErrorCode::E1002 => "an expression was required but something else was found",
            ErrorCode::E1003 => "a `(` was opened but not closed with `)`",
            ErrorCode::E1004 => "the left side of `=` must be a plain identifier",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
