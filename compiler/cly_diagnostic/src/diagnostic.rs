//! Core diagnostic type and the constructors the scanner and parser use.

use std::fmt;

use cly_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A lexical or syntax problem with its location.
///
/// Built once with the `with_*` methods and never changed after it is
/// recorded.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be recorded or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    /// Additional context lines, rendered as `= note: ...`.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            span: Span::DUMMY,
            notes: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Copy of this diagnostic with its line moved down by `offset`.
    ///
    /// Used by callers that feed a file to the front-end one line at a time.
    pub fn with_line_offset(&self, offset: u32) -> Self {
        Diagnostic {
            span: self.span.with_line_offset(offset),
            ..self.clone()
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `line:column: severity[code]: message`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}[{}]: {}",
            self.span, self.severity, self.code, self.message
        )
    }
}

/// A `"` was opened and the unit ended first. `span` is the opening quote.
pub fn unterminated_string(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message("unterminated string literal")
        .with_span(span)
}

/// A character that starts no token.
pub fn unexpected_character(span: Span, ch: char) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message(format!("unexpected character `{}`", ch.escape_debug()))
        .with_span(span)
}

/// A numeral with a stray or repeated decimal point.
pub fn malformed_number(span: Span, lexeme: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0003)
        .with_message(format!("malformed number literal `{lexeme}`"))
        .with_span(span)
}

/// A `/*` with no `*/`. `span` is the opening `/*`.
pub fn unterminated_comment(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0004)
        .with_message("unterminated block comment")
        .with_span(span)
}

/// Unrecognised `\x` escape inside a string. Not fatal to the token.
pub fn unknown_escape(span: Span, ch: char) -> Diagnostic {
    Diagnostic::warning(ErrorCode::E0005)
        .with_message(format!(
            "unknown escape sequence `\\{}`",
            ch.escape_debug()
        ))
        .with_span(span)
        .with_note("the backslash is dropped and the character kept as written")
}

/// `expected <what>, found <found>`.
///
/// `found` is already quoted by the caller (`` `)` `` or `end of input`).
pub fn expected_found(span: Span, expected: &str, found: &str) -> Diagnostic {
    let code = if expected == "expression" {
        ErrorCode::E1002
    } else {
        ErrorCode::E1001
    };
    Diagnostic::error(code)
        .with_message(format!("expected {expected}, found {found}"))
        .with_span(span)
}

/// Missing `)`. `open` is where the matching `(` was.
///
/// The note names only the column when `open` is on the same line as
/// `span`, so it stays correct after [`Diagnostic::with_line_offset`].
pub fn unclosed_delimiter(span: Span, open: Span, found: &str) -> Diagnostic {
    let note = if open.line == span.line {
        format!("to match the `(` at column {}", open.column)
    } else {
        format!("to match the `(` at {open}")
    };
    Diagnostic::error(ErrorCode::E1003)
        .with_message(format!("expected `)`, found {found}"))
        .with_span(span)
        .with_note(note)
}

/// Left side of `=` is not an identifier.
pub fn invalid_assignment_target(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1004)
        .with_message("invalid assignment target")
        .with_span(span)
        .with_note("only a variable name can appear on the left of `=`")
}
