//! Diagnostics for the Cly front-end.
//!
//! Lexical and syntax problems are data, not control flow: the scanner and
//! parser build [`Diagnostic`] values and append them to a [`DiagnosticSink`]
//! in the order they are discovered. Rendering for humans or tools is done by
//! the [`emitter`] module on the driver side.

mod diagnostic;
pub mod emitter;
mod error_code;
mod sink;

pub use diagnostic::{
    expected_found, invalid_assignment_target, malformed_number, unclosed_delimiter,
    unexpected_character, unknown_escape, unterminated_comment, unterminated_string, Diagnostic,
    Severity,
};
pub use error_code::ErrorCode;
pub use sink::DiagnosticSink;
