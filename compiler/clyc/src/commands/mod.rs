//! Command implementations for the `cly` binary.
//!
//! Each command returns `Ok(true)` when the input had errors, so `main` can
//! pick the exit code.

mod explain;
mod lex;
mod parse;

pub use explain::explain_error;
pub use lex::{lex_file, render_tokens};
pub use parse::{parse_file, parse_source, render_reports};

/// Name shown in front of diagnostics for `path`.
fn origin_name(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}
