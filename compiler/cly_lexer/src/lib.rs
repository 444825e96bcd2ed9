//! Scanner for Cly.
//!
//! [`Scanner`] turns one compilation unit into tokens on demand. The parser
//! pulls them with [`Scanner::next_token`] and [`Scanner::peek_token`]; there
//! is no pre-pass over the whole unit. Lexical problems never stop the scan:
//! each one becomes an `Error` token (or, for unknown escapes, a warning on an
//! otherwise valid token) plus a diagnostic in the scanner's sink.
//!
//! [`literal`] decodes number and string lexemes into values for the tree.

mod keywords;
pub mod literal;
mod scanner;
mod state;

pub use scanner::Scanner;
pub use state::LexMode;

use cly_diagnostic::Diagnostic;
use cly_ir::Token;

/// Scan `text` to completion.
///
/// The returned tokens end with exactly one `Eof`. Diagnostics are in the
/// order they were found.
pub fn lex(text: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut scanner = Scanner::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, scanner.take_diagnostics())
}
