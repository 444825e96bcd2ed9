//! `cly lex`: dump the token stream of a whole file.

use std::io::{self, IsTerminal, Write};

use cly_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use cly_diagnostic::Diagnostic;

use crate::input::read_source;
use crate::DriverError;

use super::origin_name;

pub fn lex_file(path: &str) -> Result<bool, DriverError> {
    let source = read_source(path)?;
    let is_tty = io::stderr().is_terminal();
    let emitter = TerminalEmitter::with_color_mode(io::stderr().lock(), ColorMode::Auto, is_tty)
        .with_origin(origin_name(path));
    Ok(render_tokens(&source, io::stdout().lock(), emitter))
}

/// Write one token per line to `out` and the scanner's diagnostics to
/// `emitter`. Returns whether any diagnostic was an error.
pub fn render_tokens(source: &str, mut out: impl Write, mut emitter: impl DiagnosticEmitter) -> bool {
    let (tokens, diagnostics) = cly_lexer::lex(source);
    for token in &tokens {
        let _ = writeln!(out, "{token}");
    }
    let _ = out.flush();

    emitter.emit_all(&diagnostics);
    emitter.flush();
    diagnostics.iter().any(Diagnostic::is_error)
}
