//! JSON Emitter
//!
//! Machine-readable diagnostic output. One array per run, one object per
//! diagnostic, written by hand.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter};

pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Open the array. Call once before the first `emit`.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// Close the array.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = write!(self.writer, ",");
        }
        self.first = false;

        let span = diagnostic.span;
        let _ = writeln!(self.writer);
        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(self.writer, "    \"code\": \"{}\",", diagnostic.code.as_str());
        let _ = writeln!(self.writer, "    \"severity\": \"{}\",", diagnostic.severity);
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );
        let _ = writeln!(self.writer, "    \"line\": {},", span.line);
        let _ = writeln!(self.writer, "    \"column\": {},", span.column);
        let _ = writeln!(self.writer, "    \"start\": {},", span.start);
        let _ = writeln!(self.writer, "    \"length\": {},", span.len);

        let _ = write!(self.writer, "    \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = write!(self.writer, "\"{}\"{comma}", escape_json(note));
        }
        let _ = writeln!(self.writer, "]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}
