//! `cly parse`: parse every unit and print trees and diagnostics.

use std::io::{self, IsTerminal, Write};

use cly_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use cly_diagnostic::Severity;

use crate::config::{DriverConfig, OutputFormat, ParseInvocation, UnitMode};
use crate::input::{read_source, split_units};
use crate::pipeline::{parse_units, UnitReport};
use crate::DriverError;

use super::origin_name;

pub fn parse_file(invocation: &ParseInvocation) -> Result<bool, DriverError> {
    let source = read_source(&invocation.path)?;
    let reports = parse_source(&source, &invocation.config);

    let is_tty = io::stderr().is_terminal();
    render_reports(
        &reports,
        &invocation.config,
        origin_name(&invocation.path),
        io::stdout().lock(),
        io::stderr().lock(),
        is_tty,
    );
    Ok(reports.iter().any(UnitReport::has_errors))
}

pub fn parse_source(source: &str, config: &DriverConfig) -> Vec<UnitReport> {
    let units = split_units(source, config.unit_mode);
    parse_units(&units, config.parallel)
}

/// Text format: trees on `out`, diagnostics and a summary on `err`.
/// JSON format: one diagnostic array on `out`, nothing on `err`.
pub fn render_reports(
    reports: &[UnitReport],
    config: &DriverConfig,
    origin: &str,
    mut out: impl Write,
    err: impl Write,
    is_tty: bool,
) {
    match config.format {
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(out);
            emitter.begin();
            for report in reports {
                emitter.emit_all(&report.diagnostics);
            }
            emitter.end();
            emitter.flush();
        }
        OutputFormat::Text => {
            for report in reports {
                let Some(root) = &report.root else {
                    continue;
                };
                let _ = match config.unit_mode {
                    UnitMode::Line => writeln!(out, "{}: {root}", report.first_line),
                    UnitMode::File => writeln!(out, "{root}"),
                };
            }
            let _ = out.flush();

            let mut emitter =
                TerminalEmitter::with_color_mode(err, config.color, is_tty).with_origin(origin);
            let (mut errors, mut warnings) = (0, 0);
            for report in reports {
                emitter.emit_all(&report.diagnostics);
                for diag in &report.diagnostics {
                    match diag.severity {
                        Severity::Error => errors += 1,
                        Severity::Warning => warnings += 1,
                    }
                }
            }
            emitter.emit_summary(errors, warnings);
            emitter.flush();
        }
    }
}
