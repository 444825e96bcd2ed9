//! Running the front-end over many units.
//!
//! In parallel mode each unit gets its own parser on the rayon pool; in
//! sequential mode one parser is reset between units. Either way the
//! reports come back in input order with line numbers already shifted to
//! the unit's place in the input.

use cly_diagnostic::Diagnostic;
use cly_ir::SyntaxNode;
use cly_lexer::Scanner;
use cly_parse::{ParseOutput, Parser};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::input::Unit;

/// Parse result for one unit, positioned in the whole input.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitReport {
    /// 1-based line of the unit's first line.
    pub first_line: u32,
    pub root: Option<SyntaxNode>,
    pub diagnostics: Vec<Diagnostic>,
}

impl UnitReport {
    fn new(unit: &Unit<'_>, output: ParseOutput) -> Self {
        let diagnostics = output
            .diagnostics
            .iter()
            .map(|d| d.with_line_offset(unit.line_offset))
            .collect();
        UnitReport {
            first_line: unit.line_offset + 1,
            root: output.root,
            diagnostics,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

pub fn parse_units(units: &[Unit<'_>], parallel: bool) -> Vec<UnitReport> {
    debug!(units = units.len(), parallel, "parsing units");
    if parallel && units.len() > 1 {
        parse_parallel(units)
    } else {
        parse_sequential(units)
    }
}

fn parse_sequential(units: &[Unit<'_>]) -> Vec<UnitReport> {
    let mut parser = Parser::new(Scanner::new(""));
    units
        .iter()
        .map(|unit| {
            parser.reset(unit.text);
            UnitReport::new(unit, parser.parse())
        })
        .collect()
}

fn parse_parallel(units: &[Unit<'_>]) -> Vec<UnitReport> {
    match rayon::ThreadPoolBuilder::new().build() {
        Ok(pool) => pool.install(|| {
            units
                .par_iter()
                .map(|unit| UnitReport::new(unit, cly_parse::parse(unit.text)))
                .collect()
        }),
        Err(e) => {
            warn!("failed to create thread pool ({e}), parsing sequentially");
            parse_sequential(units)
        }
    }
}
