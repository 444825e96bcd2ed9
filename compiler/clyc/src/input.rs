//! Reading input and cutting it into compilation units.

use std::io::{self, Read};

use crate::config::UnitMode;
use crate::DriverError;

/// One compilation unit and where it sits in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit<'a> {
    pub text: &'a str,
    /// Lines before this unit. Added to every reported line number.
    pub line_offset: u32,
}

/// Read the file at `path`, or standard input for `-`.
pub fn read_source(path: &str) -> Result<String, DriverError> {
    let read_err = |source| DriverError::Read {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).map_err(read_err)?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

/// Cut `source` into units.
///
/// In line mode, blank lines (including whitespace-only ones) are skipped
/// and each remaining line is its own unit.
pub fn split_units(source: &str, mode: UnitMode) -> Vec<Unit<'_>> {
    match mode {
        UnitMode::File => vec![Unit {
            text: source,
            line_offset: 0,
        }],
        UnitMode::Line => source
            .lines()
            .zip(0u32..)
            .filter(|(line, _)| !line.trim().is_empty())
            .map(|(text, line_offset)| Unit { text, line_offset })
            .collect(),
    }
}
