//! `cly explain`: describe a diagnostic code.

use cly_diagnostic::ErrorCode;

use crate::DriverError;

pub fn explain_error(code_str: &str) -> Result<String, DriverError> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| DriverError::UnknownCode(code_str.to_string()))?;

    let phase = if code.is_lexer_error() {
        "scanner"
    } else {
        "parser"
    };
    Ok(format!("{code} ({phase})\n{}", code.description()))
}
