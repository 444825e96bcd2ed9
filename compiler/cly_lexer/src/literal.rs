//! Decoding literal lexemes into values.
//!
//! The scanner has already validated these lexemes; decoding only runs on
//! tokens of kind `Number` or `String`.

/// Value of a `Number` lexeme.
///
/// Returns `None` only for text the scanner would not have produced as a
/// number.
pub fn parse_number(lexeme: &str) -> Option<f64> {
    lexeme.parse().ok()
}

/// Contents of a `String` lexeme with the quotes removed and escapes resolved.
///
/// An unknown escape keeps the escaped character and drops the backslash;
/// the scanner has already warned about it.
pub fn unescape_string(lexeme: &str) -> String {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    if !inner.contains('\\') {
        return inner.to_string();
    }

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}
