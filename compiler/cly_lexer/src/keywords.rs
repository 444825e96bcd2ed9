//! Reserved words.

use cly_ir::Keyword;

/// Classify an identifier-shaped lexeme.
///
/// Keywords are 3 to 5 ASCII letters; anything outside that range is
/// rejected before comparing.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Keyword> {
    if !(3..=5).contains(&text.len()) {
        return None;
    }
    match text {
        "let" => Some(Keyword::Let),
        "nil" => Some(Keyword::Nil),
        "true" => Some(Keyword::True),
        "false" => Some(Keyword::False),
        "print" => Some(Keyword::Print),
        _ => None,
    }
}
