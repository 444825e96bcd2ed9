use cly_ir::Op;

use super::*;

#[test]
fn advance_walks_tokens_and_sticks_at_eof() {
    let mut cursor = Cursor::new(Scanner::new("a = 1"));
    assert!(cursor.check(TokenKind::Identifier));
    assert_eq!(cursor.advance().lexeme, "a");
    assert!(cursor.check(TokenKind::Operator(Op::Assign)));
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 3);

    assert!(cursor.advance().is_eof());
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 3);
}

#[test]
fn scanner_diagnostics_surface_as_tokens_are_reached() {
    let mut cursor = Cursor::new(Scanner::new("@ x \"open"));
    assert_eq!(cursor.take_scanner_diagnostics().len(), 1);
    cursor.advance();
    assert!(cursor.take_scanner_diagnostics().is_empty());
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Error);
    assert_eq!(cursor.take_scanner_diagnostics().len(), 1);
}

#[test]
fn reset_starts_over() {
    let mut cursor = Cursor::new(Scanner::new("@"));
    cursor.advance();
    cursor.reset("b".to_string());
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.current().lexeme, "b");
    assert!(cursor.take_scanner_diagnostics().is_empty());
    assert_eq!(cursor.current_span(), Span::new(0, 1, 1, 1));
}
