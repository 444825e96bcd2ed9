use super::*;

#[test]
fn assignment_and_bang_are_not_binary() {
    assert_eq!(binary_binding(TokenKind::Operator(Op::Assign)), None);
    assert_eq!(binary_binding(TokenKind::Operator(Op::Bang)), None);
    assert_eq!(binary_binding(TokenKind::Identifier), None);
}

#[test]
fn powers_follow_the_table() {
    let power = |op| binary_binding(TokenKind::Operator(op)).map(|b| b.power);
    assert_eq!(power(Op::OrOr), Some(1));
    assert_eq!(power(Op::AndAnd), Some(2));
    assert_eq!(power(Op::NotEqual), Some(3));
    assert_eq!(power(Op::GreaterEqual), Some(4));
    assert_eq!(power(Op::Minus), Some(5));
    assert_eq!(power(Op::Percent), Some(6));
    assert_eq!(power(Op::Caret), Some(7));
}

#[test]
fn right_operand_threshold_encodes_associativity() {
    let plus = binary_binding(TokenKind::Operator(Op::Plus)).map(Binding::next_min_power);
    let caret = binary_binding(TokenKind::Operator(Op::Caret)).map(Binding::next_min_power);
    assert_eq!(plus, Some(6));
    assert_eq!(caret, Some(7));
}

#[test]
fn prefix_operators() {
    assert_eq!(unary_op(TokenKind::Operator(Op::Minus)), Some(UnaryOp::Neg));
    assert_eq!(unary_op(TokenKind::Operator(Op::Bang)), Some(UnaryOp::Not));
    assert_eq!(unary_op(TokenKind::Operator(Op::Plus)), None);
}
