//! Operator table.
//!
//! | Op            | Power | Assoc |
//! |---------------|-------|-------|
//! | `\|\|`        | 1     | left  |
//! | `&&`          | 2     | left  |
//! | `== !=`       | 3     | left  |
//! | `< <= > >=`   | 4     | left  |
//! | `+ -`         | 5     | left  |
//! | `* / %`       | 6     | left  |
//! | `^`           | 7     | right |
//!
//! Prefix `-` and `!` bind tighter than all of these.

use cly_ir::{BinaryOp, Op, TokenKind, UnaryOp};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) enum Assoc {
    Left,
    Right,
}

/// A binary operator with its binding power.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) struct Binding {
    pub op: BinaryOp,
    pub power: u8,
    pub assoc: Assoc,
}

impl Binding {
    const fn left(op: BinaryOp, power: u8) -> Self {
        Binding {
            op,
            power,
            assoc: Assoc::Left,
        }
    }

    /// Minimum power for the right operand.
    #[inline]
    pub fn next_min_power(self) -> u8 {
        match self.assoc {
            Assoc::Left => self.power + 1,
            Assoc::Right => self.power,
        }
    }
}

pub(super) fn binary_binding(kind: TokenKind) -> Option<Binding> {
    let TokenKind::Operator(op) = kind else {
        return None;
    };
    let binding = match op {
        Op::OrOr => Binding::left(BinaryOp::Or, 1),
        Op::AndAnd => Binding::left(BinaryOp::And, 2),
        Op::Equal => Binding::left(BinaryOp::Eq, 3),
        Op::NotEqual => Binding::left(BinaryOp::NotEq, 3),
        Op::Less => Binding::left(BinaryOp::Lt, 4),
        Op::LessEqual => Binding::left(BinaryOp::LtEq, 4),
        Op::Greater => Binding::left(BinaryOp::Gt, 4),
        Op::GreaterEqual => Binding::left(BinaryOp::GtEq, 4),
        Op::Plus => Binding::left(BinaryOp::Add, 5),
        Op::Minus => Binding::left(BinaryOp::Sub, 5),
        Op::Star => Binding::left(BinaryOp::Mul, 6),
        Op::Slash => Binding::left(BinaryOp::Div, 6),
        Op::Percent => Binding::left(BinaryOp::Rem, 6),
        Op::Caret => Binding {
            op: BinaryOp::Pow,
            power: 7,
            assoc: Assoc::Right,
        },
        Op::Assign | Op::Bang => return None,
    };
    Some(binding)
}

pub(super) fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Operator(Op::Minus) => Some(UnaryOp::Neg),
        TokenKind::Operator(Op::Bang) => Some(UnaryOp::Not),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
