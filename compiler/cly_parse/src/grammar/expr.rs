//! Expression parsing.
//!
//! Binary operators use precedence climbing over the table in
//! `operators.rs`. Every recursive entry point goes through
//! `ensure_sufficient_stack`, so deeply nested input grows the stack
//! instead of overflowing it.
//!
//! After a syntax error each production returns what it has built so far,
//! with an `Error` node standing in for the missing piece.

mod operators;

use cly_diagnostic::unclosed_delimiter;
use cly_ir::{Keyword, LiteralValue, NodeKind, Punct, SyntaxNode, TokenKind};
use cly_lexer::literal;
use cly_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::Parser;

impl Parser {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> SyntaxNode {
        ensure_sufficient_stack(|| self.parse_binary(1))
    }

    /// Precedence climbing: consume operators whose power is at least
    /// `min_power`.
    fn parse_binary(&mut self, min_power: u8) -> SyntaxNode {
        let mut left = self.parse_unary();

        while !self.is_recovering() {
            let Some(binding) = operators::binary_binding(self.cursor.current_kind()) else {
                break;
            };
            if binding.power < min_power {
                break;
            }
            let op_span = self.advance().span;
            let right = ensure_sufficient_stack(|| self.parse_binary(binding.next_min_power()));
            left = SyntaxNode::spanning(NodeKind::BinaryExpr(binding.op), vec![left, right], op_span);
        }

        left
    }

    fn parse_unary(&mut self) -> SyntaxNode {
        if let Some(op) = operators::unary_op(self.cursor.current_kind()) {
            let op_span = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_unary());
            return SyntaxNode::spanning(NodeKind::UnaryExpr(op), vec![operand], op_span);
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> SyntaxNode {
        trace!(
            kind = %self.cursor.current_kind(),
            span = ?self.cursor.current_span(),
            "parse_primary"
        );

        let literal_value = match self.cursor.current_kind() {
            TokenKind::Keyword(Keyword::True) => Some(LiteralValue::Bool(true)),
            TokenKind::Keyword(Keyword::False) => Some(LiteralValue::Bool(false)),
            TokenKind::Keyword(Keyword::Nil) => Some(LiteralValue::Nil),
            TokenKind::Number => {
                let value = literal::parse_number(&self.current().lexeme).unwrap_or(f64::NAN);
                Some(LiteralValue::Number(value))
            }
            TokenKind::String => Some(LiteralValue::Str(literal::unescape_string(
                &self.current().lexeme,
            ))),
            _ => None,
        };
        if let Some(value) = literal_value {
            let token = self.advance();
            return SyntaxNode::literal(value, token.span);
        }

        match self.cursor.current_kind() {
            TokenKind::Identifier => {
                let token = self.advance();
                SyntaxNode::identifier(token.lexeme, token.span)
            }
            TokenKind::Punctuation(Punct::LParen) => self.parse_grouping(),
            _ => {
                let at = self.here();
                self.expected("expression");
                SyntaxNode::error(at)
            }
        }
    }

    /// `( expression )`, with `(` as the current token.
    fn parse_grouping(&mut self) -> SyntaxNode {
        let open = self.advance().span;
        let inner = self.parse_expr();
        if self.is_recovering() {
            return SyntaxNode::spanning(NodeKind::Grouping, vec![inner], open);
        }

        if self.cursor.check(TokenKind::Punctuation(Punct::RParen)) {
            let close = self.advance().span;
            return SyntaxNode::spanning(NodeKind::Grouping, vec![inner], open.merge(close));
        }

        let token = self.current();
        if token.kind == TokenKind::Error {
            self.expected("`)`");
        } else {
            let diagnostic = unclosed_delimiter(token.span, open, &token.describe());
            self.fail(diagnostic);
        }
        SyntaxNode::spanning(NodeKind::Grouping, vec![inner], open)
    }
}
