//! Statement parsing.

use cly_diagnostic::invalid_assignment_target;
use cly_ir::{Keyword, NodeKind, Op, Punct, SyntaxNode, TokenKind};
use cly_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::recovery::STMT_BOUNDARY;
use crate::{Parser, ParserState};

const SEMICOLON: TokenKind = TokenKind::Punctuation(Punct::Semicolon);
const ASSIGN: TokenKind = TokenKind::Operator(Op::Assign);

impl Parser {
    /// Parse statements until EOF.
    ///
    /// Statements that are nothing but an error placeholder are dropped;
    /// partial statements with at least one real piece are kept.
    pub(crate) fn parse_program(&mut self) -> SyntaxNode {
        let program_start = self.here();
        let mut statements = Vec::new();

        loop {
            while self.cursor.check(SEMICOLON) {
                self.advance();
            }
            if self.cursor.is_at_end() {
                break;
            }

            self.state = ParserState::ExpectStatement;
            let statement_start = self.cursor.position();
            let statement = self.parse_statement();
            if !self.is_recovering() {
                self.expect_terminator();
            }
            if self.is_recovering() {
                self.synchronize(STMT_BOUNDARY, statement_start);
            }

            if statement.is_error() {
                trace!(span = ?statement.span, "dropped error statement");
            } else {
                statements.push(statement);
            }
        }

        self.state = ParserState::Done;
        SyntaxNode::spanning(NodeKind::Program, statements, program_start)
    }

    fn parse_statement(&mut self) -> SyntaxNode {
        self.state = ParserState::InExpression;
        match self.cursor.current_kind() {
            TokenKind::Keyword(Keyword::Let) => self.parse_let(),
            TokenKind::Keyword(Keyword::Print) => self.parse_print(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let IDENT = expression`
    fn parse_let(&mut self) -> SyntaxNode {
        let let_span = self.advance().span;

        if self.cursor.current_kind() != TokenKind::Identifier {
            self.expected("identifier");
            let missing = SyntaxNode::error(self.here());
            return SyntaxNode::spanning(NodeKind::Let, vec![missing.clone(), missing], let_span);
        }
        let name_token = self.advance();
        let name = SyntaxNode::identifier(name_token.lexeme, name_token.span);

        if !self.cursor.check(ASSIGN) {
            self.expected("`=`");
            let missing = SyntaxNode::error(self.here());
            return SyntaxNode::spanning(NodeKind::Let, vec![name, missing], let_span);
        }
        self.advance();

        let value = self.parse_expr();
        SyntaxNode::spanning(NodeKind::Let, vec![name, value], let_span)
    }

    /// `print expression (, expression)*`
    fn parse_print(&mut self) -> SyntaxNode {
        let print_span = self.advance().span;
        let mut args = vec![self.parse_expr()];
        while !self.is_recovering() && self.cursor.check(TokenKind::Punctuation(Punct::Comma)) {
            self.advance();
            args.push(self.parse_expr());
        }
        SyntaxNode::spanning(NodeKind::Print, args, print_span)
    }

    /// An expression on its own, or the target of an assignment.
    fn parse_expression_statement(&mut self) -> SyntaxNode {
        let expr = self.parse_expr();
        if expr.is_error() {
            return expr;
        }
        if !self.is_recovering() && self.cursor.check(ASSIGN) {
            return self.finish_assignment(expr);
        }
        let span = expr.span;
        SyntaxNode::new(NodeKind::ExpressionStatement, vec![expr], span)
    }

    /// `target = value`, with the `=` as the current token.
    ///
    /// Right-associative: `a = b = 1` assigns `b = 1` to `a`. A target that
    /// is not a plain identifier is reported but the value is still parsed.
    fn finish_assignment(&mut self, target: SyntaxNode) -> SyntaxNode {
        // Reported before `=` is consumed; advancing scans the next token.
        let target = if target.kind == NodeKind::Identifier {
            target
        } else {
            self.report(invalid_assignment_target(target.span));
            SyntaxNode::error(target.span)
        };
        let eq_span = self.advance().span;

        let mut value = self.parse_expr();
        if !self.is_recovering() && self.cursor.check(ASSIGN) {
            value = ensure_sufficient_stack(|| self.finish_assignment(value));
        }
        SyntaxNode::spanning(NodeKind::Assignment, vec![target, value], eq_span)
    }

    /// A statement must be followed by `;`, EOF or a line break.
    fn expect_terminator(&mut self) {
        let token = self.current();
        if STMT_BOUNDARY.contains(token.kind) || token.starts_line() {
            return;
        }
        self.expected("`;` or end of line");
    }
}
