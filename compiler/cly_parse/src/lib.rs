//! Recursive descent parser for Cly.
//!
//! The parser pulls tokens from a [`Scanner`] as it goes and builds an owned
//! [`SyntaxNode`] tree. Syntax errors are recorded as diagnostics and parsing
//! continues after panic-mode recovery, so one unit can report several
//! problems and still yield a partial tree.

mod cursor;
mod grammar;
mod recovery;

use cly_diagnostic::{Diagnostic, DiagnosticSink};
use cly_ir::{Span, SyntaxNode, Token};
use cly_lexer::Scanner;
use tracing::debug;

use cursor::Cursor;

/// Where the parser is in its control loop.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParserState {
    /// Between statements.
    ExpectStatement,
    /// Inside a statement, no error seen yet.
    InExpression,
    /// A syntax error was recorded; skipping to the next boundary.
    Recovering,
    /// EOF reached.
    Done,
}

/// Result of parsing one unit.
#[derive(Clone, PartialEq, Debug)]
pub struct ParseOutput {
    /// `Program` node, or `None` when the unit had diagnostics and no
    /// statement could be salvaged.
    pub root: Option<SyntaxNode>,
    /// Scanner and parser diagnostics, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// Whether any error-severity diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Statements of the root program, empty when there is no root.
    pub fn statements(&self) -> &[SyntaxNode] {
        self.root
            .as_ref()
            .map(|root| root.children.as_slice())
            .unwrap_or_default()
    }
}

/// Parser for one unit at a time.
///
/// Call [`Parser::reset`] to reuse it for the next unit.
pub struct Parser {
    cursor: Cursor,
    diagnostics: DiagnosticSink,
    state: ParserState,
}

impl Parser {
    pub fn new(scanner: Scanner) -> Self {
        let mut parser = Parser {
            cursor: Cursor::new(scanner),
            diagnostics: DiagnosticSink::new(),
            state: ParserState::ExpectStatement,
        };
        parser.pull_scanner_diagnostics();
        parser
    }

    /// Rebind to `text`, clearing the scanner, lookahead and diagnostics.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.cursor.reset(text.into());
        self.diagnostics.clear();
        self.state = ParserState::ExpectStatement;
        self.pull_scanner_diagnostics();
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Parse the whole unit.
    pub fn parse(&mut self) -> ParseOutput {
        let program = self.parse_program();
        let diagnostics = self.diagnostics.take();
        debug!(
            statements = program.children.len(),
            diagnostics = diagnostics.len(),
            "parsed unit"
        );

        let root = if program.children.is_empty() && !diagnostics.is_empty() {
            None
        } else {
            Some(program)
        };
        ParseOutput { root, diagnostics }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &Token {
        self.cursor.current()
    }

    #[inline]
    fn is_recovering(&self) -> bool {
        self.state == ParserState::Recovering
    }

    /// Consume the current token, moving any scanner diagnostics it
    /// produced into the unit's sink.
    fn advance(&mut self) -> Token {
        let token = self.cursor.advance();
        self.pull_scanner_diagnostics();
        token
    }

    fn pull_scanner_diagnostics(&mut self) {
        let found = self.cursor.take_scanner_diagnostics();
        self.diagnostics.extend(found);
    }

    /// Zero-width span at the start of the current token.
    fn here(&self) -> Span {
        let span = self.cursor.current_span();
        Span::point(span.start, span.line, span.column)
    }

    // Error reporting

    /// Record `diagnostic` unless already recovering.
    fn report(&mut self, diagnostic: Diagnostic) {
        if !self.is_recovering() {
            self.diagnostics.record(diagnostic);
        }
    }

    /// Record `diagnostic` and switch to recovery.
    fn fail(&mut self, diagnostic: Diagnostic) {
        self.report(diagnostic);
        self.state = ParserState::Recovering;
    }

    /// Report that the current token is not `expected`.
    ///
    /// An `Error` token already has its lexical diagnostic, so it only
    /// switches to recovery.
    fn expected(&mut self, expected: &str) {
        let token = self.current();
        if token.kind == cly_ir::TokenKind::Error {
            self.state = ParserState::Recovering;
            return;
        }
        let diagnostic = cly_diagnostic::expected_found(token.span, expected, &token.describe());
        self.fail(diagnostic);
    }
}

/// Parse `text` as a single unit.
pub fn parse(text: &str) -> ParseOutput {
    Parser::new(Scanner::new(text)).parse()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
