//! Cly IR - the data shared between scanner, parser and driver.
//!
//! - [`Span`]: byte extent plus 1-based line/column of a token or node
//! - [`Token`] and [`TokenKind`]: scanner output
//! - [`SyntaxNode`]: the owned, acyclic parse tree
//!
//! Nothing in this crate performs I/O or records diagnostics.

mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Descendants, LiteralValue, NodeKind, Payload, SyntaxNode, UnaryOp};
pub use span::Span;
pub use token::{Keyword, Op, Punct, Token, TokenFlags, TokenKind};
