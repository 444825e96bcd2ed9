//! Grammar productions.
//!
//! ```text
//! program     := ';'* (statement ';'+)* statement? EOF
//! statement   := 'let' IDENT '=' expression
//!              | 'print' expression (',' expression)*
//!              | expression ('=' expression)?
//! expression  := unary (BINOP expression)*
//! unary       := ('-' | '!') unary | primary
//! primary     := NUMBER | STRING | 'true' | 'false' | 'nil' | IDENT
//!              | '(' expression ')'
//! ```
//!
//! A line break before a token also ends a statement, so `;` is only needed
//! between statements on the same line.
//!
//! # Module Structure
//!
//! - `stmt.rs`: program loop, statements, terminators
//! - `expr.rs`: precedence climbing, unary and primary expressions
//! - `expr/operators.rs`: operator table

mod expr;
mod stmt;
