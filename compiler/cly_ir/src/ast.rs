//! Syntax tree.
//!
//! Every [`SyntaxNode`] owns its children outright; there is no arena and no
//! sharing between trees, so a finished tree can be handed to the caller and
//! outlive the scanner and parser that built it.

use std::fmt;

use crate::Span;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "^",
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// Value of a literal, decoded from its lexeme.
#[derive(Clone, PartialEq, Debug)]
pub enum LiteralValue {
    Number(f64),
    /// String contents with escapes resolved and quotes removed.
    Str(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Str(s) => write!(f, "{s:?}"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Nil => f.write_str("nil"),
        }
    }
}

/// Leaf data carried by a node.
#[derive(Clone, PartialEq, Debug)]
pub enum Payload {
    Literal(LiteralValue),
    Name(String),
}

/// Node kinds.
///
/// Child layout per kind:
///
/// | Kind                  | Children               |
/// |-----------------------|------------------------|
/// | `Program`             | statements             |
/// | `Assignment`, `Let`   | `[Identifier, value]`  |
/// | `ExpressionStatement` | `[expr]`               |
/// | `Print`               | arguments (one or more)|
/// | `BinaryExpr`          | `[lhs, rhs]`           |
/// | `UnaryExpr`           | `[operand]`            |
/// | `Grouping`            | `[inner]`              |
/// | leaves                | none                   |
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Program,
    Assignment,
    Let,
    ExpressionStatement,
    Print,
    BinaryExpr(BinaryOp),
    UnaryExpr(UnaryOp),
    Grouping,
    Literal,
    Identifier,
    /// Placeholder for a piece of syntax that failed to parse.
    Error,
}

/// A node of the syntax tree.
#[derive(Clone, PartialEq, Debug)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub children: Vec<SyntaxNode>,
    pub payload: Option<Payload>,
    pub span: Span,
}

impl SyntaxNode {
    /// Interior node. The span should already cover all children.
    pub fn new(kind: NodeKind, children: Vec<SyntaxNode>, span: Span) -> Self {
        SyntaxNode {
            kind,
            children,
            payload: None,
            span,
        }
    }

    /// Interior node whose span is the union of `span` and every child's span.
    pub fn spanning(kind: NodeKind, children: Vec<SyntaxNode>, span: Span) -> Self {
        let span = children
            .iter()
            .fold(span, |acc, child| acc.merge(child.span));
        SyntaxNode::new(kind, children, span)
    }

    pub fn literal(value: LiteralValue, span: Span) -> Self {
        SyntaxNode {
            kind: NodeKind::Literal,
            children: Vec::new(),
            payload: Some(Payload::Literal(value)),
            span,
        }
    }

    pub fn identifier(name: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            kind: NodeKind::Identifier,
            children: Vec::new(),
            payload: Some(Payload::Name(name.into())),
            span,
        }
    }

    pub fn error(span: Span) -> Self {
        SyntaxNode::new(NodeKind::Error, Vec::new(), span)
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == NodeKind::Error
    }

    /// Identifier name, if this is an identifier.
    pub fn name(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::Name(name)) => Some(name),
            _ => None,
        }
    }

    /// Literal value, if this is a literal.
    pub fn value(&self) -> Option<&LiteralValue> {
        match &self.payload {
            Some(Payload::Literal(value)) => Some(value),
            _ => None,
        }
    }

    /// Pre-order traversal of this node and all descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Whether any node in this subtree is an error placeholder.
    pub fn contains_error(&self) -> bool {
        self.descendants().any(SyntaxNode::is_error)
    }

    /// Head of an interior node's S-expression, `None` for leaves.
    fn sexpr_head(&self) -> Option<&'static str> {
        let head = match self.kind {
            NodeKind::Literal | NodeKind::Identifier | NodeKind::Error => return None,
            NodeKind::Program => "program",
            NodeKind::Assignment => "assign",
            NodeKind::Let => "let",
            NodeKind::ExpressionStatement => "expr",
            NodeKind::Print => "print",
            NodeKind::BinaryExpr(op) => op.as_symbol(),
            NodeKind::UnaryExpr(op) => op.as_symbol(),
            NodeKind::Grouping => "group",
        };
        Some(head)
    }

    fn write_leaf(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Literal => match self.value() {
                Some(value) => write!(f, "{value}"),
                None => f.write_str("<literal>"),
            },
            NodeKind::Identifier => f.write_str(self.name().unwrap_or("<ident>")),
            _ => f.write_str("<error>"),
        }
    }

    /// Writes with an explicit work stack, so tree depth is not bounded by
    /// the call stack.
    fn write_sexpr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Node(&'a SyntaxNode),
            Text(&'static str),
        }

        let mut stack = vec![Step::Node(self)];
        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Step::Node(node) => node,
            };
            let Some(head) = node.sexpr_head() else {
                node.write_leaf(f)?;
                continue;
            };
            write!(f, "({head}")?;
            stack.push(Step::Text(")"));
            for child in node.children.iter().rev() {
                stack.push(Step::Node(child));
                stack.push(Step::Text(" "));
            }
        }
        Ok(())
    }
}

/// Renders the tree as an S-expression, e.g. `(program (assign x (+ 1 2)))`.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sexpr(f)
    }
}

/// Tears the tree down iteratively; the derived drop would recurse once
/// per nesting level.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        if self.children.iter().all(|child| child.children.is_empty()) {
            return;
        }
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Iterator returned by [`SyntaxNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests;
