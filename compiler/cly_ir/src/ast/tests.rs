use pretty_assertions::assert_eq;

use super::*;

fn num(n: f64, start: u32) -> SyntaxNode {
    SyntaxNode::literal(LiteralValue::Number(n), Span::new(start, 1, 1, start + 1))
}

fn sample_assignment() -> SyntaxNode {
    // x = 1 + 2
    let sum = SyntaxNode::spanning(
        NodeKind::BinaryExpr(BinaryOp::Add),
        vec![num(1.0, 4), num(2.0, 8)],
        Span::new(6, 1, 1, 7),
    );
    let target = SyntaxNode::identifier("x", Span::new(0, 1, 1, 1));
    SyntaxNode::spanning(NodeKind::Assignment, vec![target, sum], Span::new(2, 1, 1, 3))
}

#[test]
fn spanning_covers_all_children() {
    let assign = sample_assignment();
    assert_eq!(assign.span, Span::new(0, 9, 1, 1));
    assert_eq!(assign.child(1).map(|n| n.span), Some(Span::new(4, 5, 1, 5)));
}

#[test]
fn sexpr_rendering() {
    let program = SyntaxNode::spanning(NodeKind::Program, vec![sample_assignment()], Span::DUMMY);
    assert_eq!(program.to_string(), "(program (assign x (+ 1 2)))");
}

#[test]
fn sexpr_renders_literals_and_placeholders() {
    let print = SyntaxNode::new(
        NodeKind::Print,
        vec![
            SyntaxNode::literal(LiteralValue::Str("hi\n".into()), Span::DUMMY),
            SyntaxNode::literal(LiteralValue::Bool(true), Span::DUMMY),
            SyntaxNode::literal(LiteralValue::Nil, Span::DUMMY),
            SyntaxNode::literal(LiteralValue::Number(2.5), Span::DUMMY),
            SyntaxNode::error(Span::DUMMY),
        ],
        Span::DUMMY,
    );
    assert_eq!(print.to_string(), r#"(print "hi\n" true nil 2.5 <error>)"#);
}

#[test]
fn payload_accessors() {
    let ident = SyntaxNode::identifier("count", Span::DUMMY);
    assert_eq!(ident.name(), Some("count"));
    assert_eq!(ident.value(), None);

    let lit = num(3.0, 0);
    assert_eq!(lit.name(), None);
    assert_eq!(lit.value(), Some(&LiteralValue::Number(3.0)));
}

#[test]
fn descendants_are_pre_order() {
    let kinds: Vec<NodeKind> = sample_assignment().descendants().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Assignment,
            NodeKind::Identifier,
            NodeKind::BinaryExpr(BinaryOp::Add),
            NodeKind::Literal,
            NodeKind::Literal,
        ]
    );
}

#[test]
fn contains_error_searches_subtree() {
    let clean = sample_assignment();
    assert!(!clean.contains_error());

    let partial = SyntaxNode::spanning(
        NodeKind::Assignment,
        vec![
            SyntaxNode::identifier("x", Span::new(0, 1, 1, 1)),
            SyntaxNode::error(Span::point(4, 1, 5)),
        ],
        Span::new(2, 1, 1, 3),
    );
    assert!(partial.contains_error());
    assert!(!partial.is_error());
}

fn nested_groups(depth: usize) -> SyntaxNode {
    let mut node = num(1.0, 0);
    for _ in 0..depth {
        node = SyntaxNode::new(NodeKind::Grouping, vec![node], Span::DUMMY);
    }
    node
}

#[test]
fn deep_tree_renders_and_drops() {
    let depth = 200_000;
    let tree = nested_groups(depth);
    let rendered = tree.to_string();
    assert_eq!(rendered.len(), "(group ".len() * depth + 1 + depth);
    assert!(rendered.starts_with("(group (group "));
    assert!(rendered.ends_with("1))"));
    drop(tree);
}

#[test]
fn drop_of_wide_tree_keeps_siblings_intact() {
    let program = SyntaxNode::new(
        NodeKind::Program,
        vec![nested_groups(3), sample_assignment()],
        Span::DUMMY,
    );
    let copy = program.clone();
    drop(program);
    assert_eq!(copy.to_string(), "(program (group (group (group 1))) (assign x (+ 1 2)))");
}
