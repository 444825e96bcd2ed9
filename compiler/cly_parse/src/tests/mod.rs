//! Parser tests.
//!
//! - `statements`: statement forms and terminators
//! - `expressions`: precedence, associativity and literals
//! - `errors`: diagnostics, recovery and partial trees


use crate::{parse, ParseOutput};

/// Parse and render the tree, asserting the unit was clean.
fn sexpr(source: &str) -> String {
    let output = parse(source);
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.diagnostics
    );
    output.root.unwrap().to_string()
}

/// Parse and render whatever tree survived, plus the diagnostic messages.
fn sexpr_with_errors(source: &str) -> (String, Vec<String>) {
    let ParseOutput { root, diagnostics } = parse(source);
    let tree = root.map_or_else(|| "<none>".to_string(), |root| root.to_string());
    let messages = diagnostics.into_iter().map(|d| d.message).collect();
    (tree, messages)
}
