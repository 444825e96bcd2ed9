//! Stack growth guard for deeply nested source.
//!
//! The parser recurses once per nesting level (`((((1))))`, `- - - x`,
//! right-associative `^` chains). Input is untrusted, so every recursive
//! grammar rule runs under [`ensure_sufficient_stack`], which grows the stack
//! on native targets instead of overflowing.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn parse_unary(&mut self) -> SyntaxNode {
///     ensure_sufficient_stack(|| self.parse_unary_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
