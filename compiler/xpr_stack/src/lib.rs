//! Stack growth guard for deep recursion.
//!
//! The split parser recurses once per fragment and the evaluator once per
//! node, so an input such as `((((...))))` or `1+1+...+1` recurses in
//! proportion to its length. Every recursive step goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! letting the thread overflow.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new stack segment
//!   when the remaining space drops below the red zone.
//! - **WASM targets**: plain call, the runtime manages its own stack.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn fragment(&mut self, text: &str) -> ParseResult<Node> {
///     ensure_sufficient_stack(|| self.fragment_inner(text))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version, calls `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
