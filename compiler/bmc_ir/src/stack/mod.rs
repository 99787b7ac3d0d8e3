//! Stack growth for recursion over deep trees.
//!
//! Comparison, deep cloning, pretty printing, `Debug` and the visitor all
//! recurse once per tree level. Front-ends unrolling loops produce operator
//! chains hundreds of thousands of levels deep, so each recursive entry
//! point runs inside [`ensure_sufficient_stack`].
//!
//! - **Red zone**: 100KB; below this much remaining stack, grow
//! - **Growth size**: 1MB per new segment
//!
//! On WASM targets this is a plain call.

/// Minimum stack space to keep available.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
