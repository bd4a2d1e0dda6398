//! Coalescing of design-change notifications into overlay regenerations.
//!
//! Time is injected: hosts drive [`Debouncer`] with their own clock, so the scheduler runs the
//! same under a UI event loop, a test, or a CLI.

pub(crate) mod debounce;
pub(crate) mod suppress;
