//! # strip-core
//!
//! Line-oriented stripping of source files for public distribution.
//!
//! A source tree that carries debugging aids, test-only code and
//! compatibility shims can mark those regions inline; this crate removes
//! them, producing the reduced file that outsiders should see. The scanner
//! is a single forward pass over the lines of one file, with a small amount
//! of state and a mutable output buffer that later rules may rewrite
//! (brace collapsing, blank-line suppression).
//!
//! See the [`strip`] module for the marker vocabulary and entry points.

pub mod strip;
