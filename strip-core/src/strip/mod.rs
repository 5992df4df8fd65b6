//! The stripping engine.
//!
//! Three families of constructs are removed from input files:
//!
//! * **Labeled regions** — blocks delimited by this tool's own markers,
//!   e.g. `#ifndef __STRIP__ /* See strip.py */` ... `#endif /* See
//!   strip.py */`. An `#ifndef` form drops its body, an `#ifdef` form keeps
//!   the body and drops only the marker lines, and an `#else /* See
//!   strip.py */` midpoint flips a dropping region into a keeping one.
//!   Openers suffixed with `--alt` inside the comment behave the same,
//!   except in alternate-output mode where they are ordinary text.
//! * **Trace and test-hook calls** — lines holding a freeze call
//!   (`tt_freeze();`), a record call (`tt_record(...)` through
//!   `tt_record4(...)`, including multi-line continuations), or a
//!   test-logging call (`UNIT_LOG(...)`, `UNIT_HOOK(...)`). A record call
//!   that is the sole statement of a braceless construct takes the
//!   construct's header line with it.
//! * **Conditional regions** — `#ifdef __UNIT_TEST__` and
//!   `#if LINUX_VERSION_CODE` blocks, whose default branch is dropped and
//!   whose `#else` branch, if any, is kept.
//!
//! Alternate-output mode produces a file intended for building outside the
//! public tree: test-only and version-gated constructs pass through
//! untouched, as do the `--alt` labeled markers.
//!
//! The marker vocabulary above is the default; see [`rules::StripRules`]
//! for substituting a different one.
//!
//! After any deletion inside a brace-delimited block, the closing line
//! re-examines the block: a block left with a single statement loses its
//! braces, and a block left with none is reported as a [`report::Diagnostic`].

pub mod buffer;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod text;

pub use report::{Diagnostic, DiagnosticKind, ScanReport};
pub use rules::{CallSpec, MarkerSpec, StripRules, DEFAULT_RULES};
pub use scanner::{strip_file, strip_source, Scanner};
