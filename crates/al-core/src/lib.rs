//! # al-core
//!
//! Core error definitions and small text helpers shared by every crate in
//! the almanac workspace.
//!
//! Nothing here keeps global state: every crate above this one is a set of
//! pure functions over explicit inputs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Formatting and parsing helpers.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
