//! Canonical vocabulary for the minic analyzer.
//!
//! This crate is intentionally tiny and dependency-free. It holds the compile-time tables that every
//! analysis stage agrees on: the reserved words, the expression operators with their precedence, the
//! delimiter set, and the comment markers.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, no token or diagnostic types.
//! - The tables are fixed at compile time; there is no runtime configuration of the language.

pub mod lang;
