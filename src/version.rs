//! minic version information.
//!
//! This module exposes the toolchain version as a single constant so the CLI and the language
//! server report the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The minic version string (for example, `0.1.0`).
pub const MINIC_VERSION: &str = env!("CARGO_PKG_VERSION");
