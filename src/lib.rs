#![forbid(unsafe_code)]
//! minic: an instructional analyzer for a small C-like language
//!
//! The crate shows the classic compiler front-end stages over toy inputs: tokenizing, heuristic
//! syntax and semantic checks, and expression conversion to a tree or Polish notation. It ships
//! the frontend, a command-line driver and a language server.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups over the complete const tables in `minic_core` use
//!   `.expect("... info missing")`; a panic there is a bug in the tables, not bad input.

pub mod cli;
pub mod config;
pub mod frontend;
pub mod lsp;
pub mod version;

pub use frontend::checker;
pub use frontend::diagnostics;
pub use frontend::expr;
pub use frontend::lexer;
pub use frontend::semantics;

pub use config::ReportConfig;
pub use frontend::{Analysis, Passes, analyze_source};
