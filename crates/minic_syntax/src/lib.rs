//! Syntax frontend for minic: tokenizer, heuristic syntax checker, expression engine.
//!
//! This crate is dependency-light and shared by the `minic` CLI and the language server.
//!
//! ## Notes
//! - Every pass takes the token slice explicitly; there is no shared "current tokens" state.
//! - Vocabulary identity (keywords/operators/delimiters) comes from `minic_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use minic_syntax::{checker, expr, lexer};
//!
//! let tokens = lexer::tokenize("a + b * c");
//! assert!(checker::check_syntax(&tokens).is_empty());
//! assert_eq!(expr::to_postfix(&tokens).unwrap(), "a b c * +");
//! ```
//!
//! ## See also
//! - `minic_core::lang` for the registry-backed vocabulary.

pub mod checker;
pub mod diagnostics;
pub mod expr;
pub mod lexer;
pub mod token_helpers;
