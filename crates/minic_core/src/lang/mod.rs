//! minic language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `DelimiterId`) and look up
//! spellings/metadata through the registry tables instead of comparing raw strings.
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod comments;
pub mod delimiters;
pub mod keywords;
pub mod operators;
