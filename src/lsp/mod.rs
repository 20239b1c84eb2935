//! minic Language Server Protocol (LSP) implementation
//!
//! Provides IDE features:
//! - Real-time diagnostics (syntax and semantic passes)
//! - Hover information (lexeme and token kind)
//! - Go-to-definition (first declaration of a name)
//! - Completions (keywords and declared names)

pub mod backend;
pub mod diagnostics;

pub use backend::MinicLanguageServer;
