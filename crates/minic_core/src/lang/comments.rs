//! Comment and string markers.
//!
//! Comments come in four token shapes: a full line comment, a complete block comment, and the two
//! lone block markers produced when a block comment is left unterminated (`/*`) or closed without
//! an opener (`*/`).
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::comments::{self, CommentShape};
//!
//! assert_eq!(comments::shape_of("// note"), Some(CommentShape::Line));
//! assert_eq!(comments::shape_of("/* a */"), Some(CommentShape::Block));
//! assert_eq!(comments::shape_of("/*"), Some(CommentShape::BlockOpen));
//! assert_eq!(comments::shape_of("*/"), Some(CommentShape::BlockClose));
//! ```

/// Starts a comment running to the end of the line.
pub const LINE_COMMENT: &str = "//";

/// Opens a block comment.
pub const BLOCK_OPEN: &str = "/*";

/// Closes a block comment.
pub const BLOCK_CLOSE: &str = "*/";

/// Delimits a string literal on both ends.
pub const STRING_QUOTE: char = '"';

/// Shape of a comment lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentShape {
    /// `// ...`
    Line,
    /// `/* ... */` in a single lexeme.
    Block,
    /// A lone `/*` whose closer never appeared.
    BlockOpen,
    /// A lone `*/` without an opener.
    BlockClose,
}

/// Classify a comment lexeme; `None` if `lexeme` is not comment-shaped.
pub fn shape_of(lexeme: &str) -> Option<CommentShape> {
    if lexeme.starts_with(LINE_COMMENT) {
        Some(CommentShape::Line)
    } else if lexeme.starts_with(BLOCK_OPEN) {
        if lexeme.len() >= BLOCK_OPEN.len() + BLOCK_CLOSE.len() && lexeme.ends_with(BLOCK_CLOSE) {
            Some(CommentShape::Block)
        } else {
            Some(CommentShape::BlockOpen)
        }
    } else if lexeme.starts_with(BLOCK_CLOSE) {
        Some(CommentShape::BlockClose)
    } else {
        None
    }
}

/// Return `true` if `rest` begins with any comment marker.
pub fn starts_with_marker(rest: &str) -> bool {
    rest.starts_with(LINE_COMMENT) || rest.starts_with(BLOCK_OPEN) || rest.starts_with(BLOCK_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_markers_are_not_a_complete_block() {
        // `/*/` shares its `*` between opener and closer.
        assert_eq!(shape_of("/*/"), Some(CommentShape::BlockOpen));
        assert_eq!(shape_of("/**/"), Some(CommentShape::Block));
    }

    #[test]
    fn test_non_comments() {
        assert_eq!(shape_of("/"), None);
        assert_eq!(shape_of("*"), None);
        assert_eq!(shape_of("x"), None);
    }
}
