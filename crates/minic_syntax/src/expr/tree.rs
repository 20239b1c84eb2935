//! Binary expression trees.
//!
//! A left-associative chain such as `a + a + ... + a` nests as deep as it has operators, so no walk
//! over a tree recurses: every traversal below keeps its own stack on the heap, dropping included.

use std::fmt;

use serde::Serialize;

use super::ExprError;
use super::engine::Reducer;
use crate::lexer::Token;

/// A node of a binary expression tree.
///
/// Nodes own their children and are never mutated after construction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExprNode {
    /// An identifier or number.
    Leaf(String),
    /// An operator applied to two subtrees.
    Binary {
        op: String,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
}

impl ExprNode {
    pub fn leaf(lexeme: impl Into<String>) -> Self {
        ExprNode::Leaf(lexeme.into())
    }

    pub fn binary(op: impl Into<String>, left: ExprNode, right: ExprNode) -> Self {
        ExprNode::Binary {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Operator or operand lexeme stored at this node.
    pub fn label(&self) -> &str {
        match self {
            ExprNode::Leaf(lexeme) => lexeme,
            ExprNode::Binary { op, .. } => op,
        }
    }

    /// Left and right subtree of an operator node.
    pub fn children(&self) -> Option<(&ExprNode, &ExprNode)> {
        match self {
            ExprNode::Leaf(_) => None,
            ExprNode::Binary { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Labels in preorder (node, left subtree, right subtree).
    pub fn preorder(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            out.push(node.label());
            if let Some((left, right)) = node.children() {
                pending.push(right);
                pending.push(left);
            }
        }
        out
    }

    /// Number of levels; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Some((left, right)) = node.children() {
                pending.push((right, level + 1));
                pending.push((left, level + 1));
            }
        }
        deepest
    }

    /// Draw the tree top-down, one node per line, left child first.
    ///
    /// Each line is indented by its depth, so the drawing grows quadratically with the depth of
    /// the tree; callers drawing untrusted input should bound [`ExprNode::depth`] first.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        out.push_str(self.label());
        out.push('\n');

        // (node, indentation of its line, last child of its parent)
        let mut pending: Vec<(&ExprNode, String, bool)> = Vec::new();
        push_children(self, "", &mut pending);
        while let Some((node, prefix, last)) = pending.pop() {
            let (branch, indent) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
            out.push_str(&prefix);
            out.push_str(branch);
            out.push_str(node.label());
            out.push('\n');
            push_children(node, &format!("{prefix}{indent}"), &mut pending);
        }
        out
    }
}

fn push_children<'a>(node: &'a ExprNode, prefix: &str, pending: &mut Vec<(&'a ExprNode, String, bool)>) {
    if let Some((left, right)) = node.children() {
        pending.push((right, prefix.to_string(), true));
        pending.push((left, prefix.to_string(), false));
    }
}

/// Fully parenthesized infix form.
impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a ExprNode),
            Text(&'a str),
        }

        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(ExprNode::Leaf(lexeme)) => f.write_str(lexeme)?,
                Piece::Node(ExprNode::Binary { op, left, right }) => {
                    f.write_str("(")?;
                    pending.extend([
                        Piece::Text(")"),
                        Piece::Node(right),
                        Piece::Text(" "),
                        Piece::Text(op),
                        Piece::Text(" "),
                        Piece::Node(left),
                    ]);
                }
            }
        }
        Ok(())
    }
}

impl PartialEq for ExprNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a.children(), b.children()) {
                (None, None) => {}
                (Some((a_left, a_right)), Some((b_left, b_right))) => {
                    pending.push((a_right, b_right));
                    pending.push((a_left, b_left));
                }
                _ => return false,
            }
            if a.label() != b.label() {
                return false;
            }
        }
        true
    }
}

impl Eq for ExprNode {}

/// Moves subtrees onto a heap stack so freeing a deep tree does not recurse.
impl Drop for ExprNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut ExprNode, pending: &mut Vec<ExprNode>) {
    if let ExprNode::Binary { left, right, .. } = node {
        // Leaves free without recursing; only operator subtrees are detached.
        for child in [left, right] {
            if child.children().is_some() {
                pending.push(std::mem::replace(child.as_mut(), ExprNode::Leaf(String::new())));
            }
        }
    }
}

/// Pushes leaves and combines the top two subtrees on every reduction.
#[derive(Debug, Default)]
pub(super) struct TreeBuilder {
    values: Vec<ExprNode>,
}

impl Reducer for TreeBuilder {
    type Output = Option<ExprNode>;

    fn operand(&mut self, token: &Token) {
        self.values.push(ExprNode::leaf(token.lexeme.as_str()));
    }

    fn reduce(&mut self, operator: &Token) -> Result<(), ExprError> {
        let (Some(right), Some(left)) = (self.values.pop(), self.values.pop()) else {
            return Err(ExprError::missing_operand(operator));
        };
        self.values
            .push(ExprNode::binary(operator.lexeme.as_str(), left, right));
        Ok(())
    }

    fn finish(mut self) -> Result<Option<ExprNode>, ExprError> {
        match self.values.len() {
            0 | 1 => Ok(self.values.pop()),
            count => Err(ExprError::DanglingOperands { count }),
        }
    }
}
