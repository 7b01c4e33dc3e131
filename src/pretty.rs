//! Text drawings of a tree's shape, mostly for debugging.
//!
//! The tree is drawn sideways: the right subtree above a node, the node itself,
//! then the left subtree below it. Reading the values top to bottom gives them
//! largest first.
//!
//! ```
//! use bst::{pretty, Tree};
//!
//! let tree = Tree::from_values([1, 2, 3]);
//!
//! assert_eq!(
//!     pretty::render(tree.root()),
//!     "│   ┌── 3\n└── 2\n    └── 1\n",
//! );
//! ```

use std::fmt;

use crate::node::Node;

/// Draws the subtree rooted at `node`. An empty subtree draws as nothing.
///
/// If a value's `Display` impl returns an error the drawing stops there and
/// only the lines written so far are returned. Debug builds panic instead.
pub fn render<T>(node: Option<&Node<T>>) -> String
where
    T: fmt::Display,
{
    let mut out = String::new();
    // Writing into a `String` can't fail, only a value's `Display` can.
    let result = write_tree(&mut out, node, "", true);
    debug_assert!(result.is_ok(), "failed to display a value in the tree");
    out
}

/// Writes the drawing of the subtree rooted at `node` into `out`, one line per
/// node. Every line starts with `prefix`. `is_left` says whether `node` is a
/// left child, which decides the glyphs used. The root is drawn as a left
/// child.
pub fn write_tree<W, T>(out: &mut W, node: Option<&Node<T>>, prefix: &str, is_left: bool) -> fmt::Result
where
    W: fmt::Write,
    T: fmt::Display,
{
    let Some(node) = node else {
        return Ok(());
    };

    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_tree(out, Some(right), &prefix, false)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(out, "{}{}{}", prefix, branch, node.value())?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_tree(out, Some(left), &prefix, true)?;
    }

    Ok(())
}
