//! This crate exposes a Binary Search Tree (BST) that holds a set of values
//! and only balances itself when asked to, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Balancing on request
//!
//! [`Tree`] is built balanced, but inserting and deleting never rotates
//! anything so the tree can drift out of shape. [`Tree::is_balanced`] reports
//! whether every node's subtrees differ in height by at most one, and
//! [`Tree::rebalance`] rebuilds the whole tree from its sorted values.
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::from_values([7, 3, 9, 1, 5, 3, 7, 2, 8]);
//! print!("{}", tree);
//! // │       ┌── 9
//! // │   ┌── 8
//! // │   │   └── 7
//! // └── 5
//! //     │   ┌── 3
//! //     └── 2
//! //         └── 1
//!
//! assert_eq!(tree.depth(&5), Some(0));
//! assert_eq!(tree.height(&5), Some(2));
//!
//! tree.insert(4);
//! tree.delete(&8);
//! assert_eq!(tree.in_order_for_each(|n| *n.value()), [1, 2, 3, 4, 5, 7, 9]);
//! ```
//!
//! The crate logs through the [`log`] facade: rebuilds at `debug`, ignored
//! inserts and deletes at `trace`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod pretty;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::Tree;
