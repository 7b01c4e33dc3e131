//! Helpers shared by the tests in this crate.

use crate::{Node, Tree};


/// The values of the tree in sorted order.
pub(crate) fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.in_order_for_each(|n| n.value().clone())
}

/// Recomputes the height of every node from scratch and asserts it matches
/// the cached one. Returns the height of `node`, -1 when empty.
fn check_heights<T>(node: Option<&Node<T>>) -> isize {
    match node {
        None => -1,
        Some(n) => {
            let height = check_heights(n.left()).max(check_heights(n.right())) + 1;
            assert_eq!(n.height() as isize, height);
            height
        }
    }
}

/// Asserts every cached height in the tree is correct.
pub(crate) fn assert_heights_consistent<T>(tree: &Tree<T>) {
    check_heights(tree.root());
}
