//! Property tests for the public `Tree` API, checked against `BTreeSet`.

use bst::{Node, Tree};

mod tree;

/// The values of the tree in sorted order.
fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.in_order_for_each(|n| n.value().clone())
}

/// Whether every cached height matches one recomputed from scratch.
fn heights_consistent<T>(tree: &Tree<T>) -> bool {
    fn check<T>(node: Option<&Node<T>>) -> Option<isize> {
        match node {
            None => Some(-1),
            Some(n) => {
                let height = check(n.left())?.max(check(n.right())?) + 1;
                (n.height() as isize == height).then_some(height)
            }
        }
    }

    check(tree.root()).is_some()
}
