//! The vertices a [`Tree`][crate::Tree] is built out of.
//!
//! A `Node` is a plain data holder. It owns its value, its (optional) children,
//! and a cached height. It never checks any invariants itself. Only the owning
//! [`Tree`][crate::Tree] can change a node, which is how the tree keeps its
//! ordering and cached heights correct. Everyone else gets read-only access
//! through the getters.

use std::fmt;
use std::mem;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value in a [`Tree`][crate::Tree]. It has up to two children, each
/// of which exclusively belongs to it. There are no parent pointers so there
/// can't be cycles.
#[derive(Clone)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// How many edges are on the longest path from this node down to a leaf.
    /// A node with no children has a height of 0.
    height: usize,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            height: 0,
            left: None,
            right: None,
            value,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The number of edges on the longest path from this node to a leaf below
    /// it. Leaves have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::from_values([2, 1, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().map(|n| n.height()), Some(0));
    /// ```
    pub fn height(&self) -> usize {
        self.height
    }

    /// The root of this node's left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The difference in height between the right and left subtrees. An
    /// empty subtree counts as having a height of -1 so a leaf has a balance
    /// factor of 0.
    pub fn balance_factor(&self) -> isize {
        subtree_height(self.right()) - subtree_height(self.left())
    }

    /// Replaces the stored value, returning the old one.
    pub(crate) fn set_value(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    pub(crate) fn set_left(&mut self, left: Link<T>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Link<T>) {
        self.right = right;
    }

    pub(crate) fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    /// Children must already have correct heights.
    pub(crate) fn fix_height(&mut self) {
        let tallest_child = subtree_height(self.left()).max(subtree_height(self.right()));
        // An empty subtree is -1 so this is never negative.
        self.height = (tallest_child + 1) as usize;
    }

    /// Breaks the node apart into its value and its two subtrees.
    pub(crate) fn into_parts(self) -> (T, Link<T>, Link<T>) {
        (self.value, self.left, self.right)
    }

    /// Panics if either child is on the wrong side of this node. Only does
    /// anything with debug assertions enabled.
    pub(crate) fn debug_assert_ordered(&self)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.value > left.value);
            }
            if let Some(right) = self.right() {
                assert!(self.value < right.value);
            }
        }
    }
}

/// The height of the subtree rooted at `node`, where an empty subtree has a
/// height of -1.
pub(crate) fn subtree_height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, |n| n.height as isize)
}
