//! A BST that stores a set of values and only balances itself when asked to.
//!
//! Every mutation is written as a recursive function that takes a subtree by
//! value and returns the (possibly new) root of that subtree. Parents re-attach
//! whatever their child hands back and fix their own height on the way back
//! up, so no node ever needs a pointer to its parent.
//!
//! Inserts and deletes don't rotate anything. Inserting ascending values will
//! give you something that looks a lot like a linked list. Use
//! [`Tree::is_balanced`] to notice that and [`Tree::rebalance`] to fix it.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! // Duplicates are dropped and the rest is built into a balanced tree.
//! let mut tree = Tree::from_values([7, 3, 9, 1, 5, 3, 7, 2, 8]);
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(5));
//!
//! // Keep adding bigger values and the tree leans to the right.
//! for x in 10..15 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order_for_each(|n| *n.value()), [1, 2, 3, 5, 7, 8, 9, 10, 11, 12, 13, 14]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::pretty;

/// A Binary Search Tree holding a set of values. This can be used for
/// inserting, finding, and deleting values as well as asking how deep or
/// tall a value sits in the tree.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the whole tree (the height of its root), or `None` if the
    /// tree is empty.
    pub fn tree_height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(current.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }
        Some(current.value())
    }

    /// Whether every node's subtrees differ in height by at most one. Empty
    /// subtrees count as having a height of -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert!(tree.is_balanced());
    ///
    /// // Nothing rebalances this for us.
    /// tree.insert(3);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        Self::is_balanced_at(self.root())
    }

    fn is_balanced_at(node: Option<&Node<T>>) -> bool {
        match node {
            None => true,
            Some(n) => {
                n.balance_factor().abs() <= 1
                    && Self::is_balanced_at(n.left())
                    && Self::is_balanced_at(n.right())
            }
        }
    }

    /// Calls `callback` on every node breadth first, left to right within a
    /// level, and collects what it returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCallback`] if `callback` is `None`, even if the
    /// tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Error, Node, Tree};
    ///
    /// let tree = Tree::from_values([1, 2, 3, 4, 5, 6, 7]);
    ///
    /// let levels = tree.level_order_for_each(Some(|n: &Node<i32>| *n.value()));
    /// assert_eq!(levels, Ok(vec![4, 2, 6, 1, 3, 5, 7]));
    ///
    /// let missing = tree.level_order_for_each(None::<fn(&Node<i32>) -> i32>);
    /// assert_eq!(missing, Err(Error::MissingCallback));
    /// ```
    pub fn level_order_for_each<'a, F, R>(&'a self, callback: Option<F>) -> Result<Vec<R>>
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        let mut callback = callback.ok_or(Error::MissingCallback)?;

        let mut results = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&'a Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            results.push(callback(node));
            queue.extend(node.left());
            queue.extend(node.right());
        }

        Ok(results)
    }

    /// Calls `callback` on every node, visiting a node before either of its
    /// subtrees, and collects what it returns.
    pub fn pre_order_for_each<'a, F, R>(&'a self, mut callback: F) -> Vec<R>
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        let mut results = Vec::with_capacity(self.len);
        Self::pre_order_at(self.root(), &mut callback, &mut results);
        results
    }

    fn pre_order_at<'a, F, R>(node: Option<&'a Node<T>>, callback: &mut F, results: &mut Vec<R>)
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        if let Some(n) = node {
            results.push(callback(n));
            Self::pre_order_at(n.left(), callback, results);
            Self::pre_order_at(n.right(), callback, results);
        }
    }

    /// Calls `callback` on every node in sorted order and collects what it
    /// returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Node, Tree};
    ///
    /// let tree = Tree::from_values([3, 1, 2]);
    ///
    /// assert_eq!(tree.in_order_for_each(Node::value), [&1, &2, &3]);
    /// ```
    pub fn in_order_for_each<'a, F, R>(&'a self, mut callback: F) -> Vec<R>
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        let mut results = Vec::with_capacity(self.len);
        Self::in_order_at(self.root(), &mut callback, &mut results);
        results
    }

    fn in_order_at<'a, F, R>(node: Option<&'a Node<T>>, callback: &mut F, results: &mut Vec<R>)
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        if let Some(n) = node {
            Self::in_order_at(n.left(), callback, results);
            results.push(callback(n));
            Self::in_order_at(n.right(), callback, results);
        }
    }

    /// Calls `callback` on every node, visiting both subtrees before the node
    /// itself, and collects what it returns.
    pub fn post_order_for_each<'a, F, R>(&'a self, mut callback: F) -> Vec<R>
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        let mut results = Vec::with_capacity(self.len);
        Self::post_order_at(self.root(), &mut callback, &mut results);
        results
    }

    fn post_order_at<'a, F, R>(node: Option<&'a Node<T>>, callback: &mut F, results: &mut Vec<R>)
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        if let Some(n) = node {
            Self::post_order_at(n.left(), callback, results);
            Self::post_order_at(n.right(), callback, results);
            results.push(callback(n));
        }
    }

    /// Builds a balanced subtree out of the sorted, duplicate-free `values`
    /// occupying positions `start..=end`. The middle position becomes the root,
    /// everything before it goes left and everything after it goes right.
    ///
    /// Values are moved out of the iterator in order, so the left subtree has
    /// to be built before the root is taken, and the root before the right.
    fn build_tree<I>(values: &mut I, start: isize, end: isize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if start > end {
            return None;
        }

        let mid = (start + end) / 2;
        let left = Self::build_tree(values, start, mid - 1);
        // The positions always line up with how many values are left.
        let mut node = Node::new_boxed(values.next()?);
        node.set_left(left);
        node.set_right(Self::build_tree(values, mid + 1, end));
        node.fix_height();

        Some(node)
    }

    /// Builds a balanced tree from values that are already sorted and unique.
    fn from_sorted(values: Vec<T>) -> Self {
        let len = values.len();
        let root = Self::build_tree(&mut values.into_iter(), 0, len as isize - 1);
        Self { root, len }
    }

    /// Moves every value under `link` into `out` in sorted order.
    fn drain_in_order(link: Link<T>, out: &mut Vec<T>) {
        if let Some(node) = link {
            let (value, left, right) = node.into_parts();
            Self::drain_in_order(left, out);
            out.push(value);
            Self::drain_in_order(right, out);
        }
    }

    /// Throws away the current shape of the tree and rebuilds it to be as
    /// short as possible. The values don't change.
    ///
    /// This isn't done with rotations: every value is moved out in sorted
    /// order and a new tree is built from scratch in `O(n)` time and space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.tree_height(), Some(6));
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.tree_height(), Some(2));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = self.tree_height();
        let mut values = Vec::with_capacity(self.len);
        Self::drain_in_order(self.root.take(), &mut values);

        *self = Self::from_sorted(values);
        debug!(
            "rebalanced {} nodes, height {:?} -> {:?}",
            self.len,
            height_before,
            self.tree_height()
        );
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Builds a balanced tree out of `values`. Duplicates are dropped so the
    /// tree holds each distinct value exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::from_values([7, 3, 9, 1, 5, 3, 7, 2, 8]);
    ///
    /// assert_eq!(tree.len(), 7);
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.tree_height(), Some(2));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        let input_len = values.len();
        values.sort_unstable();
        values.dedup();

        let tree = Self::from_sorted(values);
        debug!(
            "built tree of {} distinct values from {} inputs, height {:?}",
            tree.len,
            input_len,
            tree.tree_height()
        );
        tree
    }

    /// Finds the node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        Self::find_at(self.root(), value)
    }

    fn find_at<'a>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>> {
        let n = node?;
        match value.cmp(n.value()) {
            Ordering::Equal => Some(n),
            Ordering::Less => Self::find_at(n.left(), value),
            Ordering::Greater => Self::find_at(n.right(), value),
        }
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The height of the node holding `value`, looked up by whatever the tree
    /// contains right now. `None` if the value isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.height(&2), Some(1));
    /// assert_eq!(tree.height(&3), Some(0));
    /// assert_eq!(tree.height(&42), None);
    /// ```
    pub fn height(&self, value: &T) -> Option<usize> {
        self.find(value).map(Node::height)
    }

    /// How many edges lie between the root and the node holding `value`. The
    /// root has a depth of `Some(0)`; a value that isn't in the tree gives
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(&2), Some(0));
    /// assert_eq!(tree.depth(&1), Some(1));
    /// assert_eq!(tree.depth(&42), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Equal => return Some(depth),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// Inserts `value` into the tree. If it's already there, nothing happens.
    ///
    /// The tree isn't rebalanced afterwards, see [`Tree::rebalance`].
    ///
    /// # Stack usage
    ///
    /// Inserting recurses once per level, as do [`Tree::delete`], [`Tree::find`],
    /// the traversals and dropping the tree. A tree built by inserting many
    /// values in sorted order is a single chain as tall as the number of
    /// values, and a chain of tens of thousands of nodes can overflow the
    /// stack. Call [`Tree::rebalance`] (or build with [`Tree::from_values`])
    /// to keep the height logarithmic.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut inserted = false;
        self.root = Some(Self::insert_at(self.root.take(), value, &mut inserted));
        if inserted {
            self.len += 1;
        }
    }

    /// Inserts `value` into the subtree behind `link` and returns the subtree's
    /// root. Sets `inserted` if a new node was created.
    fn insert_at(link: Link<T>, value: T, inserted: &mut bool) -> Box<Node<T>> {
        let Some(mut node) = link else {
            *inserted = true;
            return Node::new_boxed(value);
        };

        match value.cmp(node.value()) {
            Ordering::Less => {
                let left = node.take_left();
                node.set_left(Some(Self::insert_at(left, value, inserted)));
            }
            Ordering::Equal => {
                trace!("value already present, ignoring insert");
                return node;
            }
            Ordering::Greater => {
                let right = node.take_right();
                node.set_right(Some(Self::insert_at(right, value, inserted)));
            }
        }

        node.fix_height();
        node.debug_assert_ordered();
        node
    }

    /// Deletes `value` from the tree. If it isn't there, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::from_values([1, 2, 3]);
    ///
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete(&mut self, value: &T) {
        let mut deleted = false;
        self.root = Self::delete_at(self.root.take(), value, &mut deleted);
        if deleted {
            self.len -= 1;
        } else {
            trace!("value not present, ignoring delete");
        }
    }

    /// Deletes `value` from the subtree behind `link` and returns whatever is
    /// left of the subtree. Sets `deleted` if a node was removed.
    fn delete_at(link: Link<T>, value: &T, deleted: &mut bool) -> Link<T> {
        let mut node = link?;

        match value.cmp(node.value()) {
            Ordering::Less => {
                let left = node.take_left();
                node.set_left(Self::delete_at(left, value, deleted));
            }
            Ordering::Greater => {
                let right = node.take_right();
                node.set_right(Self::delete_at(right, value, deleted));
            }
            Ordering::Equal => {
                *deleted = true;
                match (node.take_left(), node.take_right()) {
                    (None, None) => return None,
                    (Some(child), None) | (None, Some(child)) => return Some(child),

                    // With two children the in-order successor (the smallest
                    // value in the right subtree) takes this node's place. It
                    // has no left child so removing it is one of the easy cases.
                    (Some(left), Some(right)) => {
                        let (successor, new_right) = Self::take_min(right);
                        node.set_value(successor);
                        node.set_left(Some(left));
                        node.set_right(new_right);
                    }
                }
            }
        }

        node.fix_height();
        node.debug_assert_ordered();
        Some(node)
    }

    /// Removes the leftmost node under `node`, returning its value and what's
    /// left of the subtree.
    fn take_min(mut node: Box<Node<T>>) -> (T, Link<T>) {
        match node.take_left() {
            None => {
                let (value, _, right) = node.into_parts();
                (value, right)
            }
            Some(left) => {
                let (min, new_left) = Self::take_min(left);
                node.set_left(new_left);
                node.fix_height();
                (min, Some(node))
            }
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

/// Draws the shape of the tree, see [`pretty`][crate::pretty].
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pretty::write_tree(f, self.root(), "", true)
    }
}
