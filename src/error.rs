//! Errors returned by [`Tree`][crate::Tree] operations.
//!
//! Most operations can't fail: looking up a missing value gives `None` and
//! inserting a duplicate or deleting a missing value quietly does nothing.

use thiserror::Error;

/// Things that can go wrong when calling into a [`Tree`][crate::Tree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A traversal was asked to run without a callback to apply to each node.
    #[error("a callback is required to traverse the tree")]
    MissingCallback,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
