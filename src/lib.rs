//! This crate exposes a threaded Binary Search Tree over the integers `1..=n`.
//!
//! ## Threaded Binary Search Tree
//!
//! A Binary Search Tree is typically defined recursively using the notion of a `Node`. A `Node`
//! stores a value and sometimes has child `Node`s. For every `Node`, all the `Node`s in its left
//! subtree have a smaller value and all the `Node`s in its right subtree have a larger value.
//!
//! Sorted iteration normally needs a stack (or parent pointers) to find the way back up the tree
//! after finishing a subtree. A _threaded_ tree reuses the child slots that would otherwise be
//! empty: a node without a left child points at its in-order predecessor instead and a node
//! without a right child points at its in-order successor. These pointers are called "threads".
//! Following right threads, in-order iteration only needs to remember the next node.
//!
//! > Only the smallest value has no predecessor and only the largest value has no successor, so
//! > those are the only empty slots in the tree.
//!
//! The tree is built balanced from a range of integers and supports removals, but it never
//! rebalances itself, so many removals can leave it lopsided.
//!
//! # Examples
//!
//! ```
//! use threaded_bst::Tree;
//!
//! let tree = Tree::new(5)?;
//! assert_eq!(tree.to_string(), "1 2 3 4 5 ");
//!
//! // Copies are independent.
//! let mut copy = tree.clone();
//! assert!(copy.remove_even());
//! assert_eq!(copy.to_string(), "1 3 5 ");
//! assert_eq!(tree.to_string(), "1 2 3 4 5 ");
//!
//! // Removing a missing value is reported, not fatal.
//! assert!(!copy.remove(2));
//! # Ok::<(), threaded_bst::Error>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod build;
mod copy;
mod error;
mod iter;
mod node;
mod remove;
mod thread;
mod tree;

pub use error::Error;
pub use iter::Iter;
pub use tree::Tree;
