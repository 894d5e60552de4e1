//! A contact book kept in a Binary Search Tree (BST), keyed by name.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. Here a `Node` stores one
//! [`ContactRecord`] and owns up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    name that sorts before its own name.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    name that sorts after its own name.
//!
//! > Names are compared byte by byte (see [`contact::compare`]) and no two
//! > nodes share a name. Inserting a name that is already present is rejected.
//!
//! Searching takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. This tree never rebalances itself, so
//! inserting names in sorted order gives a height equal to the number of
//! contacts. Sorted iteration visits the left subtree, then the subtree
//! root, then the right subtree.
//!
//! The [`menu`] module wraps the tree in the interactive text menu used by
//! the `contacts` binary.

#![deny(missing_docs)]

pub mod config;
pub mod contact;
pub mod error;
pub mod menu;
pub mod tree;


pub use contact::ContactRecord;
pub use tree::ContactTree;
