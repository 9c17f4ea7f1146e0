//! This crate exposes an ordered set backed by a Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A BST stores keys in `Node`s: each `Node` holds one key and up to two
//! child `Node`s, and the whole structure hangs off a single root. The
//! invariants that make the shape searchable are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that a key is stored at most once. Inserting an equal key again is
//! > rejected rather than layered on top, so the invariants can use strict
//! > comparisons.
//!
//! Together the invariants mean a lookup follows a single path down from the
//! root, taking `O(height)` steps (where `height` is the longest path from
//! the root `Node` to a leaf `Node`), and that visiting the left subtree,
//! then the node, then the right subtree yields every key in ascending
//! order. Nothing here rebalances the tree: insertion order dictates the
//! shape, and inserting an already-sorted sequence degrades `height` to the
//! number of keys.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod iterative;

#[cfg(test)]
mod test;
