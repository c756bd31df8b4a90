//! This crate exposes a counting Binary Search Tree (BST): an ordered
//! container that stores each distinct value exactly once and tracks how
//! many times it has been inserted.
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
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted output by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## This crate's flavor
//!
//! The tree in [`counted`] does **not** self-balance. Inserting values in a
//! monotonic order degenerates the tree into a linked list, so `height` is
//! `O(N)` in the worst case. Every operation recurses to the tree's height,
//! which means a degenerate tree can exhaust the stack on removal, clearing,
//! or rendering. That is a known, documented limitation of this container,
//! not a handled condition.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod counted;
