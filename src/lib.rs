//! Binary search tree collections with self-balancing variants.
//!
//! The crate provides ordered maps and sets backed by three tree structures
//! sharing a common layout and key-value contract:
//!
//! - [`avl_tree`] — height-balanced tree supporting insertion and removal.
//! - [`red_black_tree`] — left-leaning red-black tree supporting insertion.
//! - [`bst`] — plain binary search tree with no balance guarantee.

mod entry;

pub mod avl_tree;
pub mod bst;
pub mod red_black_tree;
