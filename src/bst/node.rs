use crate::bst::tree;
use crate::entry::Entry;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry::new(key, value),
            left: None,
            right: None,
        }
    }
}
