use crate::avl_tree::tree;
use crate::entry::Entry;
use std::cmp;

/// A struct representing an internal node of an AVL tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub height: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry::new(key, value),
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recomputes the cached height from the children. Must be called after
    /// any structural change below this node.
    pub fn update_height(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    /// Height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        tree::height(&self.left) as i32 - tree::height(&self.right) as i32
    }
}
