use crate::entry::Entry;
use crate::red_black_tree::tree;

/// The color of the link from a node to its parent. An absent child counts as
/// `Black`; that rule is encoded in `tree::is_red`, not stored as a sentinel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red-black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    /// New nodes enter the tree as red links.
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry::new(key, value),
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    /// Pushes blackness down one level: this node becomes red and both
    /// children become black. Called when both children are red, so the
    /// black-height below this node is unchanged.
    pub fn flip_colors(&mut self) {
        self.color = Color::Red;
        if let Some(ref mut child) = self.left {
            child.color = Color::Black;
        }
        if let Some(ref mut child) = self.right {
            child.color = Color::Black;
        }
    }
}
