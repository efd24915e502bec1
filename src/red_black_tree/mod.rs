//! Self-balancing binary search tree that uses a color bit per node to keep
//! the tree approximately balanced during insertions. This left-leaning
//! variant supports insertion only; use the AVL tree for removal-heavy
//! workloads.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapIterMut};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
