//! Plain binary search tree with no self-balancing. Operations degrade to
//! O(n) on sorted insertion orders; prefer the AVL or red-black variants when
//! the input distribution is unknown.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{BstMap, BstMapIntoIter, BstMapIter, BstMapIterMut};
pub use self::set::{BstSet, BstSetIntoIter, BstSetIter};
