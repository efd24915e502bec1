use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

// The promoted child inherits the color of the demoted node, which in turn
// becomes a red link. This keeps the black-height of the rotated subtree
// unchanged.
fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.color = node.color;
    node.color = Color::Red;
    child.left = Some(node);
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.color = node.color;
    node.color = Color::Red;
    child.right = Some(node);
    child
}

// Restores the left-leaning invariants at the root of `tree` after an insert
// into one of its subtrees. The three cases must be applied in this order.
fn fix_up<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    if is_red(&node.right) && !is_red(&node.left) {
        node = rotate_left(node);
    }

    let left_left_red = match node.left {
        Some(ref child) => child.color == Color::Red && is_red(&child.left),
        None => false,
    };
    if left_left_red {
        node = rotate_right(node);
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    *tree = Some(node);
}

/// Recolors the root black. Applied once per insert, after the top-level
/// recursive call returns; a color flip at the root may otherwise leave it
/// red.
pub fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => {
                return Some(mem::replace(&mut node.entry, new_node.entry));
            },
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    fix_up(tree);
    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V>(mut tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    while let Some(node) = tree {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => tree = &mut node.left,
            Ordering::Greater => tree = &mut node.right,
            Ordering::Equal => return Some(&mut node.entry),
        }
    }
    None
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => curr = &node.right,
            Ordering::Less => {
                ret = Some(&node.entry);
                curr = &node.left;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    ret
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret = Some(&node.entry);
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    ret
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

// Number of black nodes on every path from `tree` to a null leaf, or `None`
// if the color invariants are violated somewhere below.
fn black_height<T, U>(tree: &Tree<T, U>) -> Option<usize> {
    let node = match tree {
        None => return Some(0),
        Some(ref node) => node,
    };

    // red links must lean left
    if is_red(&node.right) {
        return None;
    }
    // no two consecutive red links
    if node.color == Color::Red && is_red(&node.left) {
        return None;
    }

    let left_height = black_height(&node.left)?;
    let right_height = black_height(&node.right)?;
    if left_height != right_height {
        return None;
    }

    match node.color {
        Color::Black => Some(left_height + 1),
        Color::Red => Some(left_height),
    }
}

/// Checks the red-black invariants: the root is black, red links lean left,
/// no two consecutive red links occur, and every path from the root to a null
/// leaf contains the same number of black nodes. Diagnostic only; insertion
/// maintains these by construction.
pub fn is_valid<T, U>(tree: &Tree<T, U>) -> bool {
    !is_red(tree) && black_height(tree).is_some()
}

#[cfg(test)]
mod tests {
    use super::{blacken_root, insert, is_valid, Color, Node, Tree};

    fn build(keys: &[u32]) -> Tree<u32, u32> {
        let mut tree = None;
        for &key in keys {
            insert(&mut tree, Node::new(key, key));
            blacken_root(&mut tree);
        }
        tree
    }

    fn height<T, U>(tree: &Tree<T, U>) -> usize {
        match tree {
            None => 0,
            Some(ref node) => std::cmp::max(height(&node.left), height(&node.right)) + 1,
        }
    }

    #[test]
    fn test_ascending_insert_rotates_root() {
        // the classic rotation trigger
        let tree = build(&[10, 20, 30]);
        let root = tree.as_ref().unwrap();

        assert_eq!(root.entry.key, 20);
        assert_eq!(root.color, Color::Black);
        assert_eq!(root.left.as_ref().map(|node| node.color), Some(Color::Black));
        assert_eq!(root.right.as_ref().map(|node| node.color), Some(Color::Black));
        assert_eq!(height(&tree), 2);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_new_node_is_red() {
        let node: Node<u32, u32> = Node::new(1, 1);
        assert_eq!(node.color, Color::Red);
    }

    #[test]
    fn test_invariants_hold_under_adversarial_orders() {
        let ascending = (0..64).collect::<Vec<u32>>();
        let descending = (0..64).rev().collect::<Vec<u32>>();
        let zig_zag = (0..32)
            .flat_map(|index| vec![index, 63 - index])
            .collect::<Vec<u32>>();

        for keys in &[ascending, descending, zig_zag] {
            let mut tree = None;
            for &key in keys.iter() {
                insert(&mut tree, Node::new(key, key));
                blacken_root(&mut tree);
                assert!(is_valid(&tree));
            }
        }
    }

    #[test]
    fn test_insert_replaces_entry() {
        let mut tree = build(&[1, 2, 3]);
        let old = insert(&mut tree, Node::new(2, 5)).unwrap();
        assert_eq!(old.into_pair(), (2, 2));
        assert!(is_valid(&tree));
    }
}
