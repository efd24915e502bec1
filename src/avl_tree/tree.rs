use crate::avl_tree::node::Node;
use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn balance_factor<T, U>(tree: &Tree<T, U>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance_factor(),
    }
}

fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update_height();
    child.left = Some(node);
    child.update_height();
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update_height();
    child.right = Some(node);
    child.update_height();
    child
}

// Re-establishes the balance invariant at the root of `tree`, assuming both
// subtrees already satisfy it and their cached heights are accurate. Four
// cases keyed on the balance factor of the node and the taller child.
fn maintain<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update_height();

    let factor = node.balance_factor();
    if factor > 1 && balance_factor(&node.left) >= 0 {
        node = rotate_right(node);
    } else if factor > 1 {
        // left-right: the left child leans right
        node.left = node.left.take().map(rotate_left);
        node = rotate_right(node);
    } else if factor < -1 && balance_factor(&node.right) <= 0 {
        node = rotate_left(node);
    } else if factor < -1 {
        // right-left: the right child leans left
        node.right = node.right.take().map(rotate_right);
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn detach_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let descend = match tree {
        Some(ref node) => node.left.is_some(),
        None => unreachable!(),
    };

    if descend {
        let min = match tree {
            Some(ref mut node) => detach_min(&mut node.left),
            None => unreachable!(),
        };
        maintain(tree);
        return min;
    }

    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };
    *tree = node.right.take();
    node
}

// Replaces a removed two-child node with the in-order successor of its right
// subtree. The successor path is rebalanced by `detach_min`; the graft point
// itself is rebalanced by the caller.
fn graft_successor<T, U>(left_tree: Tree<T, U>, mut right_tree: Tree<T, U>) -> Tree<T, U> {
    let mut successor = detach_min(&mut right_tree);
    successor.left = left_tree;
    successor.right = right_tree;
    successor.update_height();
    Some(successor)
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

    maintain(tree);
    ret
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node {
                    entry, left, right, ..
                } = *node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = graft_successor(left, right),
                }
                Some(entry)
            },
        },
        None => return None,
    };

    maintain(tree);
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

// Appends the keys of `tree` to `keys` using in-order traversal.
fn traverse_in_order<'a, T, U>(tree: &'a Tree<T, U>, keys: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        traverse_in_order(&node.left, keys);
        keys.push(&node.entry.key);
        traverse_in_order(&node.right, keys);
    }
}

/// Checks that an in-order traversal of `tree` yields keys in non-decreasing
/// order. Diagnostic only; insertion and removal maintain this by
/// construction.
pub fn is_ordered<T, U>(tree: &Tree<T, U>) -> bool
where
    T: Ord,
{
    let mut keys = Vec::new();
    traverse_in_order(tree, &mut keys);
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Checks that every node of `tree` satisfies the balance invariant.
/// Diagnostic only.
pub fn is_balanced<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.balance_factor().abs() <= 1
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        },
    }
}
