//! Unbalanced binary search tree with Hibbard deletion.
//!
//! Nodes are always black; the color bit is only meaningful to the red-black
//! engine.
//!
//! Every operation walks a `&mut Link` cursor down the tree instead of
//! recursing, since sorted input degrades the tree into a list. Key presence is
//! settled up front, so subtree sizes can be adjusted on the way down.

use std::cmp::Ordering;

use crate::navigate;
use crate::node::{Color, Link, Node};

/// Unlinks the leftmost node under `cur`, promoting its right child.
fn detach_min<K, V>(mut cur: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    while cur.as_ref().is_some_and(|n| n.left.is_some()) {
        let node = cur.as_deref_mut()?;
        node.size -= 1;
        cur = &mut node.left;
    }
    let mut min = cur.take()?;
    *cur = min.right.take();
    min.recalc();
    Some(min)
}

pub(crate) fn insert<K: Ord, V>(root: &mut Link<K, V>, key: K, value: V) -> Option<V> {
    if let Some(node) = navigate::find_mut(root.as_deref_mut(), &key) {
        return Some(std::mem::replace(&mut node.value, value));
    }

    let mut cur = root;
    while let Some(node) = cur {
        node.size += 1;
        cur = if key < node.key {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *cur = Some(Box::new(Node::new(key, value, Color::Black)));
    None
}

/// Hibbard deletion: a node with two children is replaced by its successor.
pub(crate) fn remove<K: Ord, V>(root: &mut Link<K, V>, key: &K) -> Option<V> {
    navigate::find(root.as_deref(), key)?;

    let mut cur = root;
    loop {
        let ord = key.cmp(&cur.as_deref()?.key);
        if ord == Ordering::Equal {
            break;
        }
        let node = cur.as_deref_mut()?;
        node.size -= 1;
        cur = if ord == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    let mut target = cur.take()?;
    *cur = match (target.left.take(), target.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            let mut successor = detach_min(&mut right)?;
            successor.left = Some(left);
            successor.right = right;
            successor.recalc();
            Some(successor)
        }
    };
    Some(target.value)
}

pub(crate) fn remove_min<K, V>(root: &mut Link<K, V>) -> Option<(K, V)> {
    let min = detach_min(root)?;
    let Node { key, value, .. } = *min;
    Some((key, value))
}
