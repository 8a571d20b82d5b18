//! Left-leaning red-black tree.
//!
//! Every recursive helper takes ownership of a subtree root and hands back the
//! (possibly different) root, so the caller just relinks it. Deletion pushes a
//! red link down the search path so that the node finally unlinked is always
//! red and black height never changes.

use std::cmp::Ordering;

use crate::navigate;
use crate::node::{Color, Link, Node, is_red};

type Tree<K, V> = Box<Node<K, V>>;

fn rotate_left<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    debug_assert!(is_red(&h.right), "rotate_left on a black right link");
    let mut x = h.right.take().expect("rotate_left requires right");
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    h.recalc();
    x.left = Some(h);
    x.recalc();
    x
}

fn rotate_right<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    debug_assert!(is_red(&h.left), "rotate_right on a black left link");
    let mut x = h.left.take().expect("rotate_right requires left");
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    h.recalc();
    x.right = Some(h);
    x.recalc();
    x
}

/// Splits (or, on the way down a deletion, forms) a temporary 4-node.
fn flip_colors<K, V>(h: &mut Node<K, V>) {
    debug_assert!(
        h.is_red() != is_red(&h.left) && h.is_red() != is_red(&h.right),
        "flip_colors needs a node colored opposite to both children"
    );
    h.color = h.color.flip();
    if let Some(left) = h.left.as_deref_mut() {
        left.color = left.color.flip();
    }
    if let Some(right) = h.right.as_deref_mut() {
        right.color = right.color.flip();
    }
}

fn left_left_is_red<K, V>(h: &Node<K, V>) -> bool {
    h.left.as_ref().is_some_and(|l| is_red(&l.left))
}

fn balance<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    if is_red(&h.right) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && left_left_is_red(&h) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.recalc();
    h
}

/// Assuming `h` is red and both `h.left` and `h.left.left` are black, makes
/// `h.left` or one of its children red.
fn move_red_left<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    flip_colors(&mut h);
    if h.right.as_ref().is_some_and(|r| is_red(&r.left)) {
        if let Some(right) = h.right.take() {
            h.right = Some(rotate_right(right));
        }
        h = rotate_left(h);
    }
    h
}

/// Mirror of [`move_red_left`]: makes `h.right` or one of its children red.
fn move_red_right<K, V>(mut h: Tree<K, V>) -> Tree<K, V> {
    flip_colors(&mut h);
    if left_left_is_red(&h) {
        h = rotate_right(h);
    }
    h
}

fn insert_node<K: Ord, V>(h: Link<K, V>, key: K, value: V) -> (Tree<K, V>, Option<V>) {
    let Some(mut h) = h else {
        return (Box::new(Node::new(key, value, Color::Red)), None);
    };

    let old = match key.cmp(&h.key) {
        Ordering::Less => {
            let (left, old) = insert_node(h.left.take(), key, value);
            h.left = Some(left);
            old
        }
        Ordering::Greater => {
            let (right, old) = insert_node(h.right.take(), key, value);
            h.right = Some(right);
            old
        }
        Ordering::Equal => Some(std::mem::replace(&mut h.value, value)),
    };

    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && left_left_is_red(&h) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.recalc();

    (h, old)
}

fn remove_min_node<K, V>(mut h: Tree<K, V>) -> (Link<K, V>, Tree<K, V>) {
    if h.left.is_none() {
        let right = h.right.take();
        return (right, h);
    }
    if !is_red(&h.left) && !left_left_is_red(&h) {
        h = move_red_left(h);
    }
    let (left, min) = remove_min_node(h.left.take().expect("left survives move_red_left"));
    h.left = left;
    (Some(balance(h)), min)
}

/// `key` must be present under `h`; [`remove`] checks this before descending.
fn remove_node<K: Ord, V>(mut h: Tree<K, V>, key: &K) -> (Link<K, V>, V) {
    let removed = if *key < h.key {
        if !is_red(&h.left) && !left_left_is_red(&h) {
            h = move_red_left(h);
        }
        let (left, removed) =
            remove_node(h.left.take().expect("present key lies to the left"), key);
        h.left = left;
        removed
    } else {
        if is_red(&h.left) {
            h = rotate_right(h);
        }
        if *key == h.key && h.right.is_none() {
            // Bottom of the search path: `h` is a red leaf.
            return (None, h.value);
        }
        if h.right.as_ref().is_some_and(|r| !r.is_red() && !is_red(&r.left)) {
            h = move_red_right(h);
        }
        if *key == h.key {
            let (right, min) = remove_min_node(h.right.take().expect("right subtree exists"));
            h.right = right;
            let Node {
                key: successor_key,
                value: successor_value,
                ..
            } = *min;
            h.key = successor_key;
            std::mem::replace(&mut h.value, successor_value)
        } else {
            let (right, removed) =
                remove_node(h.right.take().expect("present key lies to the right"), key);
            h.right = right;
            removed
        }
    };

    (Some(balance(h)), removed)
}

fn paint_root_black<K, V>(root: &mut Link<K, V>) {
    if let Some(r) = root.as_deref_mut() {
        r.color = Color::Black;
    }
}

/// Gives the root slack to push a red link down when it has no red child.
fn paint_root_red<K, V>(root: &mut Link<K, V>) {
    if let Some(r) = root.as_deref_mut() {
        if !is_red(&r.left) && !is_red(&r.right) {
            r.color = Color::Red;
        }
    }
}

pub(crate) fn insert<K: Ord, V>(root: &mut Link<K, V>, key: K, value: V) -> Option<V> {
    let (node, old) = insert_node(root.take(), key, value);
    *root = Some(node);
    paint_root_black(root);
    old
}

/// Absent keys leave the tree untouched.
pub(crate) fn remove<K: Ord, V>(root: &mut Link<K, V>, key: &K) -> Option<V> {
    navigate::find(root.as_deref(), key)?;

    paint_root_red(root);
    let (rest, removed) = remove_node(root.take()?, key);
    *root = rest;
    paint_root_black(root);
    Some(removed)
}

pub(crate) fn remove_min<K, V>(root: &mut Link<K, V>) -> Option<(K, V)> {
    paint_root_red(root);
    let (rest, min) = remove_min_node(root.take()?);
    *root = rest;
    paint_root_black(root);
    let Node { key, value, .. } = *min;
    Some((key, value))
}
