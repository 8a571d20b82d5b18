//! Read-only queries shared by both balancing strategies.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::node::Node;

pub(crate) fn find<'a, K: Ord, V>(
    mut cur: Option<&'a Node<K, V>>,
    key: &K,
) -> Option<&'a Node<K, V>> {
    while let Some(node) = cur {
        match key.cmp(&node.key) {
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Greater => cur = node.right.as_deref(),
            Ordering::Equal => return Some(node),
        }
    }
    None
}

pub(crate) fn find_mut<'a, K: Ord, V>(
    mut cur: Option<&'a mut Node<K, V>>,
    key: &K,
) -> Option<&'a mut Node<K, V>> {
    while let Some(node) = cur {
        match key.cmp(&node.key) {
            Ordering::Less => cur = node.left.as_deref_mut(),
            Ordering::Greater => cur = node.right.as_deref_mut(),
            Ordering::Equal => return Some(node),
        }
    }
    None
}

pub(crate) fn first<K, V>(root: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
    let mut node = root?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(node)
}

pub(crate) fn last<K, V>(root: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
    let mut node = root?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(node)
}

/// Largest key `<= key`.
pub(crate) fn floor<'a, K: Ord, V>(mut cur: Option<&'a Node<K, V>>, key: &K) -> Option<&'a K> {
    let mut candidate = None;
    while let Some(node) = cur {
        match key.cmp(&node.key) {
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Greater => {
                candidate = Some(&node.key);
                cur = node.right.as_deref();
            }
            Ordering::Equal => return Some(&node.key),
        }
    }
    candidate
}

/// Smallest key `>= key`.
pub(crate) fn ceil<'a, K: Ord, V>(mut cur: Option<&'a Node<K, V>>, key: &K) -> Option<&'a K> {
    let mut candidate = None;
    while let Some(node) = cur {
        match key.cmp(&node.key) {
            Ordering::Less => {
                candidate = Some(&node.key);
                cur = node.left.as_deref();
            }
            Ordering::Greater => cur = node.right.as_deref(),
            Ordering::Equal => return Some(&node.key),
        }
    }
    candidate
}

/// Number of keys strictly less than `key`.
pub(crate) fn rank<K: Ord, V>(mut cur: Option<&Node<K, V>>, key: &K) -> usize {
    let mut rank = 0;
    while let Some(node) = cur {
        match key.cmp(&node.key) {
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Greater => {
                rank += 1 + Node::size(&node.left);
                cur = node.right.as_deref();
            }
            Ordering::Equal => return rank + Node::size(&node.left),
        }
    }
    rank
}

pub(crate) fn select<K, V>(mut cur: Option<&Node<K, V>>, mut index: usize) -> Option<&Node<K, V>> {
    while let Some(node) = cur {
        let left = Node::size(&node.left);
        match index.cmp(&left) {
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Equal => return Some(node),
            Ordering::Greater => {
                index -= left + 1;
                cur = node.right.as_deref();
            }
        }
    }
    None
}

/// Edges on the longest root-to-node path, counted one level at a time.
pub(crate) fn height<K, V>(root: Option<&Node<K, V>>) -> usize {
    let mut level: Vec<&Node<K, V>> = root.into_iter().collect();
    let mut levels: usize = 0;
    while !level.is_empty() {
        levels += 1;
        level = level
            .iter()
            .flat_map(|n| [n.left.as_deref(), n.right.as_deref()])
            .flatten()
            .collect();
    }
    levels.saturating_sub(1)
}

pub(crate) fn level_order<K, V>(root: Option<&Node<K, V>>) -> Vec<&K> {
    let mut keys = Vec::with_capacity(root.map(|n| n.size).unwrap_or(0));
    let mut queue = VecDeque::new();
    queue.extend(root);
    while let Some(node) = queue.pop_front() {
        keys.push(&node.key);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::bst;
    use crate::node::Link;

    fn build(keys: &[u32]) -> Link<u32, u32> {
        let mut root = None;
        for &k in keys {
            bst::insert(&mut root, k, k * 10);
        }
        root
    }

    #[test]
    fn floor_ceil_between_keys() {
        let root = build(&[20, 10, 30, 5, 15, 25, 35]);
        let root = root.as_deref();
        assert_eq!(floor(root, &17), Some(&15));
        assert_eq!(ceil(root, &17), Some(&20));
        assert_eq!(floor(root, &30), Some(&30));
        assert_eq!(ceil(root, &30), Some(&30));
        assert_eq!(floor(root, &4), None);
        assert_eq!(ceil(root, &36), None);
        assert_eq!(floor(root, &100), Some(&35));
        assert_eq!(ceil(root, &0), Some(&5));
    }

    #[test]
    fn rank_counts_absent_keys() {
        let root = build(&[20, 10, 30, 5, 15, 25, 35]);
        let root = root.as_deref();
        assert_eq!(rank(root, &0), 0);
        assert_eq!(rank(root, &5), 0);
        assert_eq!(rank(root, &6), 1);
        assert_eq!(rank(root, &20), 3);
        assert_eq!(rank(root, &21), 4);
        assert_eq!(rank(root, &99), 7);
    }

    #[test]
    fn select_walks_sizes() {
        let keys = [20, 10, 30, 5, 15, 25, 35];
        let root = build(&keys);
        let mut sorted = keys.to_vec();
        sorted.sort();
        for (i, k) in sorted.iter().enumerate() {
            assert_eq!(select(root.as_deref(), i).map(|n| n.key), Some(*k));
        }
        assert!(select(root.as_deref(), keys.len()).is_none());
    }

    #[test]
    fn find_mut_updates_in_place() {
        let mut root = build(&[2, 1, 3]);
        find_mut(root.as_deref_mut(), &3).unwrap().value = 7;
        assert_eq!(find(root.as_deref(), &3).map(|n| n.value), Some(7));
        assert!(find_mut(root.as_deref_mut(), &4).is_none());
    }

    #[test]
    fn height_takes_the_deepest_branch() {
        assert_eq!(height(build(&[20, 10, 30, 5, 15, 25, 35]).as_deref()), 2);
        assert_eq!(height(build(&[20, 10, 30, 5, 4, 3]).as_deref()), 4);
        assert_eq!(height(build(&[7]).as_deref()), 0);
    }

    #[test]
    fn empty_tree_queries() {
        let root: Link<u32, u32> = None;
        let root = root.as_deref();
        assert!(first(root).is_none());
        assert!(last(root).is_none());
        assert_eq!(height(root), 0);
        assert!(level_order(root).is_empty());
        assert_eq!(rank(root, &1), 0);
    }
}
