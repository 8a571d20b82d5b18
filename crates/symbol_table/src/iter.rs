use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::node::Node;

fn push_left<'a, K, V>(stack: &mut Vec<&'a Node<K, V>>, mut cur: Option<&'a Node<K, V>>) {
    while let Some(node) = cur {
        stack.push(node);
        cur = node.left.as_deref();
    }
}

/// Ascending in-order iterator over `(key, value)` pairs.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut stack = Vec::new();
        push_left(&mut stack, root);
        Self {
            stack,
            remaining: root.map(|n| n.size).unwrap_or(0),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        push_left(&mut self.stack, node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Ascending iterator over the pairs whose keys fall inside a range.
///
/// The end of the range is resolved up front to the last stored key inside it,
/// so the iterator only borrows the tree.
pub struct Range<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    last: Option<&'a K>,
}

impl<'a, K: Ord, V> Range<'a, K, V> {
    pub(crate) fn new<R: RangeBounds<K>>(root: Option<&'a Node<K, V>>, range: R) -> Self {
        let mut stack = Vec::new();
        let mut cur = root;
        while let Some(node) = cur {
            let inside = match range.start_bound() {
                Bound::Included(lo) => &node.key >= lo,
                Bound::Excluded(lo) => &node.key > lo,
                Bound::Unbounded => true,
            };
            if inside {
                stack.push(node);
                cur = node.left.as_deref();
            } else {
                cur = node.right.as_deref();
            }
        }

        let mut last = None;
        let mut cur = root;
        while let Some(node) = cur {
            let inside = match range.end_bound() {
                Bound::Included(hi) => &node.key <= hi,
                Bound::Excluded(hi) => &node.key < hi,
                Bound::Unbounded => true,
            };
            if inside {
                last = Some(&node.key);
                cur = node.right.as_deref();
            } else {
                cur = node.left.as_deref();
            }
        }

        Self { stack, last }
    }
}

impl<'a, K: Ord, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let last = self.last?;
        let node = self.stack.pop()?;
        if &node.key > last {
            self.finish();
            return None;
        }
        if &node.key == last {
            self.finish();
        } else {
            push_left(&mut self.stack, node.right.as_deref());
        }
        Some((&node.key, &node.value))
    }
}

impl<K: Ord, V> Range<'_, K, V> {
    fn finish(&mut self) {
        self.stack.clear();
        self.last = None;
    }
}

impl<K: Ord, V> FusedIterator for Range<'_, K, V> {}
