//! Interval search tree.
//!
//! A binary search tree keyed by the low endpoint, where every node caches the
//! largest high endpoint found in its subtree. Intervals are closed.

use std::cmp::Ordering;

use crate::error::{Error, Result};

type Link<K> = Option<Box<IntervalNode<K>>>;

struct IntervalNode<K> {
    low: K,
    high: K,
    max: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K: Ord + Clone> IntervalNode<K> {
    fn new(low: K, high: K) -> Self {
        Self {
            max: high.clone(),
            low,
            high,
            left: None,
            right: None,
        }
    }

    fn overlaps(&self, low: &K, high: &K) -> bool {
        self.low <= *high && *low <= self.high
    }
}

pub struct IntervalTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K: Ord + Clone> IntervalTree<K> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `[low, high]`. Low endpoints are unique.
    pub fn insert(&mut self, low: K, high: K) -> Result<()> {
        if low > high {
            return Err(Error::InvalidInterval);
        }
        if self.contains_low(&low) {
            return Err(Error::DuplicateLow);
        }

        let mut cur = &mut self.root;
        while let Some(node) = cur {
            if high > node.max {
                node.max = high.clone();
            }
            cur = if low < node.low {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cur = Some(Box::new(IntervalNode::new(low, high)));
        self.len += 1;
        Ok(())
    }

    fn contains_low(&self, low: &K) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match low.cmp(&node.low) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Some stored interval intersecting `[low, high]`, if any.
    pub fn search(&self, low: &K, high: &K) -> Option<(&K, &K)> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if node.overlaps(low, high) {
                return Some((&node.low, &node.high));
            }
            cur = match node.left.as_deref() {
                Some(left) if left.max >= *low => Some(left),
                _ => node.right.as_deref(),
            };
        }
        None
    }
}

impl<K: Ord + Clone> Default for IntervalTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for IntervalTree<K> {
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
