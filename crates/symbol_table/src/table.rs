use std::fmt;
use std::ops::RangeBounds;

use crate::error::{Error, Result};
use crate::impls::{bst, llrb};
use crate::iter::{Iter, Range};
use crate::node::{self, Link, Node};
use crate::{check, navigate};

/// How a [`SymbolTable`] restructures itself on mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Balancing {
    /// Plain binary search tree. Height follows insertion order.
    Unbalanced,
    /// Left-leaning red-black tree. Height stays within `2 log2(n + 1)`.
    #[default]
    RedBlack,
}

/// Ordered symbol table.
///
/// - Keys are unique; `put` overwrites the existing value and returns the old one.
/// - `rank(k)` counts keys strictly less than `k`; `select(i)` is its inverse.
/// - Queries never restructure the tree, whichever [`Balancing`] is used.
pub struct SymbolTable<K, V> {
    root: Link<K, V>,
    balancing: Balancing,
}

impl<K: Ord, V> SymbolTable<K, V> {
    /// Empty red-black table.
    pub fn new() -> Self {
        Self::with_balancing(Balancing::RedBlack)
    }

    pub fn red_black() -> Self {
        Self::with_balancing(Balancing::RedBlack)
    }

    pub fn unbalanced() -> Self {
        Self::with_balancing(Balancing::Unbalanced)
    }

    pub fn with_balancing(balancing: Balancing) -> Self {
        Self {
            root: None,
            balancing,
        }
    }

    pub fn balancing(&self) -> Balancing {
        self.balancing
    }

    pub fn len(&self) -> usize {
        Node::size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        node::dismantle(self.root.take());
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        navigate::find(self.root.as_deref(), key)
            .map(|n| &n.value)
            .ok_or(Error::KeyNotFound)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        navigate::find_mut(self.root.as_deref_mut(), key)
            .map(|n| &mut n.value)
            .ok_or(Error::KeyNotFound)
    }

    pub fn contains(&self, key: &K) -> bool {
        navigate::find(self.root.as_deref(), key).is_some()
    }

    /// Inserts `key`, or overwrites its value. Returns the previous value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let old = match self.balancing {
            Balancing::Unbalanced => bst::insert(&mut self.root, key, value),
            Balancing::RedBlack => llrb::insert(&mut self.root, key, value),
        };
        log::trace!(
            "put ({:?}): {} key, len={}",
            self.balancing,
            if old.is_some() { "overwrote" } else { "inserted" },
            self.len()
        );
        old
    }

    /// Removes `key` and returns its value.
    pub fn delete(&mut self, key: &K) -> Result<V> {
        let removed = match self.balancing {
            Balancing::Unbalanced => bst::remove(&mut self.root, key),
            Balancing::RedBlack => llrb::remove(&mut self.root, key),
        };
        log::trace!(
            "delete ({:?}): found={}, len={}",
            self.balancing,
            removed.is_some(),
            self.len()
        );
        removed.ok_or(Error::KeyNotFound)
    }

    /// Removes the smallest key and returns it with its value.
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        let removed = match self.balancing {
            Balancing::Unbalanced => bst::remove_min(&mut self.root),
            Balancing::RedBlack => llrb::remove_min(&mut self.root),
        };
        log::trace!("delete_min ({:?}): len={}", self.balancing, self.len());
        removed.ok_or(Error::EmptyTree)
    }

    pub fn min(&self) -> Result<&K> {
        navigate::first(self.root.as_deref())
            .map(|n| &n.key)
            .ok_or(Error::EmptyTree)
    }

    pub fn max(&self) -> Result<&K> {
        navigate::last(self.root.as_deref())
            .map(|n| &n.key)
            .ok_or(Error::EmptyTree)
    }

    /// Largest key `<= key`.
    pub fn floor(&self, key: &K) -> Result<&K> {
        navigate::floor(self.root.as_deref(), key).ok_or(Error::KeyOutOfRange)
    }

    /// Smallest key `>= key`.
    pub fn ceil(&self, key: &K) -> Result<&K> {
        navigate::ceil(self.root.as_deref(), key).ok_or(Error::KeyOutOfRange)
    }

    /// Number of keys strictly less than `key`. `key` need not be present.
    pub fn rank(&self, key: &K) -> usize {
        navigate::rank(self.root.as_deref(), key)
    }

    /// Key with rank `index` (0-indexed).
    pub fn select(&self, index: usize) -> Result<&K> {
        navigate::select(self.root.as_deref(), index)
            .map(|n| &n.key)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Number of keys in `[lo, hi]`.
    pub fn range_count(&self, lo: &K, hi: &K) -> usize {
        if lo > hi {
            return 0;
        }
        self.rank(hi) - self.rank(lo) + usize::from(self.contains(hi))
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn range<R: RangeBounds<K>>(&self, range: R) -> Range<'_, K, V> {
        Range::new(self.root.as_deref(), range)
    }

    /// Keys in breadth-first order, level by level from the root.
    pub fn level_order(&self) -> Vec<&K> {
        navigate::level_order(self.root.as_deref())
    }

    /// Edges on the longest root-to-node path; 0 for empty and single-node tables.
    pub fn height(&self) -> usize {
        navigate::height(self.root.as_deref())
    }

    /// Checks ordering, subtree sizes and, for red-black tables, the color rules.
    pub fn validate(&self) -> Result<()> {
        check::validate(self.root.as_deref(), self.balancing)
    }
}

impl<K: Clone, V: Clone> Clone for SymbolTable<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_tree(self.root.as_deref()),
            balancing: self.balancing,
        }
    }
}

/// Unbalanced tables can be as deep as they are long, so nodes are freed from
/// an explicit stack rather than by the recursive drop glue.
impl<K, V> Drop for SymbolTable<K, V> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<K: Ord, V> Default for SymbolTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SymbolTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(Iter::new(self.root.as_deref()))
            .finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for SymbolTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SymbolTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a SymbolTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
