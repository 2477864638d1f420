//! An ordered map based on an AVL tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::ops;
use super::node::{self, Dir, Left, LinkExt, Node, Right};

/// An ordered map based on an AVL tree.
///
/// The tree is height-balanced, so `insert`, `remove`, and lookup all run in
/// O(log n) time in the worst case, no matter the order in which keys are
/// inserted.
///
/// The behavior of this map is undefined if a key's ordering relative to any
/// other key changes while the key is in the map. This is normally only
/// possible through `Cell`, `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = avl::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { root: None, len: 0, cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::Compare;
    ///
    /// let map: avl::Map<i32, &str> = avl::Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.iter().next(), Some((&1, &"a")));
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the map, returning the previous value, if any,
    /// associated with the key.
    ///
    /// Inserting a key that is already present replaces its value and leaves
    /// the tree's structure unchanged; inserting a new key adds a single leaf
    /// and rebalances the tree along the path back to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old_value = node::insert(&mut self.root, &self.cmp, key, value);
        if old_value.is_none() { self.len += 1; }
        old_value
    }

    /// Removes and returns the entry corresponding to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let key_value = node::remove(&mut self.root, &self.cmp, key);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).map(Node::value)
    }

    /// Returns a mutable reference to the value associated with the given key,
    /// or `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key).map(Node::value_mut)
    }

    /// Returns a reference to the map's first entry, the one with the minimum
    /// key, or `None` if the map is empty.
    ///
    /// The name avoids `min`, which the `Ord` impl would otherwise shadow with
    /// the prelude's by-value `Ord::min` on owned maps.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.first(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// ```
    pub fn first(&self) -> Option<(&K, &V)> {
        Left::extremum(&self.root).map(Node::key_value)
    }

    /// Returns a reference to the map's last entry, the one with the maximum
    /// key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.last(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.last(), Some((&3, &"c")));
    /// ```
    pub fn last(&self) -> Option<(&K, &V)> {
        Right::extremum(&self.root).map(Node::key_value)
    }

    /// Removes and returns the map's first entry, the one with the minimum
    /// key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.remove_first(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove_first(), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn remove_first(&mut self) -> Option<(K, V)> {
        let key_value = Left::remove_extremum(&mut self.root);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Removes and returns the map's last entry, the one with the maximum key,
    /// or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.remove_last(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove_last(), Some((3, "c")));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn remove_last(&mut self) -> Option<(K, V)> {
        let key_value = Right::remove_extremum(&mut self.root);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Returns an iterator over the map.
    ///
    /// The iterator yields the entries in ascending order according to the
    /// map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(node::Iter::new(self.root.as_node_ref(), self.len))
    }

    /// Checks that every node's balance factor lies in [-1, 1].
    ///
    /// This always holds unless the implementation is defective; the method
    /// exists for tests and diagnostics and performs a full O(n) traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// for key in 0..100 {
    ///     map.insert(key, ());
    /// }
    ///
    /// assert!(map.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(&self.root)
    }

    /// Returns the height of the tree, where an empty tree has height -1 and
    /// a tree with a single entry has height 0. Diagnostic only.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    /// assert_eq!(map.height(), -1);
    ///
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// map.insert(3, "c");
    ///
    /// // Sorted insertion triggered a rotation at the root, so the three
    /// // entries form a perfect tree of height 1 rather than a chain.
    /// assert_eq!(map.height(), 1);
    /// ```
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some((key, value)) = it.next() {
            write!(f, "{:?}: {:?}", key, value)?;
            for (key, value) in it { write!(f, ", {:?}: {:?}", key, value)?; }
        }

        write!(f, "}}")
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(C::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) {
        for (key, value) in it { self.insert(key, value); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Self {
        let mut map = Map::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        self.len().hash(h);
        for entry in self { entry.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Returns an iterator that consumes the map.
    ///
    /// The iterator yields the entries in ascending order according to the
    /// map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), Some((3, "c")));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter(node::Iter::new(self.root, self.len))
    }
}

impl<K, V, C> PartialEq for Map<K, V, C> where K: PartialEq, V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for Map<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C> where K: PartialOrd, V: PartialOrd, C: Compare<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K, V, C> Ord for Map<K, V, C> where K: Ord, V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's
/// comparator.
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut map = avl::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for entry in map {
///     println!("{:?}", entry);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<K, V>(node::Iter<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map.
///
/// The iterator yields the entries in ascending order according to the map's
/// comparator.
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = avl::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for entry in &map {
///     println!("{:?}", entry);
/// }
/// ```
pub struct Iter<'a, K, V>(node::Iter<&'a Node<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
