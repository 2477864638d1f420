//! An ordered set based on an AVL tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use super::map::{self, Map};

/// An ordered set based on an AVL tree.
///
/// The tree is height-balanced, so `insert`, `remove`, and `contains` all run
/// in O(log n) time in the worst case, no matter the order in which items are
/// inserted.
///
/// The behavior of this set is undefined if an item's ordering relative to any
/// other item changes while the item is in the set. This is normally only
/// possible through `Cell`, `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    map: Map<T, (), C>,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set { map: Map::new() } }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = avl::Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set { map: Map::with_cmp(cmp) } }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.map.len() }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::Compare;
    ///
    /// let set: avl::Set<i32> = avl::Set::new();
    /// assert!(set.cmp().compares_lt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { self.map.cmp() }

    /// Removes all items from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    ///
    /// set.clear();
    ///
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.map.clear(); }

    /// Inserts an item into the set, returning `true` if the set did not
    /// already contain the item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(!set.contains(&1));
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, item: T) -> bool { self.map.insert(item, ()).is_none() }

    /// Removes the given item from the set, returning `true` if the set
    /// contained the item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(&1));
    /// assert!(set.remove(&1));
    ///
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.remove(item).is_some()
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.contains_key(item)
    }

    /// Returns a reference to the set's first (minimum) item, or `None` if the
    /// set is empty.
    ///
    /// The name avoids `min`, which the `Ord` impl would otherwise shadow with
    /// the prelude's by-value `Ord::min` on owned sets.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.first(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> { self.map.first().map(|e| e.0) }

    /// Returns a reference to the set's last (maximum) item, or `None` if the
    /// set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.last(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> { self.map.last().map(|e| e.0) }

    /// Removes and returns the set's first (minimum) item, or `None` if the
    /// set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.remove_first(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.remove_first(), Some(1));
    /// ```
    pub fn remove_first(&mut self) -> Option<T> { self.map.remove_first().map(|e| e.0) }

    /// Removes and returns the set's last (maximum) item, or `None` if the set
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.remove_last(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.remove_last(), Some(3));
    /// ```
    pub fn remove_last(&mut self) -> Option<T> { self.map.remove_last().map(|e| e.0) }

    /// Returns an iterator over the set.
    ///
    /// The iterator yields the items in ascending order according to the set's
    /// comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// set.extend(vec![5, 3, 8, 1, 4, 7, 9]);
    ///
    /// let items: Vec<u32> = set.iter().cloned().collect();
    /// assert_eq!(items, [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> { Iter(self.map.iter()) }

    /// Checks that every node's balance factor lies in [-1, 1].
    ///
    /// This always holds unless the implementation is defective; the method
    /// exists for tests and diagnostics and performs a full O(n) traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: avl::Set<u32> = (0..100).collect();
    /// assert!(set.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool { self.map.is_balanced() }

    /// Returns the height of the tree, where an empty tree has height -1 and
    /// a tree with a single item has height 0. Diagnostic only.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.height(), -1);
    ///
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    ///
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> i32 { self.map.height() }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some(item) = it.next() {
            write!(f, "{:?}", item)?;
            for item in it { write!(f, ", {:?}", item)?; }
        }

        write!(f, "}}")
    }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Set { map: Map::default() } }
}

impl<T, C> Extend<T> for Set<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C> iter::FromIterator<T> for Set<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        let mut set = Set::default();
        set.extend(it);
        set
    }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { self.map.hash(h); }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the items in ascending order according to the set's
    /// comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.map.into_iter()) }
}

impl<T, C> PartialEq for Set<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.map == other.map }
}

impl<T, C> Eq for Set<T, C> where T: Eq, C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where T: PartialOrd, C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, C> Ord for Set<T, C> where T: Ord, C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// An iterator that consumes the set.
///
/// The iterator yields the items in ascending order according to the set's
/// comparator.
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut set = avl::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in set {
///     println!("{:?}", item);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<T>(map::IntoIter<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back().map(|e| e.0) }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator over the set.
///
/// The iterator yields the items in ascending order according to the set's
/// comparator.
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut set = avl::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in &set {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T>(map::Iter<'a, T, ()>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back().map(|e| e.0) }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
