use crate::bst::map::{BstMap, BstMapIntoIter, BstMapIter};
use std::borrow::Borrow;

/// An ordered set implemented using a plain binary search tree.
///
/// No rebalancing is performed; see [`BstMap`](crate::bst::BstMap) for the
/// performance caveats.
///
/// # Examples
///
/// ```
/// use balanced_collections::bst::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.remove(&0), Some(0));
/// ```
pub struct BstSet<T> {
    map: BstMap<T, ()>,
}

impl<T> BstSet<T> {
    /// Constructs a new, empty `BstSet<T>`.
    pub fn new() -> Self {
        BstSet { map: BstMap::new() }
    }

    /// Inserts a key into the set, returning and replacing the old key if it
    /// was already present.
    pub fn insert(&mut self, key: T) -> Option<T>
    where
        T: Ord,
    {
        self.map.insert(key, ()).map(|pair| pair.0)
    }

    /// Removes a key from the set, returning it if it was present.
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the greatest key less than or equal to a particular key, if it
    /// exists.
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.floor(key)
    }

    /// Returns the smallest key greater than or equal to a particular key, if
    /// it exists.
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set, if it exists.
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set, if it exists.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set yielding keys using in-order
    /// traversal.
    pub fn iter(&self) -> BstSetIter<'_, T> {
        BstSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T> IntoIterator for BstSet<T> {
    type IntoIter = BstSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T>
where
    T: 'a,
{
    type IntoIter = BstSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BstSet<T>`.
pub struct BstSetIntoIter<T> {
    map_iter: BstMapIntoIter<T, ()>,
}

impl<T> Iterator for BstSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `BstSet<T>`.
pub struct BstSetIter<'a, T>
where
    T: 'a,
{
    map_iter: BstMapIter<'a, T, ()>,
}

impl<'a, T> Iterator for BstSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<T> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BstSet;

    #[test]
    fn test_len_empty() {
        let set: BstSet<u32> = BstSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_remove() {
        let mut set = BstSet::new();
        assert_eq!(set.insert(1), None);
        assert!(set.contains(&1));
        assert_eq!(set.insert(1), Some(1));
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
    }

    #[test]
    fn test_iter() {
        let mut set = BstSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }
}
