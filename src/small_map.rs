//! An insertion-ordered map based on two parallel `SmallVec`s, one for keys and one for values.
//!
//! The point of this map is a small footprint per instance, for programs that hold millions of maps
//! with only a handful of entries each. With the default inline size of 0, an empty map does not
//! allocate at all. The heap storage is allocated on the first insert and released again by [clear].
//! A larger inline size `N` stores up to `N` entries without any heap allocation.
//!
//! A disadvantage is that lookup, insertion and removal are linear scans (O(N)), so this is slow for
//! large maps. Keys only need to implement `Eq`.
//!
//! [clear]: OrderedSmallMap::clear
use crate::cursor::{CursorError, CursorState};
use crate::scan;
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::{FromIterator, FusedIterator, Zip};
use std::ops::Index;
use std::slice;

/// A map with unique keys that iterates in insertion order.
///
/// `keys[i]` is mapped to `values[i]`. Both sequences always have the same length.
pub struct OrderedSmallMap<K, V, const N: usize = 0> {
    keys: SmallVec<[K; N]>,
    values: SmallVec<[V; N]>,
}

impl<K, V, const N: usize> OrderedSmallMap<K, V, N> {
    /// an empty map. Does not allocate.
    pub fn new() -> Self {
        Self {
            keys: SmallVec::new(),
            values: SmallVec::new(),
        }
    }

    /// number of mappings
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// true if the entries are stored on the heap rather than inline
    pub fn spilled(&self) -> bool {
        self.keys.spilled()
    }

    pub fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    /// Removes all mappings and releases the heap storage, if any.
    pub fn clear(&mut self) {
        self.keys = SmallVec::new();
        self.values = SmallVec::new();
    }

    pub fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// An iterator over the mappings, in insertion order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.keys.iter().zip(self.values.iter()))
    }

    /// An iterator over the mappings with mutable values, in insertion order
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut(self.keys.iter().zip(self.values.iter_mut()))
    }

    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub fn values(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    pub fn values_mut(&mut self) -> slice::IterMut<'_, V> {
        self.values.iter_mut()
    }

    /// A cursor over the live entries of this map, which can remove the entry it produced last.
    ///
    /// ```
    /// use small_collections::OrderedSmallMap;
    ///
    /// let mut map: OrderedSmallMap<&str, u32> = vec![("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    /// let mut cursor = map.cursor();
    /// while let Some((_, v)) = cursor.next_entry() {
    ///     if *v == 2 {
    ///         cursor.remove_current();
    ///     }
    /// }
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    /// ```
    pub fn cursor(&mut self) -> Cursor<'_, K, V, N> {
        Cursor {
            map: self,
            state: CursorState::new(),
        }
    }

    /// retain all mappings matching a predicate, keeping their order
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut f: F) {
        let mut cursor = self.cursor();
        while let Some((k, v)) = cursor.next_entry() {
            if !f(k, v) {
                cursor.remove_current();
            }
        }
    }

    fn remove_index(&mut self, index: usize) -> (K, V) {
        (self.keys.remove(index), self.values.remove(index))
    }
}

impl<K: Eq, V, const N: usize> OrderedSmallMap<K, V, N> {
    /// Inserts a mapping, returning the previous value for the key, if any.
    ///
    /// A new key is appended at the end. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match scan::position(self.keys.as_slice(), &key) {
            Some(index) => Some(std::mem::replace(&mut self.values[index], value)),
            None => {
                self.keys.push(key);
                self.values.push(value);
                None
            }
        }
    }
}

impl<K, V, const N: usize> OrderedSmallMap<K, V, N> {
    /// lookup of a mapping. Time complexity is O(N). Linear scan.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = scan::position(self.keys.as_slice(), key)?;
        Some(&self.values[index])
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = scan::position(self.keys.as_slice(), key)?;
        Some(&mut self.values[index])
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = scan::position(self.keys.as_slice(), key)?;
        Some((&self.keys[index], &self.values[index]))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        scan::position(self.keys.as_slice(), key).is_some()
    }

    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        scan::position(self.values.as_slice(), value).is_some()
    }

    /// Removes a mapping, returning its value. The following entries move down by one.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = scan::position(self.keys.as_slice(), key)?;
        Some(self.remove_index(index))
    }
}

/// A removing cursor over an [OrderedSmallMap], created by [OrderedSmallMap::cursor].
///
/// The cursor holds the map mutably borrowed, so the map can only change through the cursor while it is alive.
pub struct Cursor<'a, K, V, const N: usize> {
    map: &'a mut OrderedSmallMap<K, V, N>,
    state: CursorState,
}

impl<'a, K, V, const N: usize> Cursor<'a, K, V, N> {
    /// true if there is an entry at or after the cursor position
    pub fn has_next(&self) -> bool {
        self.state.has_next(self.map.len())
    }

    /// Produces the next entry and makes it the current one.
    pub fn next_entry(&mut self) -> Option<(&K, &mut V)> {
        let index = self.state.advance(self.map.len())?;
        let map = &mut *self.map;
        Some((&map.keys[index], &mut map.values[index]))
    }

    /// Removes the entry produced last, so the following call to [next_entry](Cursor::next_entry)
    /// produces the entry after it.
    ///
    /// # Panics
    ///
    /// If no entry was produced yet, or the current entry was already removed.
    pub fn remove_current(&mut self) -> (K, V) {
        match self.try_remove_current() {
            Ok(entry) => entry,
            Err(cause) => panic!("{}", cause),
        }
    }

    pub fn try_remove_current(&mut self) -> Result<(K, V), CursorError> {
        let index = self.state.take_current()?;
        Ok(self.map.remove_index(index))
    }
}

pub struct Iter<'a, K, V>(Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

pub struct IterMut<'a, K, V>(Zip<slice::Iter<'a, K>, slice::IterMut<'a, V>>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}
impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

pub struct IntoIter<K, V, const N: usize>(
    Zip<smallvec::IntoIter<[K; N]>, smallvec::IntoIter<[V; N]>>,
);

impl<K, V, const N: usize> Iterator for IntoIter<K, V, N> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, const N: usize> DoubleEndedIterator for IntoIter<K, V, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<K, V, const N: usize> ExactSizeIterator for IntoIter<K, V, N> {}
impl<K, V, const N: usize> FusedIterator for IntoIter<K, V, N> {}

impl<K, V, const N: usize> IntoIterator for OrderedSmallMap<K, V, N> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.keys.into_iter().zip(self.values.into_iter()))
    }
}

impl<'a, K, V, const N: usize> IntoIterator for &'a OrderedSmallMap<K, V, N> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, const N: usize> IntoIterator for &'a mut OrderedSmallMap<K, V, N> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, const N: usize> Default for OrderedSmallMap<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, const N: usize> Clone for OrderedSmallMap<K, V, N> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<K: Debug, V: Debug, const N: usize> Debug for OrderedSmallMap<K, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// maps are equal if they contain the same mappings, in any order
impl<K: Eq, V: PartialEq, const N: usize> PartialEq for OrderedSmallMap<K, V, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |w| v == w))
    }
}

impl<K: Eq, V: Eq, const N: usize> Eq for OrderedSmallMap<K, V, N> {}

/// consistent with `PartialEq`: the hash does not depend on the insertion order
impl<K: Hash + Eq, V: Hash, const N: usize> Hash for OrderedSmallMap<K, V, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        scan::hash_unordered(self.iter(), self.len(), state)
    }
}

impl<K, V, Q, const N: usize> Index<&Q> for OrderedSmallMap<K, V, N>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// If the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry found for key"),
        }
    }
}

impl<K: Eq, V, const N: usize> Extend<(K, V)> for OrderedSmallMap<K, V, N> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Eq + Copy + 'a, V: Copy + 'a, const N: usize> Extend<(&'a K, &'a V)>
    for OrderedSmallMap<K, V, N>
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(k, v)| (*k, *v)))
    }
}

/// Later duplicates overwrite the value of earlier ones, but the key keeps its first position.
impl<K: Eq, V, const N: usize> FromIterator<(K, V)> for OrderedSmallMap<K, V, N> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<K: Eq, V, S: BuildHasher, const N: usize> From<HashMap<K, V, S>> for OrderedSmallMap<K, V, N> {
    fn from(value: HashMap<K, V, S>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Eq, V, const N: usize> From<BTreeMap<K, V>> for OrderedSmallMap<K, V, N> {
    fn from(value: BTreeMap<K, V>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Eq, V, const N: usize, const M: usize> From<[(K, V); M]> for OrderedSmallMap<K, V, N> {
    fn from(value: [(K, V); M]) -> Self {
        IntoIterator::into_iter(value).collect()
    }
}
