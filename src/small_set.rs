//! An insertion-ordered set based on a `SmallVec` of elements.
//!
//! Same trade as [OrderedSmallMap](crate::OrderedSmallMap): membership is a linear scan, but an
//! empty set does not allocate, and with an inline size `N > 0` small sets do not allocate at all.
use crate::cursor::{CursorError, CursorState};
use crate::scan;
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FromIterator;
use std::slice;

/// A set of unique elements that iterates in insertion order.
pub struct OrderedSmallSet<T, const N: usize = 0> {
    elements: SmallVec<[T; N]>,
}

impl<T, const N: usize> OrderedSmallSet<T, N> {
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// true if the elements are stored on the heap rather than inline
    pub fn spilled(&self) -> bool {
        self.elements.spilled()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Removes all elements and releases the heap storage, if any.
    pub fn clear(&mut self) {
        self.elements = SmallVec::new();
    }

    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// An iterator that returns the elements in insertion order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// A cursor over the live elements of this set, which can remove the element it produced last.
    pub fn cursor(&mut self) -> SetCursor<'_, T, N> {
        SetCursor {
            set: self,
            state: CursorState::new(),
        }
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut cursor = self.cursor();
        while let Some(element) = cursor.next_element() {
            if !f(element) {
                cursor.remove_current();
            }
        }
    }
}

impl<T: Eq, const N: usize> OrderedSmallSet<T, N> {
    /// Adds an element at the end. Returns false and leaves the set unchanged if it is already present.
    pub fn insert(&mut self, value: T) -> bool {
        if scan::position(self.elements.as_slice(), &value).is_some() {
            false
        } else {
            self.elements.push(value);
            true
        }
    }
}

impl<T, const N: usize> OrderedSmallSet<T, N> {
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        scan::position(self.elements.as_slice(), value).is_some()
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = scan::position(self.elements.as_slice(), value)?;
        Some(&self.elements[index])
    }

    /// Removes an element, returning whether it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the stored element equal to `value`.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = scan::position(self.elements.as_slice(), value)?;
        Some(self.elements.remove(index))
    }
}

/// A removing cursor over an [OrderedSmallSet], created by [OrderedSmallSet::cursor].
pub struct SetCursor<'a, T, const N: usize> {
    set: &'a mut OrderedSmallSet<T, N>,
    state: CursorState,
}

impl<'a, T, const N: usize> SetCursor<'a, T, N> {
    pub fn has_next(&self) -> bool {
        self.state.has_next(self.set.len())
    }

    pub fn next_element(&mut self) -> Option<&T> {
        let index = self.state.advance(self.set.len())?;
        Some(&self.set.elements[index])
    }

    /// Removes the element produced last.
    ///
    /// # Panics
    ///
    /// If no element was produced yet, or the current element was already removed.
    pub fn remove_current(&mut self) -> T {
        match self.try_remove_current() {
            Ok(element) => element,
            Err(cause) => panic!("{}", cause),
        }
    }

    pub fn try_remove_current(&mut self) -> Result<T, CursorError> {
        let index = self.state.take_current()?;
        Ok(self.set.elements.remove(index))
    }
}

impl<T, const N: usize> Default for OrderedSmallSet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for OrderedSmallSet<T, N> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T: Debug, const N: usize> Debug for OrderedSmallSet<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Eq, const N: usize> PartialEq for OrderedSmallSet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        scan::same_elements(self.as_slice(), other.as_slice())
    }
}

impl<T: Eq, const N: usize> Eq for OrderedSmallSet<T, N> {}

impl<T: Hash + Eq, const N: usize> Hash for OrderedSmallSet<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        scan::hash_unordered(self.iter(), self.len(), state)
    }
}

impl<T, const N: usize> IntoIterator for OrderedSmallSet<T, N> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; N]>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a OrderedSmallSet<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq, const N: usize> Extend<T> for OrderedSmallSet<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Eq + Copy, const N: usize> Extend<&'a T> for OrderedSmallSet<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T: Eq, const N: usize> FromIterator<T> for OrderedSmallSet<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<T: Eq, S: BuildHasher, const N: usize> From<HashSet<T, S>> for OrderedSmallSet<T, N> {
    fn from(value: HashSet<T, S>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Eq, const N: usize> From<BTreeSet<T>> for OrderedSmallSet<T, N> {
    fn from(value: BTreeSet<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Eq, const N: usize, const M: usize> From<[T; M]> for OrderedSmallSet<T, N> {
    fn from(value: [T; M]) -> Self {
        IntoIterator::into_iter(value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::{btreeset, hashset};
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    type Test = OrderedSmallSet<u8>;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[quickcheck]
    fn equal_sets_hash_equal(elements: Vec<u8>) -> bool {
        let a: Test = elements.iter().cloned().collect();
        let b: Test = elements.iter().rev().cloned().collect();
        a == b && hash_of(&a) == hash_of(&b)
    }

    #[test]
    fn sets_as_hash_keys() {
        let mut seen: HashSet<Test> = HashSet::new();
        assert!(seen.insert([1, 2, 3].into()));
        assert!(!seen.insert([3, 1, 2].into()));
        assert!(seen.insert([1, 2].into()));
        assert!(seen.contains(&Test::from([2, 1])));
        assert_eq!(seen.len(), 2);
    }

    impl<T: Arbitrary + Eq> Arbitrary for OrderedSmallSet<T> {
        fn arbitrary(g: &mut Gen) -> Self {
            let t: Vec<T> = Arbitrary::arbitrary(g);
            t.into_iter().collect()
        }
    }

    #[quickcheck]
    fn len_is_number_of_distinct_elements(elements: Vec<u8>) -> bool {
        let set: Test = elements.iter().cloned().collect();
        let distinct: BTreeSet<u8> = elements.into_iter().collect();
        set.len() == distinct.len()
    }

    #[quickcheck]
    fn iterates_in_first_insertion_order(elements: Vec<u8>) -> bool {
        let mut expected = Vec::new();
        for e in elements.iter() {
            if !expected.contains(e) {
                expected.push(*e);
            }
        }
        let set: Test = elements.into_iter().collect();
        set.as_slice() == expected.as_slice()
    }

    #[quickcheck]
    fn insert_remove_consistent(set: Test, value: u8) -> bool {
        let mut set = set;
        let was_present = set.contains(&value);
        let added = set.insert(value);
        let len = set.len();
        let removed = set.remove(&value);
        added != was_present && removed && set.len() == len - 1 && !set.contains(&value)
    }

    #[quickcheck]
    fn cursor_removal_visits_each_element_once(set: Test) -> bool {
        let expected: Vec<u8> = set.iter().copied().collect();
        let kept: Vec<u8> = set.iter().copied().filter(|e| e % 2 == 1).collect();
        let mut set = set;
        let mut visited = Vec::new();
        let mut cursor = set.cursor();
        while let Some(e) = cursor.next_element() {
            let e = *e;
            visited.push(e);
            if e % 2 == 0 {
                cursor.remove_current();
            }
        }
        visited == expected && set.as_slice() == kept.as_slice()
    }

    #[quickcheck]
    fn round_trip_through_hash_set(a: Test) -> bool {
        let h: HashSet<u8> = a.iter().copied().collect();
        let b: Test = h.into();
        a == b
    }

    #[test]
    fn add_remove_scenario() {
        let mut s = OrderedSmallSet::<&str>::new();
        assert!(s.insert("x"));
        assert_eq!(s.len(), 1);
        assert!(!s.insert("x"));
        assert_eq!(s.len(), 1);
        assert!(s.insert("y"));
        assert_eq!(s.len(), 2);
        assert!(s.remove("x"));
        assert_eq!(s.len(), 1);
        assert!(!s.remove("x"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn lazy_allocation_and_clear() {
        let mut s = Test::new();
        assert!(s.is_empty());
        assert!(!s.spilled());
        assert_eq!(s.capacity(), 0);
        s.extend(0..100);
        assert!(s.spilled());
        s.clear();
        assert!(s.is_empty());
        assert!(!s.spilled());
        assert_eq!(s.iter().next(), None);
        assert_eq!(s, Test::new());
    }

    #[test]
    fn inline_elements_do_not_spill() {
        let s: OrderedSmallSet<u64, 4> = [1, 2, 3, 2, 1].into();
        assert_eq!(s.len(), 3);
        assert!(!s.spilled());
    }

    #[test]
    fn from_std_sets() {
        let source = hashset! {"value0", "value1", "value2"};
        let s: OrderedSmallSet<_> = source.clone().into();
        assert_eq!(s.len(), source.len());
        assert!(source.iter().all(|v| s.contains(v)));
        let back: HashSet<_> = s.into_iter().collect();
        assert_eq!(back, source);

        let sorted: OrderedSmallSet<u32> = btreeset! {3, 1, 2}.into();
        assert_eq!(sorted.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn take_returns_stored_element() {
        let mut s: OrderedSmallSet<String> = ["a".to_string(), "b".to_string()].into();
        assert_eq!(s.get("b"), Some(&"b".to_string()));
        assert_eq!(s.take("a"), Some("a".to_string()));
        assert_eq!(s.take("a"), None);
        assert_eq!(s.as_slice(), &["b".to_string()]);
    }

    #[test]
    fn equality_and_debug() {
        let a: Test = [1, 2, 3].into();
        let b: Test = [3, 2, 1].into();
        assert_eq!(a, b);
        assert_ne!(a, Test::from([1, 2]));
        assert_eq!(format!("{:?}", b), "{3, 2, 1}");
    }

    #[test]
    fn retain_and_extend_by_reference() {
        let mut s: Test = (0..10).collect();
        s.retain(|e| e % 2 == 0);
        assert_eq!(s.as_slice(), &[0, 2, 4, 6, 8]);
        s.extend(&[8, 9]);
        assert_eq!(s.as_slice(), &[0, 2, 4, 6, 8, 9]);
    }

    #[test]
    fn cursor_misuse_is_an_error() {
        let mut s: Test = [1, 2].into();
        let mut cursor = s.cursor();
        assert!(cursor.has_next());
        assert_eq!(cursor.try_remove_current(), Err(CursorError::NoCurrent));
        assert_eq!(cursor.next_element(), Some(&1));
        assert_eq!(cursor.try_remove_current(), Ok(1));
        assert_eq!(cursor.try_remove_current(), Err(CursorError::AlreadyRemoved));
        assert_eq!(cursor.next_element(), Some(&2));
        assert!(!cursor.has_next());
        assert_eq!(s.as_slice(), &[2]);
    }

    #[test]
    #[should_panic(expected = "remove called twice without producing the next item")]
    fn cursor_double_remove_panics() {
        let mut s: Test = [1, 2].into();
        let mut cursor = s.cursor();
        cursor.next_element();
        cursor.remove_current();
        cursor.remove_current();
    }
}
