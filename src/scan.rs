// linear scan shared by the map and the set. Lookups only need Eq, never Hash or Ord.
use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// index of the first item equal to `key`
pub(crate) fn position<T, Q>(items: &[T], key: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Eq + ?Sized,
{
    items.iter().position(|item| item.borrow() == key)
}

/// true if both slices hold the same elements, ignoring order.
///
/// Both slices must be free of duplicates.
pub(crate) fn same_elements<T: Eq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().all(|x| position(b, x).is_some())
}

/// Feeds an order-insensitive hash of `items` into `state`.
///
/// Each item is hashed on its own with a fixed-key hasher and the results are summed, so equal
/// collections hash the same whatever their insertion order.
pub(crate) fn hash_unordered<T: Hash, H: Hasher>(
    items: impl Iterator<Item = T>,
    len: usize,
    state: &mut H,
) {
    let sum = items
        .map(|item| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            hasher.finish()
        })
        .fold(0u64, u64::wrapping_add);
    state.write_u64(sum);
    state.write_usize(len);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_finds_first_match() {
        let items = ["a", "b", "c"];
        assert_eq!(position(&items, "b"), Some(1));
        assert_eq!(position(&items, "d"), None);
        assert_eq!(position::<&str, &str>(&[], &"a"), None);
    }

    #[test]
    fn position_borrowed_key() {
        let items = vec![String::from("x"), String::from("y")];
        assert_eq!(position(&items, "y"), Some(1));
    }

    #[test]
    fn position_none_is_a_valid_key() {
        let items = [Some(1), None, Some(3)];
        assert_eq!(position(&items, &None), Some(1));
    }

    fn hash_of<T: Hash>(items: &[T]) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_unordered(items.iter(), items.len(), &mut hasher);
        hasher.finish()
    }

    #[test]
    fn hash_unordered_ignores_order() {
        assert_eq!(hash_of(&[(1, 1), (2, 2)]), hash_of(&[(2, 2), (1, 1)]));
        assert_ne!(hash_of(&[(1, 1), (2, 2)]), hash_of(&[(1, 2), (2, 1)]));
        assert_ne!(hash_of::<u8>(&[]), hash_of(&[0u8]));
    }

    #[test]
    fn same_elements_ignores_order() {
        assert!(same_elements(&[1, 2, 3], &[3, 1, 2]));
        assert!(!same_elements(&[1, 2, 3], &[1, 2]));
        assert!(!same_elements(&[1, 2, 4], &[1, 2, 3]));
        assert!(same_elements::<u8>(&[], &[]));
    }
}
