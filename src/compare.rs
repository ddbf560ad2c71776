//! Comparators
//!
//! A heap is ordered by a [`CompareFn`], a shared closure returning an
//! [`Ordering`]. `Less` means the first argument comes out of the heap first,
//! `Equal` means the two are interchangeable, and `Greater` means the second
//! argument comes out first.
//!
//! The comparator must be a total preorder: consistent across calls and
//! transitive. The heap never checks this. An inconsistent comparator does not
//! cause undefined behaviour, but the order in which elements come out is then
//! unspecified.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{compare, BinaryHeap};
//!
//! let mut heap = BinaryHeap::with_compare_fn(compare::by_key(|s: &&str| s.len()));
//! heap.push("three");
//! heap.push("a");
//! heap.push("to");
//! assert_eq!(heap.pop(), Some("a"));
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

/// A shared comparison function
///
/// Clones of a heap share the same comparator.
pub type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Wraps a closure into a [`CompareFn`]
pub fn from_fn<T, F>(f: F) -> CompareFn<T>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Smallest element first, per `T`'s [`Ord`]
pub fn ascending<T: Ord + 'static>() -> CompareFn<T> {
    Arc::new(|a: &T, b: &T| a.cmp(b))
}

/// Largest element first, per `T`'s [`Ord`]
pub fn descending<T: Ord + 'static>() -> CompareFn<T> {
    Arc::new(|a: &T, b: &T| b.cmp(a))
}

/// Smallest key first, where the key is extracted by `key`
pub fn by_key<T, K, F>(key: F) -> CompareFn<T>
where
    T: 'static,
    K: Ord + 'static,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    Arc::new(move |a: &T, b: &T| key(a).cmp(&key(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending() {
        let cmp = ascending::<i32>();
        assert_eq!(cmp(&1, &2), Ordering::Less);
        assert_eq!(cmp(&2, &2), Ordering::Equal);
        assert_eq!(cmp(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_descending() {
        let cmp = descending::<i32>();
        assert_eq!(cmp(&1, &2), Ordering::Greater);
        assert_eq!(cmp(&2, &2), Ordering::Equal);
        assert_eq!(cmp(&3, &2), Ordering::Less);
    }

    #[test]
    fn test_by_key() {
        let cmp = by_key(|p: &(i32, &str)| p.0);
        assert_eq!(cmp(&(1, "z"), &(2, "a")), Ordering::Less);
        // ties on the key, regardless of the payload
        assert_eq!(cmp(&(2, "z"), &(2, "a")), Ordering::Equal);
    }

    #[test]
    fn test_from_fn_shares() {
        let cmp = from_fn(|a: &f64, b: &f64| a.total_cmp(b));
        let shared = Arc::clone(&cmp);
        assert_eq!(shared(&-1.0, &0.5), Ordering::Less);
        assert_eq!(Arc::strong_count(&cmp), 2);
    }
}
