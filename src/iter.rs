//! Sorted iteration over a heap
//!
//! Two ways to walk a heap in ascending order:
//!
//! - [`Iter`]: pops from a heap it owns. [`BinaryHeap::iter`] hands it a
//!   clone, so the original is untouched and can be iterated again.
//!   [`BinaryHeap::into_iter_sorted`] hands it the heap itself.
//! - [`Consume`]: pops from a borrowed heap. Whatever is not yielded stays in
//!   the heap as a valid heap.
//!
//! Both advance by one `pop` per element, so a full walk is O(n log n) and a
//! partial walk of k elements is O(k log n).

use std::fmt;
use std::iter::FusedIterator;

use crate::heap::BinaryHeap;

/// Owning iterator yielding elements in ascending order
///
/// Created by [`BinaryHeap::iter`] and [`BinaryHeap::into_iter_sorted`].
pub struct Iter<T> {
    heap: BinaryHeap<T>,
}

impl<T> Iter<T> {
    pub(crate) fn new(heap: BinaryHeap<T>) -> Self {
        Self { heap }
    }
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<T> {}

impl<T> FusedIterator for Iter<T> {}

impl<T: Clone> Clone for Iter<T> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.heap.as_slice()).finish()
    }
}

/// Iterator that pops elements from a borrowed heap in ascending order
///
/// Created by [`BinaryHeap::consume`].
pub struct Consume<'a, T> {
    heap: &'a mut BinaryHeap<T>,
}

impl<'a, T> Consume<'a, T> {
    pub(crate) fn new(heap: &'a mut BinaryHeap<T>) -> Self {
        Self { heap }
    }
}

impl<T> Iterator for Consume<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Consume<'_, T> {}

impl<T> FusedIterator for Consume<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Consume<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Consume").field(&self.heap.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::BinaryHeap;

    fn heap_of(values: &[i32]) -> BinaryHeap<i32> {
        BinaryHeap::from_iter_with(values.iter().copied(), |a: &i32, b: &i32| a.cmp(b))
    }

    #[test]
    fn test_iter_leaves_heap_alone() {
        let heap = heap_of(&[4, 3, 2, 1]);
        let before = heap.as_slice().to_vec();
        assert_eq!(heap.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(heap.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(heap.as_slice(), before.as_slice());
    }

    #[test]
    fn test_interleaved_iterators() {
        let heap = heap_of(&[5, 1, 3]);
        let mut a = heap.iter();
        let mut b = heap.iter();
        assert_eq!(a.next(), Some(1));
        assert_eq!(a.next(), Some(3));
        assert_eq!(b.next(), Some(1));
        assert_eq!(a.next(), Some(5));
        assert_eq!(a.next(), None);
        assert_eq!(b.collect::<Vec<_>>(), vec![3, 5]);
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_exact_size() {
        let mut heap = heap_of(&[3, 1, 2]);
        let mut iter = heap.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);

        let mut consume = heap.consume();
        assert_eq!(consume.len(), 3);
        consume.next();
        assert_eq!(consume.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_fused() {
        let mut iter = heap_of(&[1]).into_iter_sorted();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_consume_partial_leaves_valid_heap() {
        let mut heap = heap_of(&[9, 2, 7, 4, 1, 8]);
        {
            let mut consume = heap.consume();
            assert_eq!(consume.next(), Some(1));
            assert_eq!(consume.next(), Some(2));
        }
        assert_eq!(heap.len(), 4);
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Some(&4));
    }

    #[test]
    fn test_for_loop_over_reference() {
        let heap = heap_of(&[2, 3, 1]);
        let mut seen = Vec::new();
        for item in &heap {
            seen.push(item);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(heap.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_iter_clone_snapshot() {
        let heap = heap_of(&[3, 1, 2]);
        let mut iter = heap.iter();
        iter.next();
        let rest = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), rest.collect::<Vec<_>>());
    }
}
