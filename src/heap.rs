//! Binary heap ordered by a runtime comparator
//!
//! [`BinaryHeap`] keeps its elements in a `Vec` laid out as an implicit
//! complete binary tree, with the children of slot `i` at `2i + 1` and
//! `2i + 2`, and orders them with a [`CompareFn`] it owns. The element
//! that compares least is always at the root. The comparator can be swapped
//! at any time with [`reorder`](BinaryHeap::reorder), which rebuilds the
//! heap in linear time.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity         |
//! |--------------------|--------------------|
//! | `push`             | O(log n)           |
//! | `pop`              | O(log n)           |
//! | `peek`             | O(1)               |
//! | `pushpop`          | O(log n)           |
//! | `replace`          | O(log n)           |
//! | `remove`           | O(n)               |
//! | `reorder`          | O(n)               |
//! | `from_iter_with`   | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a.cmp(b));
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//!
//! // Flip the order in place
//! heap.reorder(|a: &i32, b: &i32| b.cmp(a));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::sync::Arc;

use crate::compare::{self, CompareFn};
use crate::error::HeapError;
use crate::index::{child_left, child_right, last_parent, parent};
use crate::iter::{Consume, Iter};

/// A binary min-heap under a caller-supplied comparator
///
/// "Min" is relative to the comparator: the element for which the comparator
/// returns [`Ordering::Less`] against every other element is popped first.
/// Pass a reversed comparator (or use [`BinaryHeap::max_heap`]) to get
/// max-heap behaviour.
///
/// Equal elements come out in unspecified order.
pub struct BinaryHeap<T> {
    /// Elements as an implicit complete binary tree
    data: Vec<T>,
    compare: CompareFn<T>,
}

impl<T> BinaryHeap<T> {
    /// Creates an empty heap ordered by `compare`
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::with_compare_fn(Arc::new(compare))
    }

    /// Creates an empty heap ordered by an already shared comparator
    pub fn with_compare_fn(compare: CompareFn<T>) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with room for at least `capacity` elements
    ///
    /// The capacity is only a hint; the heap grows past it as needed.
    pub fn with_capacity<F>(capacity: usize, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            data: Vec::with_capacity(capacity),
            compare: Arc::new(compare),
        }
    }

    /// Builds a heap from every element of `iter`
    ///
    /// The elements are collected first and then arranged bottom-up, which
    /// is O(n) rather than the O(n log n) of pushing them one by one. The
    /// source is only read, never modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// let numbers = vec![4, 3, 2, 1];
    /// let heap = BinaryHeap::from_iter_with(numbers.iter().copied(), |a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(heap.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// assert_eq!(numbers, vec![4, 3, 2, 1]);
    /// ```
    pub fn from_iter_with<I, F>(iter: I, compare: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::from_vec(iter.into_iter().collect(), Arc::new(compare))
    }

    /// Builds a heap that takes ownership of `data`
    pub fn from_vec(data: Vec<T>, compare: CompareFn<T>) -> Self {
        let mut heap = Self { data, compare };
        heap.rebuild();
        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Releases unused capacity
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes every element, keeping the comparator
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the comparator currently ordering the heap
    pub fn compare_fn(&self) -> CompareFn<T> {
        Arc::clone(&self.compare)
    }

    /// The backing sequence, in heap order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the backing sequence in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns the least element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the least element, or `None` if the heap is empty
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.len() < 2 {
            return self.data.pop();
        }
        // swap_remove moves the last leaf into the root slot
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Some(top)
    }

    /// Pushes `item` and then pops the least element, in one sift
    ///
    /// Returns the same value as `push(item)` followed by `pop()`. When
    /// `item` would come out first anyway, it is handed straight back and the
    /// heap is not touched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from_iter_with([2, 4], |a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(heap.pushpop(1), 1);
    /// assert_eq!(heap.pushpop(3), 2);
    /// assert_eq!(heap.iter().collect::<Vec<_>>(), vec![3, 4]);
    /// ```
    pub fn pushpop(&mut self, item: T) -> T {
        let Some(top) = self.data.first() else {
            return item;
        };
        if (self.compare)(top, &item) == Ordering::Greater {
            return item;
        }
        let top = mem::replace(&mut self.data[0], item);
        self.sift_down(0);
        top
    }

    /// Pops the least element and then pushes `item`, in one sift
    ///
    /// Returns the same value as `pop()` followed by `push(item)`.
    ///
    /// # Panics
    /// Panics if the heap is empty. Use [`try_replace`](Self::try_replace)
    /// when emptiness is not known in advance.
    pub fn replace(&mut self, item: T) -> T {
        match self.try_replace(item) {
            Ok(top) => top,
            Err(err) => panic!("BinaryHeap::replace: {err}"),
        }
    }

    /// Checked variant of [`replace`](Self::replace)
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements. The heap is
    /// left unchanged and `item` is dropped.
    pub fn try_replace(&mut self, item: T) -> Result<T, HeapError> {
        let slot = self.data.first_mut().ok_or(HeapError::Empty)?;
        let top = mem::replace(slot, item);
        self.sift_down(0);
        Ok(top)
    }

    /// Removes the first element, in backing-sequence order, matching `predicate`
    ///
    /// The scan order is the heap layout, not sorted order, so when several
    /// elements match it is unspecified which one is removed.
    ///
    /// # Time Complexity
    /// O(n) for the scan, O(log n) for the repair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from_iter_with([1, 4, 8, 2], |a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(heap.remove(|&x| x == 4), Some(4));
    /// assert_eq!(heap.remove(|&x| x == 4), None);
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn remove<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.data.iter().position(predicate)?;
        if index == self.data.len() - 1 {
            return self.data.pop();
        }
        let item = self.data.swap_remove(index);
        // The tail element may belong to another subtree, so it can need to
        // move either way.
        if self.sift_down(index) == index {
            self.sift_up(index);
        }
        Some(item)
    }

    /// Keeps only the elements matching `predicate`, then rebuilds the heap
    ///
    /// # Time Complexity
    /// O(n)
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.data.retain(predicate);
        self.rebuild();
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// The merged heap is ordered by this heap's comparator.
    ///
    /// # Time Complexity
    /// O(n + m)
    pub fn append(&mut self, other: &mut Self) {
        self.data.append(&mut other.data);
        self.rebuild();
    }

    /// Replaces the comparator and rebuilds the heap under it
    ///
    /// # Time Complexity
    /// O(n)
    pub fn reorder<F>(&mut self, compare: F)
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.reorder_with(Arc::new(compare));
    }

    /// Replaces the comparator with an already shared one and rebuilds the heap
    pub fn reorder_with(&mut self, compare: CompareFn<T>) {
        self.compare = compare;
        self.rebuild();
    }

    /// Sorted iteration over a snapshot of the heap
    ///
    /// Each call clones the heap and pops from the clone, so the heap itself is
    /// never touched and can be iterated any number of times.
    pub fn iter(&self) -> Iter<T>
    where
        T: Clone,
    {
        Iter::new(self.clone())
    }

    /// Sorted iteration that pops from the heap itself
    ///
    /// Elements not yet yielded when the iterator is dropped stay in the heap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from_iter_with([4, 3, 2, 1], |a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(heap.consume().take(2).collect::<Vec<_>>(), vec![1, 2]);
    /// assert_eq!(heap.len(), 2);
    /// assert_eq!(heap.consume().collect::<Vec<_>>(), vec![3, 4]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn consume(&mut self) -> Consume<'_, T> {
        Consume::new(self)
    }

    /// Consumes the heap, yielding its elements in ascending order
    pub fn into_iter_sorted(self) -> Iter<T> {
        Iter::new(self)
    }

    /// Checks the heap property: no element compares greater than its children
    ///
    /// The heap itself never calls this; it is for callers who want to verify
    /// a comparator behaves.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len())
            .all(|i| (self.compare)(&self.data[parent(i)], &self.data[i]) != Ordering::Greater)
    }

    /// Moves the element at `index` towards the root while it precedes its parent
    ///
    /// Returns the final position of the element.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let p = parent(index);
            if (self.compare)(&self.data[p], &self.data[index]) != Ordering::Greater {
                break;
            }
            self.data.swap(index, p);
            index = p;
        }
        index
    }

    /// Moves the element at `index` towards the leaves while a child precedes it
    ///
    /// Ties between the two children go to the left child. Returns the final
    /// position of the element.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        let end = len / 2;
        while index < end {
            let left = child_left(index);
            let right = child_right(index);
            let child = if right < len
                && (self.compare)(&self.data[left], &self.data[right]) == Ordering::Greater
            {
                right
            } else {
                left
            };
            if (self.compare)(&self.data[index], &self.data[child]) != Ordering::Greater {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
        index
    }

    /// Bottom-up heap construction: sift down every parent, last to first
    fn rebuild(&mut self) {
        if let Some(last) = last_parent(self.data.len()) {
            for i in (0..=last).rev() {
                self.sift_down(i);
            }
        }
    }
}

impl<T: Ord + 'static> BinaryHeap<T> {
    /// Creates an empty heap that pops the smallest element first
    pub fn min_heap() -> Self {
        Self::with_compare_fn(compare::ascending())
    }

    /// Creates an empty heap that pops the largest element first
    pub fn max_heap() -> Self {
        Self::with_compare_fn(compare::descending())
    }
}

impl<T: Ord + 'static> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::min_heap()
    }
}

impl<T: Clone> Clone for BinaryHeap<T> {
    /// Copies the backing sequence; the comparator is shared
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a BinaryHeap<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T> IntoIterator for BinaryHeap<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.into_iter_sorted()
    }
}
