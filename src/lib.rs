//! Binary heap with a runtime comparator
//!
//! This crate provides [`BinaryHeap`], an array-backed priority queue ordered
//! by a comparison closure supplied at construction time rather than by the
//! element type's [`Ord`]. The comparator is heap-owned state: it can be
//! replaced with [`BinaryHeap::reorder`], which rebuilds the heap in place.
//!
//! # Features
//!
//! - **Min-first under any comparator**: `push`, `pop` and `peek` in O(log n) / O(1)
//! - **Combined operations**: `pushpop` and `replace` do one sift instead of two
//! - **Predicate removal**: `remove` takes out the first matching element
//! - **Linear-time construction**: `from_iter_with` and `reorder` heapify bottom-up
//! - **Two iteration modes**: `iter` walks a snapshot, `consume` drains the heap
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::from_iter_with([2, 3, 1, 4], |a: &i32, b: &i32| a.cmp(b));
//! assert_eq!(heap.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//!
//! assert_eq!(heap.pushpop(0), 0);
//! assert_eq!(heap.replace(5), 1);
//! assert_eq!(heap.remove(|&x| x == 3), Some(3));
//!
//! let drained: Vec<_> = heap.consume().collect();
//! assert_eq!(drained, vec![2, 4, 5]);
//! assert!(heap.is_empty());
//! ```
//!
//! The heap is a single-owner structure. It is `Send` and `Sync` when `T` is,
//! but offers no internal synchronisation.

pub mod compare;
pub mod error;
pub mod heap;
mod index;
pub mod iter;

pub use compare::CompareFn;
pub use error::HeapError;
pub use heap::BinaryHeap;
pub use iter::{Consume, Iter};
