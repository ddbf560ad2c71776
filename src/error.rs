//! Error type for checked heap operations

use std::fmt;

/// Error type for heap operations
///
/// Most operations report an empty heap through `Option`. This type is only
/// used by the checked variants of operations that require a non-empty heap,
/// such as [`BinaryHeap::try_replace`](crate::BinaryHeap::try_replace).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation requires at least one element
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "operation requires a non-empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            HeapError::Empty.to_string(),
            "operation requires a non-empty heap"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(HeapError::Empty);
        assert!(err.source().is_none());
    }
}
