//! Index arithmetic for the implicit complete binary tree
//!
//! The heap keeps its elements in a flat `Vec`. The node at position `i` has
//! its children at `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`.

/// Position of the parent of `index`
///
/// Only meaningful for `index >= 1`; the root has no parent.
#[inline]
pub(crate) const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Position of the left child of `index`
#[inline]
pub(crate) const fn child_left(index: usize) -> usize {
    2 * index + 1
}

/// Position of the right child of `index`
#[inline]
pub(crate) const fn child_right(index: usize) -> usize {
    2 * index + 2
}

/// Position of the last node that has at least one child, for a tree of `len` nodes
///
/// Returns `None` when no node has children (`len < 2`).
#[inline]
pub(crate) const fn last_parent(len: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some(parent(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of_child() {
        for i in 0..1000 {
            assert_eq!(parent(child_left(i)), i);
            assert_eq!(parent(child_right(i)), i);
        }
    }

    #[test]
    fn test_child_of_parent() {
        // odd indices are left children
        for i in (1..1000).step_by(2) {
            assert_eq!(child_left(parent(i)), i);
        }
        // even indices are right children
        for i in (2..1000).step_by(2) {
            assert_eq!(child_right(parent(i)), i);
        }
    }

    #[test]
    fn test_last_parent() {
        assert_eq!(last_parent(0), None);
        assert_eq!(last_parent(1), None);
        assert_eq!(last_parent(2), Some(0));
        assert_eq!(last_parent(3), Some(0));
        assert_eq!(last_parent(4), Some(1));
        assert_eq!(last_parent(8), Some(3));

        // every node past the last parent is a leaf
        for len in 2..200 {
            let lp = last_parent(len).unwrap();
            assert!(child_left(lp) < len);
            assert!(child_left(lp + 1) >= len);
        }
    }
}
