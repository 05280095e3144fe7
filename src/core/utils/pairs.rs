//! Disjoint mutable borrows for the pairwise solver
//!
//! The collision sweep and joint pass need two bodies of the same slice
//! mutably at once. `split_at_mut` gives that without `unsafe`; in debug
//! builds the index contract is asserted so misuse panics with a clear
//! message instead of an opaque slice error.

/// Borrow `slice[i]` and `slice[j]` mutably at the same time.
///
/// Panics if `i == j` or either index is out of bounds.
#[inline]
pub fn pair_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i != j, "pair_mut: indices must differ (got {} twice)", i);
    debug_assert!(
        i < slice.len() && j < slice.len(),
        "pair_mut: index out of bounds ({}, {}) for len {}",
        i,
        j,
        slice.len()
    );

    if i < j {
        let (lo, hi) = slice.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = slice.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

#[cfg(test)]
mod tests {
    use super::pair_mut;

    #[test]
    fn returns_requested_order() {
        let mut v = vec![10, 20, 30, 40];
        let (a, b) = pair_mut(&mut v, 3, 1);
        assert_eq!((*a, *b), (40, 20));
        *a += 1;
        *b += 1;
        assert_eq!(v, vec![10, 21, 30, 41]);
    }

    #[test]
    #[should_panic]
    fn same_index_panics() {
        let mut v = vec![1, 2];
        let _ = pair_mut(&mut v, 1, 1);
    }
}
