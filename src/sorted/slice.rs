use super::{empty_intersection, empty_intersection_by};

/// Sorted-set queries as methods on slices that are sorted and free of duplicates.
pub trait SortedSlice<T> {
    /// Returns true if `self` and `other` share no element. (`self ∩ other = ∅`)
    ///
    /// Both slices must be sorted ascending with no duplicates.
    fn is_disjoint_sorted(&self, other: &[T]) -> bool
    where
        T: Ord;

    /// Like [`is_disjoint_sorted`](SortedSlice::is_disjoint_sorted), but both slices are sorted by
    /// `less` rather than [`Ord`].
    fn is_disjoint_sorted_by<F>(&self, other: &[T], less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;

    /// Returns true if `self` and `other` share at least one element.
    fn intersects_sorted(&self, other: &[T]) -> bool
    where
        T: Ord,
    {
        !self.is_disjoint_sorted(other)
    }
}

impl<T> SortedSlice<T> for [T] {
    fn is_disjoint_sorted(&self, other: &[T]) -> bool
    where
        T: Ord,
    {
        empty_intersection(self, other)
    }

    fn is_disjoint_sorted_by<F>(&self, other: &[T], mut less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        empty_intersection_by(self, other, |x: &&T, y: &&T| less(*x, *y))
    }
}
