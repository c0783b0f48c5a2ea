/// Returns true if the sorted sequences `a` and `b` have no element in common.
///
/// Equivalent to [`empty_intersection_by`] with [`PartialOrd::lt`] as the ordering.
///
/// # Examples
/// ```
/// use sundries::sorted::empty_intersection;
///
/// assert!(empty_intersection(&[1, 3, 5, 7], &[2, 4, 6]));
/// assert!(!empty_intersection(&[1, 3, 5, 7], &[4, 5, 6]));
/// ```
pub fn empty_intersection<T, A, B>(a: A, b: B) -> bool
where
    T: Ord,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    empty_intersection_by(a, b, |x, y| x < y)
}

/// Returns true if the sorted sequences `a` and `b` have no element in common, where `less` is
/// the strict weak ordering both are sorted by.
///
/// Two elements count as common when neither is less than the other, so `less` defines the
/// equivalence as well as the order. The scan stops at the first common element or as soon as
/// either sequence runs out, calling `less` at most twice per step.
///
/// Both sequences must be sorted ascending by `less` and contain no equivalent elements. This
/// isn't checked.
///
/// # Examples
/// ```
/// use sundries::sorted::empty_intersection_by;
///
/// let less = |a: &&str, b: &&str| a.to_lowercase() < b.to_lowercase();
/// assert!(!empty_intersection_by(["Apple", "cherry"], ["apple", "banana"], less));
/// ```
pub fn empty_intersection_by<T, A, B, F>(a: A, b: B, mut less: F) -> bool
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();

    let (Some(mut x), Some(mut y)) = (a.next(), b.next()) else {
        return true;
    };

    loop {
        if less(&x, &y) {
            match a.next() {
                Some(next) => x = next,
                None => return true,
            }
        } else if less(&y, &x) {
            match b.next() {
                Some(next) => y = next,
                None => return true,
            }
        } else {
            return false;
        }
    }
}
