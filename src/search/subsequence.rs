use std::slice;

/// Returns the offset of the first occurrence of `needle` as a contiguous run inside `haystack`,
/// or [`None`] if it doesn't occur.
///
/// Elements are compared with [`PartialEq`]. The earliest offset wins, even if the needle occurs
/// again later (or overlapping).
///
/// An empty needle matches at offset `0`, including against an empty haystack. A needle longer
/// than the haystack never matches.
///
/// # Examples
/// ```
/// use sundries::search::find_subsequence;
///
/// assert_eq!(find_subsequence(b"abcdabcd", b"cda"), Some(2));
/// assert_eq!(find_subsequence(b"aaaa", b"aa"), Some(0));
/// assert_eq!(find_subsequence(b"abc", b"abcd"), None);
/// ```
pub fn find_subsequence<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    let last_start = haystack.len().checked_sub(needle.len())?;

    (0..=last_start).find(|&start| {
        haystack[start..]
            .iter()
            .zip(needle)
            .all(|(h, n)| h == n)
    })
}

/// The pointer and length form of [`find_subsequence`], for callers that only have raw buffers.
///
/// # Safety
/// `haystack` must be valid for reads of `haystack_len` elements and `needle` must be valid for
/// reads of `needle_len` elements, for the duration of the call. Both must be properly aligned and
/// non-null, even when the length is zero (use [`NonNull::dangling`](std::ptr::NonNull::dangling)
/// for empty buffers). Neither buffer may be mutated while the search runs.
pub unsafe fn find_subsequence_raw<T: PartialEq>(
    haystack: *const T,
    haystack_len: usize,
    needle: *const T,
    needle_len: usize,
) -> Option<usize> {
    // SAFETY: The caller guarantees both pointers are valid, aligned and unaliased by writers for
    // their respective lengths.
    let (haystack, needle) = unsafe {
        (
            slice::from_raw_parts(haystack, haystack_len),
            slice::from_raw_parts(needle, needle_len),
        )
    };
    find_subsequence(haystack, needle)
}

/// Subsequence search as methods on slices.
pub trait Subsequence<T> {
    /// See [`find_subsequence`].
    fn find_subsequence(&self, needle: &[T]) -> Option<usize>;

    /// Returns true if `needle` occurs anywhere in `self`.
    fn contains_subsequence(&self, needle: &[T]) -> bool {
        self.find_subsequence(needle).is_some()
    }
}

impl<T: PartialEq> Subsequence<T> for [T] {
    fn find_subsequence(&self, needle: &[T]) -> Option<usize> {
        find_subsequence(self, needle)
    }
}
