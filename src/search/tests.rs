#![cfg(test)]

use std::ptr::NonNull;

use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case(b"abcdabcd", b"cda", Some(2))]
#[case(b"aaaa", b"aa", Some(0))]
#[case(b"abcd", b"abcd", Some(0))]
#[case(b"abcd", b"d", Some(3))]
#[case(b"abcd", b"abcde", None)]
#[case(b"abcd", b"ce", None)]
#[case(b"aab", b"ab", Some(1))]
#[case(b"", b"a", None)]
fn test_find_bytes(
    #[case] haystack: &[u8],
    #[case] needle: &[u8],
    #[case] expected: Option<usize>,
) {
    assert_eq!(
        find_subsequence(haystack, needle),
        expected,
        "Searching {:?} for {:?} should give {:?}.",
        haystack,
        needle,
        expected
    );
}

#[test]
fn test_empty_needle() {
    assert_eq!(
        find_subsequence(b"abc", b""),
        Some(0),
        "An empty needle should match at the start of any haystack."
    );
    assert_eq!(
        find_subsequence::<u8>(&[], &[]),
        Some(0),
        "An empty needle should match an empty haystack too."
    );
}

#[test]
fn test_wide_elements() {
    let haystack = [0xdead_beef_u32, 7, 8, 9, 7, 8, 9];
    assert_eq!(
        find_subsequence(&haystack, &[7, 8, 9]),
        Some(1),
        "Search isn't limited to bytes, the first of two occurrences should be found."
    );

    let chars: Vec<char> = "héllo wörld".chars().collect();
    let needle: Vec<char> = "wö".chars().collect();
    assert_eq!(find_subsequence(&chars, &needle), Some(6));
}

#[test]
fn test_raw() {
    let haystack = *b"needle in a haystack";
    let needle = *b"hay";

    // SAFETY: Both pointers come from live arrays with the given lengths.
    let found = unsafe {
        find_subsequence_raw(haystack.as_ptr(), haystack.len(), needle.as_ptr(), needle.len())
    };
    assert_eq!(found, Some(12));

    let dangling = NonNull::<u8>::dangling().as_ptr();
    // SAFETY: Zero-length reads from a dangling, aligned pointer are valid.
    let found = unsafe { find_subsequence_raw(dangling, 0, needle.as_ptr(), needle.len()) };
    assert_eq!(found, None, "Nothing can be found in an empty raw buffer.");
}

#[test]
fn test_extension_trait() {
    let haystack: &[u8] = b"GET /index.html HTTP/1.1\r\n\r\n";
    assert_eq!(haystack.find_subsequence(b"\r\n\r\n"), Some(24));
    assert!(haystack.contains_subsequence(b"HTTP/"));
    assert!(!haystack.contains_subsequence(b"POST"));
}

proptest! {
    #[test]
    fn prop_finds_embedded_slice(
        haystack in prop::collection::vec(0_u8..4, 0..64),
        start in any::<prop::sample::Index>(),
        len in 0_usize..8,
    ) {
        prop_assume!(!haystack.is_empty());
        let start = start.index(haystack.len());
        let end = (start + len).min(haystack.len());
        let needle = &haystack[start..end];

        let found = find_subsequence(&haystack, needle);
        prop_assert!(found.is_some(), "A slice of the haystack must be found in it.");

        let offset = found.unwrap_or_default();
        prop_assert!(offset <= start, "The first occurrence can't come after a known one.");
        prop_assert_eq!(&haystack[offset..offset + needle.len()], needle);
        for earlier in 0..offset {
            prop_assert_ne!(
                &haystack[earlier..earlier + needle.len()],
                needle,
                "No occurrence may exist before the returned offset."
            );
        }
    }

    #[test]
    fn prop_agrees_with_windows(
        haystack in prop::collection::vec(0_u8..3, 0..48),
        needle in prop::collection::vec(0_u8..3, 1..6),
    ) {
        let expected = haystack
            .windows(needle.len())
            .position(|window| window == needle.as_slice());
        prop_assert_eq!(find_subsequence(&haystack, &needle), expected);
    }

    #[test]
    fn prop_longer_needle_never_matches(
        haystack in prop::collection::vec(any::<u8>(), 0..16),
        extra in 1_usize..8,
    ) {
        let needle = vec![0_u8; haystack.len() + extra];
        prop_assert_eq!(find_subsequence(&haystack, &needle), None);
    }
}
