/// Like [`assert!`], but returns `Err(AssertionError.into())` from the enclosing function instead
/// of panicking.
///
/// The enclosing function must return a [`Result`] whose error type implements
/// `From<AssertionError>`.
///
/// # Examples
/// ```
/// use sundries::assertion::AssertionError;
/// use sundries::safe_assert;
///
/// fn halve(n: u32) -> Result<u32, AssertionError> {
///     safe_assert!(n % 2 == 0, "{} is odd", n);
///     Ok(n / 2)
/// }
///
/// assert_eq!(halve(8), Ok(4));
/// assert_eq!(
///     halve(7).unwrap_err().to_string(),
///     "assertion failed: n % 2 == 0 (7 is odd)"
/// );
/// ```
#[macro_export]
macro_rules! safe_assert {
    ($cond:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err(
                $crate::assertion::AssertionError::new(
                    ::core::stringify!($cond),
                    ::core::option::Option::None,
                )
                .into(),
            );
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err(
                $crate::assertion::AssertionError::new(
                    ::core::stringify!($cond),
                    ::core::option::Option::Some(::std::format!($($arg)+)),
                )
                .into(),
            );
        }
    };
}
