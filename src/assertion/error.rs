use std::fmt::{self, Display, Formatter};

use derive_more::Error;

/// The error produced when a [`safe_assert!`](crate::safe_assert) condition doesn't hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct AssertionError {
    condition: &'static str,
    message: Option<String>,
}

impl AssertionError {
    pub const fn new(condition: &'static str, message: Option<String>) -> AssertionError {
        AssertionError {
            condition,
            message,
        }
    }

    /// The source text of the condition that failed.
    pub const fn condition(&self) -> &'static str {
        self.condition
    }

    /// The formatted message, if one was given.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Display for AssertionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "assertion failed: {} ({})", self.condition, message),
            None => write!(f, "assertion failed: {}", self.condition),
        }
    }
}
