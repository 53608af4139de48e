//! Booking reference typed by customers in the lookup form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`BookingReference`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingReferenceError {
    /// Nothing left after trimming.
    #[error("Please enter your booking reference number")]
    Empty,
}

/// A booking reference such as `AR-2026-CBVS`.
///
/// Input is uppercased first (the form does the same on every keystroke) and
/// trimmed second. No format check happens here; an unknown reference is
/// reported by the detail page.
///
/// ```
/// use autorent_core::BookingReference;
///
/// let reference = BookingReference::parse(" ar-2026-cbvs ").unwrap();
/// assert_eq!(reference.as_str(), "AR-2026-CBVS");
/// assert!(BookingReference::parse("  ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    /// Uppercase as typed, then trim.
    ///
    /// # Errors
    ///
    /// Returns [`BookingReferenceError::Empty`] for blank input.
    pub fn parse(input: &str) -> Result<Self, BookingReferenceError> {
        let typed = uppercase_as_typed(input);
        let trimmed = typed.trim();
        if trimmed.is_empty() {
            return Err(BookingReferenceError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Keystroke normalization applied to the raw form value.
#[must_use]
pub fn uppercase_as_typed(input: &str) -> String {
    input.to_uppercase()
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BookingReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
