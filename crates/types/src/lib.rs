//! Validated text primitives shared by the core and API crates.
//!
//! Constructors check every rule independently and report all the rules an input
//! breaks, so callers can surface each failure rather than only the first.

/// Number of digits in an NHS number.
pub const NHS_NUMBER_LEN: usize = 10;

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input text was longer than the permitted number of characters
    #[error("Text cannot exceed {max} characters")]
    TooLong { max: usize },
    /// The input text did not have the required number of characters
    #[error("Text must be exactly {expected} characters long")]
    InvalidLength { expected: usize },
    /// The input text was not made up entirely of ASCII digits
    #[error("Text must contain only digits")]
    NonDigit,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a new `NonEmptyText` that is also bounded in length.
    ///
    /// The length limit applies to the raw input, counted in characters, so
    /// surrounding whitespace counts towards it.
    ///
    /// # Errors
    ///
    /// Returns every broken rule: `TextError::Empty` for blank input and
    /// `TextError::TooLong` when the input has more than `max` characters. Both
    /// are reported for an over-long run of whitespace.
    pub fn bounded(input: impl AsRef<str>, max: usize) -> Result<Self, Vec<TextError>> {
        let raw = input.as_ref();
        let mut errors = Vec::new();

        let text = match Self::new(raw) {
            Ok(text) => Some(text),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if raw.chars().count() > max {
            errors.push(TextError::TooLong { max });
        }

        match text {
            Some(text) if errors.is_empty() => Ok(text),
            _ => Err(errors),
        }
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A ten-digit NHS number.
///
/// Only the format is checked: exactly [`NHS_NUMBER_LEN`] ASCII digits with no
/// surrounding whitespace. The modulus 11 check digit is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NhsNumber(String);

impl NhsNumber {
    /// Parses an NHS number.
    ///
    /// # Errors
    ///
    /// Returns every broken rule, in this order:
    /// - `TextError::Empty` if the input is empty or whitespace,
    /// - `TextError::InvalidLength` if it is not ten characters long,
    /// - `TextError::NonDigit` if it is not one or more ASCII digits.
    pub fn parse(input: &str) -> Result<Self, Vec<TextError>> {
        let mut errors = Vec::new();
        if input.trim().is_empty() {
            errors.push(TextError::Empty);
        }
        if input.chars().count() != NHS_NUMBER_LEN {
            errors.push(TextError::InvalidLength {
                expected: NHS_NUMBER_LEN,
            });
        }
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            errors.push(TextError::NonDigit);
        }

        if errors.is_empty() {
            Ok(Self(input.to_owned()))
        } else {
            Err(errors)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
