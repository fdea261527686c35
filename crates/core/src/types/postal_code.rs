//! Brazilian postal code (CEP) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PostalCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PostalCodeError {
    /// The input does not contain exactly eight digits.
    #[error("postal code must have {expected} digits (got {found})")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Digits left after stripping everything else.
        found: usize,
    },
}

/// A normalized postal code: exactly eight ASCII digits.
///
/// Parsing strips every non-digit character first, so the common
/// `01310-100` spelling is accepted.
///
/// ## Examples
///
/// ```
/// use vitrine_core::PostalCode;
///
/// assert_eq!(PostalCode::parse("01310-100").unwrap().as_str(), "01310100");
/// assert!(PostalCode::parse("1234").is_err());
/// assert!(PostalCode::parse("abcde123").is_err()); // only "123" remains
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Number of digits in a postal code.
    pub const DIGITS: usize = 8;

    /// Parse a `PostalCode` from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`PostalCodeError::WrongLength`] if the input does not contain
    /// exactly eight digits once non-digits are removed.
    pub fn parse(raw: &str) -> Result<Self, PostalCodeError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        if digits.len() != Self::DIGITS {
            return Err(PostalCodeError::WrongLength {
                expected: Self::DIGITS,
                found: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Returns the eight digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PostalCode {
    type Err = PostalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = PostalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
