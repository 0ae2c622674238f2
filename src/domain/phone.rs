use std::{fmt, ops::Deref, str::FromStr};

use super::ValidationError;

/// The number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// A phone number made of exactly ten ASCII decimal digits.
///
/// The value is validated at construction, so an invalid number can never be
/// stored on a [`Record`](crate::Record).
///
/// # Examples
///
/// ```
/// use contact_book::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
///
/// assert!(PhoneNumber::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a new `PhoneNumber`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Phone`] unless the input is exactly ten
    /// decimal digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if !Self::is_valid(&phone) {
            return Err(ValidationError::Phone(phone));
        }
        Ok(Self(phone))
    }

    /// Whether `phone` would be accepted by [`PhoneNumber::new`].
    #[must_use]
    pub fn is_valid(phone: &str) -> bool {
        // byte length equals char count once every char is ASCII
        phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for PhoneNumber {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("0123456789"; "all digits")]
    #[test_case("0000000000"; "all zeros")]
    #[test_case("9999999999"; "all nines")]
    fn valid_phone(input: &str) {
        let phone = PhoneNumber::new(input).unwrap();
        assert_eq!(phone.as_str(), input);
        assert_eq!(phone.to_string(), input);
    }

    #[test_case(""; "empty")]
    #[test_case("123456789"; "nine digits")]
    #[test_case("12345678901"; "eleven digits")]
    #[test_case("12345abcde"; "letters")]
    #[test_case("123-456-78"; "separators")]
    #[test_case(" 123456789"; "leading space")]
    #[test_case("+380501234"; "plus sign")]
    #[test_case("١٢٣٤٥٦٧٨٩٠"; "non ascii digits")]
    fn invalid_phone(input: &str) {
        let err = PhoneNumber::new(input).unwrap_err();
        assert_eq!(err, ValidationError::Phone(input.to_string()));
    }

    #[test]
    fn parse_matches_new() {
        let parsed: PhoneNumber = "5555555555".parse().unwrap();
        assert_eq!(parsed, PhoneNumber::new("5555555555").unwrap());
        assert!("555".parse::<PhoneNumber>().is_err());
    }

    #[test]
    fn compares_with_str() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert!(phone == *"1234567890");
        assert!(phone != *"1112223333");
    }
}
