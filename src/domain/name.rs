use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};

use non_empty_string::NonEmptyString;

use super::ValidationError;

/// The name a contact is filed under.
///
/// Names are case-sensitive and must contain at least one non-whitespace
/// character. The name is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContactName(NonEmptyString);

impl ContactName {
    /// Creates a new `ContactName` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Name`] if the string is empty or contains
    /// only whitespace.
    pub fn new(s: String) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Name);
        }
        NonEmptyString::new(s)
            .map(Self)
            .map_err(|_| ValidationError::Name)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for ContactName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContactName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<NonEmptyString> for ContactName {
    fn from(value: NonEmptyString) -> Self {
        Self(value)
    }
}

impl FromStr for ContactName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for ContactName {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

// Hashes as `str` so lookups by `&str` agree with the `Borrow` impl.
impl Hash for ContactName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Deref for ContactName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_kept_verbatim() {
        let name = ContactName::try_from("John").unwrap();
        assert_eq!(name.as_str(), "John");
        assert_eq!(name.to_string(), "John");
    }

    #[test]
    fn empty_name_fails() {
        assert_eq!(ContactName::new(String::new()), Err(ValidationError::Name));
    }

    #[test]
    fn whitespace_name_fails() {
        assert_eq!(ContactName::try_from(" \t "), Err(ValidationError::Name));
    }

    #[test]
    fn names_are_case_sensitive() {
        let lower = ContactName::try_from("john").unwrap();
        let upper = ContactName::try_from("John").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn from_non_empty_string() {
        let inner = NonEmptyString::new("Jane".to_string()).unwrap();
        assert_eq!(ContactName::from(inner).as_str(), "Jane");
    }
}
