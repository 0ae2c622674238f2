/// Errors raised when raw input fails a field's format or value rules.
///
/// Validation failures never leave a partially-updated record behind; the
/// caller gets the error and the data is exactly as it was.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number is not exactly 10 decimal digits.
    #[error("Phone number must contain exactly 10 digits")]
    Phone(String),

    /// The birthday is malformed or is not a real calendar date.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    Birthday(String),

    /// The contact name is empty or only whitespace.
    #[error("Contact name cannot be empty")]
    Name,
}

impl ValidationError {
    /// The raw input that was rejected, if any.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Phone(input) | Self::Birthday(input) => Some(input),
            Self::Name => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::Phone("123".to_string()).to_string(),
            "Phone number must contain exactly 10 digits"
        );
        assert_eq!(
            ValidationError::Birthday("1990-07-07".to_string()).to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            ValidationError::Name.to_string(),
            "Contact name cannot be empty"
        );
    }

    #[test]
    fn rejected_input_is_kept() {
        assert_eq!(ValidationError::Phone("abc".to_string()).input(), Some("abc"));
        assert_eq!(ValidationError::Name.input(), None);
    }
}
