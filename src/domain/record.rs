use std::fmt;

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep the order they were added in. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Construct a new [`Record`] with no phones and no birthday.
    #[must_use]
    pub const fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Construct a new [`Record`] from an unvalidated name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Name`] if the name is empty or whitespace.
    pub fn try_new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::try_from(name)?))
    }

    /// The name this record is filed under.
    #[must_use]
    pub const fn name(&self) -> &ContactName {
        &self.name
    }

    /// The record's phone numbers, in the order they were added.
    #[must_use]
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The record's birthday, if one has been set.
    #[must_use]
    pub const fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Phone`] if `phone` is not ten digits. The
    /// phone list is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns `true` if a phone was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        if let Some(pos) = self.position(phone) {
            self.phones.remove(pos);
            true
        } else {
            false
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its
    /// position.
    ///
    /// Returns `Ok(false)` if `old` is not on the record, in which case `new`
    /// is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Phone`] if `old` is present but `new` is not
    /// a valid phone number. The phone list is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(pos) = self.position(old) else {
            return Ok(false);
        };
        self.phones[pos] = PhoneNumber::new(new)?;
        Ok(true)
    }

    /// Returns the first phone equal to `phone`.
    #[must_use]
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse `birthday` and set it on the record, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Birthday`] if the date is malformed. The
    /// existing birthday is kept.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

/// `Contact name: {name}, phones: {p1}; {p2}[, birthday: DD.MM.YYYY]`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {phones}", self.name)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        Ok(())
    }
}
