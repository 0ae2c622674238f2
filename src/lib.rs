//! Command-line contact management
//!
//! Contacts are kept in an in-memory address book for the length of a
//! session. Each contact has validated phone numbers and an optional birthday,
//! and the book can list the birthdays coming up in the next week.

pub mod domain;
pub use domain::{
    AddressBook, Birthday, BirthdayWindow, Config, ContactName, LeapDayPolicy, PhoneNumber,
    Record, UpcomingBirthday, ValidationError,
};
