//! Domain models for contact management.
//!
//! This module contains the validated field types (phone numbers, birthdays,
//! names), the contact [`Record`], the [`AddressBook`] and configuration.

mod error;
pub use error::ValidationError;

/// Phone number validation.
pub mod phone;
pub use phone::PhoneNumber;

/// Birthday parsing and yearly occurrences.
pub mod birthday;
pub use birthday::{Birthday, LeapDayPolicy};

mod name;
pub use name::ContactName;

/// The contact record.
pub mod record;
pub use record::Record;

pub mod book;
pub use book::{AddressBook, BirthdayWindow, UpcomingBirthday};

mod config;
pub use config::Config;
