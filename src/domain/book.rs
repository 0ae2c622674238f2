//! The address book and the upcoming-birthdays query.
//!
//! The [`AddressBook`] owns its records outright and knows nothing about how
//! they are entered or displayed.

use std::{collections::HashMap, fmt};

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::domain::{ContactName, LeapDayPolicy, Record};

/// The format congratulation dates are rendered in.
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A name-keyed collection of contact [`Record`]s.
///
/// There is at most one record per name. Iteration order is unspecified.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: HashMap<ContactName, Record>,
}

impl AddressBook {
    /// Creates an empty address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, keyed by its name.
    ///
    /// An existing record with the same name is replaced entirely and
    /// returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().clone(), record)
    }

    /// Look up a record by its exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by its exact name, for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with the given name.
    ///
    /// Returns `true` if a record was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    /// Iterate over every record in the book.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// The number of records in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays falling within the next seven days, counted from today's
    /// local date.
    ///
    /// See [`AddressBook::upcoming_birthdays`].
    #[must_use]
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), &BirthdayWindow::default())
    }

    /// Birthdays falling within `window` of `today`.
    ///
    /// A birthday that has already passed this year is considered in its
    /// next year's occurrence. An occurrence qualifies if it lies in
    /// `[today, today + window.days]`, inclusive at both ends. Occurrences on
    /// a Saturday or Sunday are congratulated the following Monday.
    ///
    /// The result follows the book's iteration order.
    #[must_use]
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window: &BirthdayWindow,
    ) -> Vec<UpcomingBirthday> {
        let end = today
            .checked_add_days(Days::new(u64::from(window.days)))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;

                let mut occurrence = birthday.occurrence_in(today.year(), window.leap_day);
                if occurrence < today {
                    occurrence = birthday.occurrence_in(today.year() + 1, window.leap_day);
                }

                (today..=end)
                    .contains(&occurrence)
                    .then(|| UpcomingBirthday {
                        name: record.name().clone(),
                        congratulation_date: next_weekday(occurrence),
                    })
            })
            .collect()
    }
}

/// Moves a weekend date forward to the following Monday.
fn next_weekday(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

/// Parameters of the upcoming-birthdays query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    /// How many days past today the window extends.
    pub days: u32,
    /// Where February 29th birthdays fall in non-leap years.
    pub leap_day: LeapDayPolicy,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: 7,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

/// A contact to congratulate, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name.
    pub name: ContactName,
    /// The birthday occurrence, moved off the weekend.
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `YYYY.MM.DD`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(CONGRATULATION_FORMAT)
        )
    }
}
