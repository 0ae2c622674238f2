use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The textual format birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// `D.M.YYYY` through `DD.MM.YYYY`.
static BIRTHDAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$").expect("birthday pattern is valid")
});

/// A contact's date of birth.
///
/// Parsed from `DD.MM.YYYY` text and stored as a calendar date, so date
/// arithmetic is exact. A single-digit day or month (`7.7.1990`) is also
/// accepted. Displays as `DD.MM.YYYY`.
///
/// # Examples
///
/// ```
/// use contact_book::Birthday;
///
/// let birthday = Birthday::parse("07.07.1990").unwrap();
/// assert_eq!(birthday.to_string(), "07.07.1990");
///
/// assert!(Birthday::parse("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Birthday`] if the text does not match the
    /// pattern or names a date that does not exist.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::Birthday(input.to_string());

        let captures = BIRTHDAY_PATTERN.captures(input).ok_or_else(invalid)?;
        let field = |i: usize| captures[i].parse::<u32>().map_err(|_| invalid());

        let day = field(1)?;
        let month = field(2)?;
        let year = i32::try_from(field(3)?).map_err(|_| invalid())?;
        // chrono's proleptic calendar has a year 0; the Gregorian one doesn't
        if year < 1 {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// The date of birth.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date on which this birthday falls in `year`.
    ///
    /// A February 29th birthday is moved according to `leap_day` when `year`
    /// is not a leap year.
    #[must_use]
    pub fn occurrence_in(&self, year: i32, leap_day: LeapDayPolicy) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .unwrap_or_else(|| leap_day.observed_in(year))
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// Where a February 29th birthday is observed in a non-leap year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeapDayPolicy {
    /// Observe on March 1st.
    #[default]
    MarchFirst,
    /// Observe on February 28th.
    FebruaryTwentyEighth,
}

impl LeapDayPolicy {
    fn observed_in(self, year: i32) -> NaiveDate {
        let (month, day) = match self {
            Self::MarchFirst => (3, 1),
            Self::FebruaryTwentyEighth => (2, 28),
        };
        // both dates exist in every year chrono can represent
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
    }
}
