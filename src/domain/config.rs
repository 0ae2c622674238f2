use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BirthdayWindow, LeapDayPolicy};

/// Configuration for a contact book session.
///
/// This struct holds settings that tune the upcoming-birthdays query. Every
/// field has a default, so a configuration file is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// How many days ahead of today the `birthdays` command looks.
    ///
    /// The window is inclusive at both ends, so the default of 7 covers eight
    /// calendar days.
    upcoming_days: u32,

    /// Where February 29th birthdays are observed in non-leap years.
    pub leap_day: LeapDayPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upcoming_days: default_upcoming_days(),
            leap_day: LeapDayPolicy::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the length of the upcoming-birthdays window, in days.
    #[must_use]
    pub const fn upcoming_days(&self) -> u32 {
        self.upcoming_days
    }

    /// Sets the length of the upcoming-birthdays window, in days.
    pub const fn set_upcoming_days(&mut self, days: u32) {
        self.upcoming_days = days;
    }

    /// The window used for the upcoming-birthdays query.
    #[must_use]
    pub const fn birthday_window(&self) -> BirthdayWindow {
        BirthdayWindow {
            days: self.upcoming_days,
            leap_day: self.leap_day,
        }
    }
}

const fn default_upcoming_days() -> u32 {
    7
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_upcoming_days")]
        upcoming_days: u32,

        #[serde(default)]
        leap_day: LeapDayPolicy,
    },
}

impl From<Versions> for super::Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                upcoming_days,
                leap_day,
            } => Self {
                upcoming_days,
                leap_day,
            },
        }
    }
}

impl From<super::Config> for Versions {
    fn from(config: super::Config) -> Self {
        Self::V1 {
            upcoming_days: config.upcoming_days,
            leap_day: config.leap_day,
        }
    }
}
