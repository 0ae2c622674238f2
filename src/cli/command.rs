//! Parsing a line of user input into a [`Command`].

use contact_book::ValidationError;

/// A single REPL command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Greet the user.
    Hello,
    /// Add a phone to a contact, creating the contact if needed.
    Add { name: &'a str, phone: &'a str },
    /// Replace one of a contact's phones.
    Change {
        name: &'a str,
        old: &'a str,
        new: &'a str,
    },
    /// Look up one phone, or list all phones, of a contact.
    Phone {
        name: &'a str,
        phone: Option<&'a str>,
    },
    /// Remove one of a contact's phones.
    RemovePhone { name: &'a str, phone: &'a str },
    /// List every contact.
    All,
    /// Set a contact's birthday.
    AddBirthday { name: &'a str, birthday: &'a str },
    /// Show a contact's birthday.
    ShowBirthday { name: &'a str },
    /// List upcoming birthdays.
    Birthdays,
    /// Delete a contact.
    Delete { name: &'a str },
    /// List the available commands.
    Help,
    /// End the session.
    Exit,
}

pub const USAGE_ADD: &str = "add [name] [phone]";
pub const USAGE_CHANGE: &str = "change [name] [old_phone] [new_phone]";
pub const USAGE_PHONE: &str = "phone [name] [phone?]";
pub const USAGE_REMOVE_PHONE: &str = "remove-phone [name] [phone]";
pub const USAGE_ADD_BIRTHDAY: &str = "add-birthday [name] [DD.MM.YYYY]";
pub const USAGE_SHOW_BIRTHDAY: &str = "show-birthday [name]";
pub const USAGE_DELETE: &str = "delete [name]";

/// Everything a command can fail with.
///
/// Each variant renders as the message shown to the user; none of them end
/// the session.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given the wrong number of arguments.
    #[error("Invalid command. Usage: {0}")]
    Usage(&'static str),

    /// The command word is not recognised.
    #[error("Invalid command.")]
    Unknown(String),

    /// No contact has the given name.
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// The phone to replace is not on the contact.
    #[error("Old phone not found.")]
    OldPhoneNotFound(String),

    /// The contact has no such phone.
    #[error("Phone not found.")]
    PhoneNotFound(String),

    /// A phone, birthday or name failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Split a line into a lowercased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

impl<'a> Command<'a> {
    /// Parse a line of input.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Unknown`] for an unrecognised command word and
    /// [`CommandError::Usage`] when the arguments don't fit the command.
    pub fn parse(line: &'a str) -> Result<Option<Self>, CommandError> {
        let Some((word, args)) = parse_input(line) else {
            return Ok(None);
        };

        let command = match (word.as_str(), args.as_slice()) {
            ("hello", _) => Self::Hello,
            ("help", _) => Self::Help,
            ("exit" | "close", _) => Self::Exit,
            ("all", _) => Self::All,
            ("birthdays", _) => Self::Birthdays,

            ("add", &[name, phone, ..]) => Self::Add { name, phone },
            ("add", _) => return Err(CommandError::Usage(USAGE_ADD)),

            ("change", &[name, old, new]) => Self::Change { name, old, new },
            ("change", _) => return Err(CommandError::Usage(USAGE_CHANGE)),

            ("phone", &[name]) => Self::Phone { name, phone: None },
            ("phone", &[name, phone]) => Self::Phone {
                name,
                phone: Some(phone),
            },
            ("phone", _) => return Err(CommandError::Usage(USAGE_PHONE)),

            ("remove-phone", &[name, phone]) => Self::RemovePhone { name, phone },
            ("remove-phone", _) => return Err(CommandError::Usage(USAGE_REMOVE_PHONE)),

            ("add-birthday", &[name, birthday]) => Self::AddBirthday { name, birthday },
            ("add-birthday", _) => return Err(CommandError::Usage(USAGE_ADD_BIRTHDAY)),

            ("show-birthday", &[name, ..]) => Self::ShowBirthday { name },
            ("show-birthday", _) => return Err(CommandError::Usage(USAGE_SHOW_BIRTHDAY)),

            ("delete", &[name]) => Self::Delete { name },
            ("delete", _) => return Err(CommandError::Usage(USAGE_DELETE)),

            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// One line per command, for `help`.
pub const HELP: &str = "\
Commands:
  hello                                   greet the assistant
  add [name] [phone]                      add a contact, or a phone to an existing one
  change [name] [old_phone] [new_phone]   replace a phone
  phone [name] [phone?]                   show a contact's phones
  remove-phone [name] [phone]             remove a phone
  all                                     list every contact
  add-birthday [name] [DD.MM.YYYY]        set a contact's birthday
  show-birthday [name]                    show a contact's birthday
  birthdays                               list birthdays in the coming week
  delete [name]                           delete a contact
  exit | close                            leave";
