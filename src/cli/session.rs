//! The interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use contact_book::{AddressBook, BirthdayWindow, Record};
use tracing::instrument;

use crate::cli::{
    command::{Command, CommandError, HELP},
    terminal::Palette,
};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

/// What a successfully executed command produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// A change was made.
    Done(String),
    /// Information for the user; nothing changed.
    Message(String),
    /// The session should end.
    Exit,
}

/// A single user session over one address book.
#[derive(Debug)]
pub struct Session {
    book: AddressBook,
    window: BirthdayWindow,
    today: Option<NaiveDate>,
    palette: Palette,
}

impl Session {
    /// Start a session with an empty address book.
    ///
    /// `today` pins the date used for upcoming birthdays; `None` means the
    /// local date at the time of the query.
    pub fn new(window: BirthdayWindow, today: Option<NaiveDate>, palette: Palette) -> Self {
        Self {
            book: AddressBook::new(),
            window,
            today,
            palette,
        }
    }

    /// Read commands from `input` until `exit`, `close` or end of input,
    /// writing replies to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading or writing fails. Command failures
    /// are reported to the user and the loop carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{WELCOME}")?;

        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                writeln!(output)?;
                writeln!(output, "{FAREWELL}")?;
                return Ok(());
            }

            let reply = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => self.execute(command),
                Err(e) => Err(e),
            };

            match reply {
                Ok(Reply::Exit) => {
                    writeln!(output, "{FAREWELL}")?;
                    return Ok(());
                }
                Ok(Reply::Done(text)) => writeln!(output, "{}", self.palette.success(&text))?,
                Ok(Reply::Message(text)) => writeln!(output, "{text}")?,
                Err(e) => {
                    match &e {
                        CommandError::Validation(invalid) => tracing::debug!(
                            input = invalid.input().unwrap_or_default(),
                            "validation failed: {invalid}"
                        ),
                        other => tracing::debug!("command failed: {other:?}"),
                    }
                    writeln!(output, "{}", self.palette.warning(&e.to_string()))?;
                }
            }
        }
    }

    /// Carry out one command against the address book.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] when the contact or phone doesn't exist, or
    /// when input fails validation. The address book is unchanged in that
    /// case.
    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, command: Command<'_>) -> Result<Reply, CommandError> {
        let reply = match command {
            Command::Hello => Reply::Message(self.palette.info("How can I help you?")),
            Command::Help => Reply::Message(HELP.to_string()),
            Command::Exit => Reply::Exit,
            Command::Add { name, phone } => self.add(name, phone)?,
            Command::Change { name, old, new } => {
                if self.record_mut(name)?.edit_phone(old, new)? {
                    tracing::info!("Changed phone for {name}");
                    Reply::Done("Phone updated.".to_string())
                } else {
                    return Err(CommandError::OldPhoneNotFound(old.to_string()));
                }
            }
            Command::Phone { name, phone } => self.show_phone(name, phone)?,
            Command::RemovePhone { name, phone } => {
                if self.record_mut(name)?.remove_phone(phone) {
                    tracing::info!("Removed phone from {name}");
                    Reply::Done("Phone removed.".to_string())
                } else {
                    return Err(CommandError::PhoneNotFound(phone.to_string()));
                }
            }
            Command::All => self.show_all(),
            Command::AddBirthday { name, birthday } => {
                self.record_mut(name)?.add_birthday(birthday)?;
                tracing::info!("Set birthday for {name}");
                Reply::Done(format!("Birthday added for {name}."))
            }
            Command::ShowBirthday { name } => {
                let message = match self.record(name)?.birthday() {
                    Some(birthday) => format!("{name}'s birthday: {birthday}"),
                    None => format!("{name} has no birthday set."),
                };
                Reply::Message(message)
            }
            Command::Birthdays => self.show_birthdays(),
            Command::Delete { name } => {
                if !self.book.delete(name) {
                    return Err(CommandError::ContactNotFound(name.to_string()));
                }
                tracing::info!("Deleted contact {name}");
                Reply::Done(format!("Contact {name} deleted."))
            }
        };
        Ok(reply)
    }

    fn record(&self, name: &str) -> Result<&Record, CommandError> {
        self.book
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record, CommandError> {
        self.book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn add(&mut self, name: &str, phone: &str) -> Result<Reply, CommandError> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            tracing::info!("Added phone to {name}");
            return Ok(Reply::Done(format!(
                "Phone added to existing contact {name}."
            )));
        }

        // validate everything before the record reaches the book
        let mut record = Record::try_new(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        tracing::info!("Added contact {name}");
        Ok(Reply::Done(format!("Contact {name} added.")))
    }

    fn show_phone(&self, name: &str, phone: Option<&str>) -> Result<Reply, CommandError> {
        let record = self.record(name)?;
        let message = match phone {
            Some(phone) => {
                let found = record
                    .find_phone(phone)
                    .ok_or_else(|| CommandError::PhoneNotFound(phone.to_string()))?;
                format!("{name}: {found}")
            }
            None if record.phones().is_empty() => format!("{name} has no phones."),
            None => {
                let phones = record
                    .phones()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("{name}: {phones}")
            }
        };
        Ok(Reply::Message(message))
    }

    fn show_all(&self) -> Reply {
        if self.book.is_empty() {
            return Reply::Message(self.palette.dim("No contacts found."));
        }
        let mut records: Vec<_> = self.book.records().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));

        let lines = records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Reply::Message(lines)
    }

    fn show_birthdays(&self) -> Reply {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let mut upcoming = self.book.upcoming_birthdays(today, &self.window);
        tracing::debug!("{} upcoming birthday(s) from {today}", upcoming.len());

        if upcoming.is_empty() {
            return Reply::Message(self.palette.dim(&format!(
                "No birthdays in the next {} days.",
                self.window.days
            )));
        }

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        let lines = upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Reply::Message(lines)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session() -> Session {
        // Monday
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        Session::new(BirthdayWindow::default(), Some(today), Palette::plain())
    }

    fn exec(session: &mut Session, line: &str) -> Result<Reply, CommandError> {
        let command = Command::parse(line)?.expect("non-blank line");
        session.execute(command)
    }

    fn message(reply: Result<Reply, CommandError>) -> String {
        match reply.unwrap() {
            Reply::Done(text) | Reply::Message(text) => text,
            Reply::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn add_creates_then_extends_contact() {
        let mut session = session();

        assert_eq!(
            exec(&mut session, "add John 1234567890"),
            Ok(Reply::Done("Contact John added.".to_string()))
        );
        assert_eq!(
            exec(&mut session, "add John 5555555555"),
            Ok(Reply::Done(
                "Phone added to existing contact John.".to_string()
            ))
        );
        assert_eq!(
            message(exec(&mut session, "phone John")),
            "John: 1234567890; 5555555555"
        );
    }

    #[test]
    fn add_with_invalid_phone_creates_nothing() {
        let mut session = session();

        let err = exec(&mut session, "add John 123").unwrap_err();
        assert_eq!(err.to_string(), "Phone number must contain exactly 10 digits");
        assert!(session.book.find("John").is_none());
    }

    #[test]
    fn change_phone() {
        let mut session = session();
        exec(&mut session, "add John 1234567890").unwrap();

        assert_eq!(
            exec(&mut session, "change John 1234567890 1112223333"),
            Ok(Reply::Done("Phone updated.".to_string()))
        );
        let err = exec(&mut session, "change John 1234567890 1112223333").unwrap_err();
        assert_eq!(err, CommandError::OldPhoneNotFound("1234567890".to_string()));
        assert_eq!(err.to_string(), "Old phone not found.");
        assert!(matches!(
            exec(&mut session, "change John 1112223333 bad"),
            Err(CommandError::Validation(_))
        ));
        assert_eq!(message(exec(&mut session, "phone John 1112223333")), "John: 1112223333");
    }

    #[test]
    fn remove_phone() {
        let mut session = session();
        exec(&mut session, "add John 1234567890").unwrap();

        assert_eq!(
            exec(&mut session, "remove-phone John 1234567890"),
            Ok(Reply::Done("Phone removed.".to_string()))
        );
        assert_eq!(message(exec(&mut session, "phone John")), "John has no phones.");
        let err = exec(&mut session, "remove-phone John 1234567890").unwrap_err();
        assert_eq!(err, CommandError::PhoneNotFound("1234567890".to_string()));
        assert_eq!(err.to_string(), "Phone not found.");
    }

    #[test]
    fn phone_lookup_of_missing_phone() {
        let mut session = session();
        exec(&mut session, "add John 1234567890").unwrap();

        let err = exec(&mut session, "phone John 0000000000").unwrap_err();
        assert_eq!(err.to_string(), "Phone not found.");
    }

    #[test]
    fn unknown_contact() {
        let mut session = session();
        for line in [
            "change Ghost 1234567890 1112223333",
            "phone Ghost",
            "add-birthday Ghost 07.07.1990",
            "show-birthday Ghost",
            "delete Ghost",
        ] {
            assert_eq!(
                exec(&mut session, line),
                Err(CommandError::ContactNotFound("Ghost".to_string())),
                "{line}"
            );
        }
    }

    #[test]
    fn birthdays() {
        let mut session = session();
        exec(&mut session, "add John 1234567890").unwrap();
        exec(&mut session, "add Jane 5555555555").unwrap();

        assert_eq!(
            message(exec(&mut session, "show-birthday John")),
            "John has no birthday set."
        );
        assert_eq!(
            message(exec(&mut session, "birthdays")),
            "No birthdays in the next 7 days."
        );

        exec(&mut session, "add-birthday John 15.06.1990").unwrap();
        exec(&mut session, "add-birthday Jane 12.06.1992").unwrap();
        assert!(exec(&mut session, "add-birthday Jane 31.02.1992").is_err());

        assert_eq!(
            message(exec(&mut session, "show-birthday John")),
            "John's birthday: 15.06.1990"
        );
        assert_eq!(
            message(exec(&mut session, "birthdays")),
            "Jane: 2024.06.12\nJohn: 2024.06.17"
        );
    }

    #[test]
    fn all_lists_sorted_contacts() {
        let mut session = session();
        assert_eq!(message(exec(&mut session, "all")), "No contacts found.");

        exec(&mut session, "add John 1234567890").unwrap();
        exec(&mut session, "add Jane 5555555555").unwrap();
        exec(&mut session, "add-birthday Jane 07.07.1990").unwrap();

        assert_eq!(
            message(exec(&mut session, "all")),
            "Contact name: Jane, phones: 5555555555, birthday: 07.07.1990\n\
             Contact name: John, phones: 1234567890"
        );
    }

    #[test]
    fn delete_contact() {
        let mut session = session();
        exec(&mut session, "add John 1234567890").unwrap();

        assert_eq!(
            exec(&mut session, "delete John"),
            Ok(Reply::Done("Contact John deleted.".to_string()))
        );
        assert!(session.book.is_empty());
    }

    #[test]
    fn run_loop_until_exit() {
        let mut session = session();
        let input = Cursor::new("hello\n\nadd John 1234567890\nbogus\nexit\nall\n");
        let mut output = Vec::new();

        session.run(input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: \
             Enter a command: Contact John added.\n\
             Enter a command: Invalid command.\n\
             Enter a command: Good bye!\n"
        );
    }

    #[test]
    fn run_loop_reports_invalid_input_and_continues() {
        let mut session = session();
        let input = Cursor::new("add John 123\nchange John 1 2\nexit\n");
        let mut output = Vec::new();

        session.run(input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Phone number must contain exactly 10 digits\n"));
        assert!(output.contains("Contact not found.\n"));
        assert!(output.ends_with("Good bye!\n"));
    }

    #[test]
    fn run_loop_ends_at_end_of_input() {
        let mut session = session();
        let mut output = Vec::new();

        session.run(Cursor::new("add John 1234567890\n"), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("Enter a command: \nGood bye!\n"));
        assert!(session.book.find("John").is_some());
    }
}
