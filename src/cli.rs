use std::{io, path::PathBuf};

mod command;
mod session;
mod terminal;

use chrono::NaiveDate;
use clap::ArgAction;
use contact_book::Config;
use session::Session;
use terminal::Palette;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use this date as today when listing upcoming birthdays
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// How many days ahead `birthdays` looks (overrides the config file)
    #[arg(long, value_name = "DAYS")]
    upcoming_days: Option<u32>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))?
            }
            None => Config::default(),
        };
        if let Some(days) = self.upcoming_days {
            config.set_upcoming_days(days);
        }

        let palette = if self.no_color {
            Palette::plain()
        } else {
            Palette::detect()
        };

        let mut session = Session::new(config.birthday_window(), self.today, palette);
        session.run(io::stdin().lock(), &mut io::stdout().lock())?;

        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the REPL
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "contacts",
            "-vv",
            "--config",
            "contacts.toml",
            "--today",
            "2024-06-10",
            "--upcoming-days",
            "14",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.unwrap().to_str(), Some("contacts.toml"));
        assert_eq!(cli.today.unwrap().to_string(), "2024-06-10");
        assert_eq!(cli.upcoming_days, Some(14));
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_malformed_today() {
        assert!(Cli::try_parse_from(["contacts", "--today", "10.06.2024"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
