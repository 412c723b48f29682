//! chronotext command-line interface.
//!
//! Thin wrapper over the library: every subcommand prints JSON on stdout
//! and exits nonzero with a message on stderr when the input is rejected.

use anyhow::anyhow;
use clap::{Parser, Subcommand};

use chronotext::{CalendarModel, Precision, TimeSettings, TimeValue};

#[derive(Parser)]
#[command(
    name = "chronotext",
    version,
    about = "Free-text date parsing and Julian/Gregorian calendar conversion"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a free-text date into a time record
    Parse {
        /// The text to parse, e.g. "22 April 1616" or "3 billion years ago"
        text: String,
        /// Prefer month-day order for ambiguous numeric dates
        #[arg(long)]
        month_first: bool,
        /// Override the inferred precision level (0-14)
        #[arg(long)]
        precision: Option<u8>,
    },
    /// Parse a strict ISO 8601 datetime into a time record
    Iso {
        /// An ISO 8601 datetime, e.g. "2001-01-02T00:00:00Z"
        text: String,
        /// Override the inferred precision level (0-14)
        #[arg(long)]
        precision: Option<u8>,
    },
    /// Convert a calendar date between Gregorian and Julian
    Convert {
        #[arg(allow_negative_numbers = true)]
        year: i64,
        month: u8,
        day: u8,
        /// Source calendar ("gregorian" or "julian")
        #[arg(long)]
        from: String,
        /// Target calendar ("gregorian" or "julian")
        #[arg(long)]
        to: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            text,
            month_first,
            precision,
        } => {
            let mut settings = TimeSettings::default();
            if month_first {
                settings.day_before_month = false;
            }
            let precision = precision.map(Precision::try_from).transpose()?;
            let value = TimeValue::from_free_text_with(&text, &settings, precision);
            let record = value
                .to_record()
                .ok_or_else(|| anyhow!("cannot parse '{text}' as a date"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Iso { text, precision } => {
            let precision = precision.map(Precision::try_from).transpose()?;
            let value = TimeValue::from_iso8601_with(&text, precision)?;
            let record = value
                .to_record()
                .ok_or_else(|| anyhow!("cannot parse '{text}'"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Convert {
            year,
            month,
            day,
            from,
            to,
        } => {
            let from: CalendarModel = from.parse()?;
            let to: CalendarModel = to.parse()?;
            let value = TimeValue::new(year, month, day, Precision::Day, from)?;
            let date = match to {
                CalendarModel::Gregorian => value.gregorian(),
                CalendarModel::Julian => value.julian(),
            }
            .ok_or_else(|| anyhow!("no projection for {year}-{month}-{day}"))?;
            println!("{}", serde_json::to_string_pretty(&date)?);
        }
    }

    Ok(())
}
