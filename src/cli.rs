use clap::{Parser, Subcommand};

use calpicker::{CalendarDate, PickerError};

/// Pick a date from a month calendar in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "calpicker",
    version,
    about = "Pick a date from a month calendar in the terminal"
)]
pub struct Cli {
    /// Start weeks on Monday instead of Sunday.
    #[arg(long, global = true)]
    pub monday: bool,

    /// Date to open the picker on (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<CalendarDate>,

    /// Print the accepted date as JSON.
    #[arg(long)]
    pub json: bool,

    /// Subcommand to run. Without one, the interactive picker opens.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a month grid to stdout.
    Grid(GridArgs),
}

/// Arguments for the `grid` subcommand.
#[derive(Debug, clap::Args)]
pub struct GridArgs {
    /// Month to print (YYYY-MM), or a day to print selected (YYYY-MM-DD).
    #[arg(value_parser = parse_target, value_name = "YYYY-MM[-DD]")]
    pub target: Option<Target>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Day(CalendarDate),
    /// `(month0, year)`
    Month(u32, i32),
}

impl Target {
    /// The date the picker is opened on: the day itself, or the 1st.
    pub fn selected(self) -> CalendarDate {
        match self {
            Target::Day(d)            => d,
            Target::Month(month, year) => CalendarDate::new(year, month, 1),
        }
    }
}

fn parse_target(arg: &str) -> Result<Target, PickerError> {
    if let Ok(d) = arg.parse::<CalendarDate>() {
        return Ok(Target::Day(d));
    }
    let d: CalendarDate = format!("{arg}-01").parse()
        .map_err(|_| PickerError::InvalidDate(format!("{arg:?}: expected YYYY-MM or YYYY-MM-DD")))?;
    Ok(Target::Month(d.month, d.year))
}
