mod cli;

use anyhow::Result;
use calpicker::{
    app::{AcceptedReport, App, Outcome},
    calendar::build_grid,
    config::{self, AppConfig},
    ui, CalendarDate, CalendarPicker,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command, GridArgs, Target};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // ── calpicker grid ────────────────────────────────────────────────────
        Some(Command::Grid(ref args)) => cmd_grid(&cli, args),
        // ── calpicker (TUI) ───────────────────────────────────────────────────
        None => run_tui(&cli),
    }
}

fn load_config(cli: &Cli, selected: CalendarDate) -> Result<(calpicker::PickerOptions, AppConfig)> {
    let cfg = AppConfig::load()?;
    let mut options = cfg.picker.clone().into_options(selected);
    if cli.monday { options.start_from_monday = true; }
    Ok((options, cfg))
}

// ─── Grid command ─────────────────────────────────────────────────────────────

fn cmd_grid(cli: &Cli, args: &GridArgs) -> Result<()> {
    // Logging to stderr so it doesn't interfere with the printed grid
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let selected   = args.target.map_or_else(CalendarDate::today, Target::selected);
    let month_only = match args.target {
        Some(Target::Month(month, year)) => Some((month, year)),
        _                                => None,
    };
    let (options, _) = load_config(cli, selected)?;
    let picker = CalendarPicker::new(options)?;

    let lines = match month_only {
        Some((month, year)) => ui::plain_month(
            &picker.month_label(),
            &picker.weekday_labels(),
            &build_grid(month, year, picker.options().start_from_monday, None),
        ),
        None => ui::plain_lines(&picker),
    };
    for line in lines { println!("{line}"); }
    Ok(())
}

// ─── TUI ─────────────────────────────────────────────────────────────────────

fn run_tui(cli: &Cli) -> Result<()> {
    let log_dir = config::data_dir();
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "calpicker.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    tracing::info!("Starting calpicker");

    let selected = cli.date.unwrap_or_else(CalendarDate::today);
    let (options, cfg) = load_config(cli, selected)?;
    let mut app = App::new(options, cfg.palette())?;

    let outcome = app.run()?;
    drop(_guard);

    match outcome {
        Outcome::Accepted(date) if cli.json => {
            println!("{}", serde_json::to_string(&AcceptedReport::from(date))?);
        }
        Outcome::Accepted(date) => println!("{date}"),
        Outcome::Cancelled => std::process::exit(1),
    }
    Ok(())
}
