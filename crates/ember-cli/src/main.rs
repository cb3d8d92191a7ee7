use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;

use ember_cli::commands::{self, Workspace};
use ember_cli::{config, logging};
use ember_core::models::parse_date;
use ember_storage::DateRange;

#[derive(Parser, Debug)]
#[command(
    name = "ember",
    about = "Score the Ember Method assessment and track the daily protocol",
    version
)]
struct Cli {
    /// Use this data directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Config directory (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a file of answers (question id -> 0..3)
    Score(ScoreArgs),
    /// Show the saved assessment result
    Result,
    /// Show the protocol for a profile (defaults to the saved result's)
    Protocol {
        label: Option<String>,
    },
    /// Create, update and inspect daily entries
    Entry {
        #[command(subcommand)]
        command: EntryCommand,
    },
    /// Streaks, adherence and weekly trends
    Analytics(AnalyticsArgs),
    /// Per-day completion status between two dates
    Calendar(CalendarArgs),
    /// Write the tracking dump or the assessment report
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },
    /// Remove every stored daily entry
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct ScoreArgs {
    answers: PathBuf,
    /// Keep the result as the saved assessment
    #[arg(long)]
    save: bool,
    /// Keep the answers and result as a pending assessment
    #[arg(long)]
    pending: bool,
}

#[derive(Subcommand, Debug)]
enum EntryCommand {
    /// Merge a JSON entry document into the entry for its date
    Upsert { file: PathBuf },
    /// Print the entry for a date (YYYY-MM-DD)
    Show {
        #[arg(value_parser = parse_date_arg)]
        date: Date,
    },
}

#[derive(Args, Debug)]
struct AnalyticsArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    from: Option<Date>,
    /// Last date to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    to: Option<Date>,
    /// Print the full analytics as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CalendarArgs {
    #[arg(value_parser = parse_date_arg)]
    from: Date,
    #[arg(value_parser = parse_date_arg)]
    to: Date,
    /// Evaluation date for future/missed status (defaults to today)
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<Date>,
}

#[derive(Subcommand, Debug)]
enum ExportCommand {
    /// Tracking data as JSON
    Tracking { out: Option<PathBuf> },
    /// Saved assessment result as a DOCX report
    Report { out: Option<PathBuf> },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    Show,
    /// 90-day, 6-month, 1-year or custom
    SetPeriod { period: String },
    SetDataDir { dir: PathBuf },
}

fn parse_date_arg(value: &str) -> Result<Date, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let filter = logging::init(cli.json_logs);

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => config::config_dir()?,
    };
    let mut ws = Workspace::open(config_dir, cli.data_dir)?;
    logging::apply_configured_level(&filter, &ws.config.log_level)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Score(args) => {
            commands::score(&ws, &args.answers, args.save, args.pending, &mut out)?;
        }
        Command::Result => {
            commands::show_result(&ws, &mut out)?;
        }
        Command::Protocol { label } => commands::protocol(&ws, label.as_deref(), &mut out)?,
        Command::Entry { command } => match command {
            EntryCommand::Upsert { file } => {
                commands::entry_upsert(&ws, &file, &mut out)?;
            }
            EntryCommand::Show { date } => {
                commands::entry_show(&ws, date, &mut out)?;
            }
        },
        Command::Analytics(args) => {
            let range = DateRange {
                from: args.from,
                to: args.to,
            };
            commands::analytics(&ws, range, args.json, &mut out)?;
        }
        Command::Calendar(args) => {
            if let Some(today) = args.today {
                ws = ws.with_today(today);
            }
            commands::calendar(&ws, args.from, args.to, &mut out)?;
        }
        Command::Export { command } => match command {
            ExportCommand::Tracking { out: path } => {
                commands::export_tracking(&ws, path, &mut out)?;
            }
            ExportCommand::Report { out: path } => {
                commands::export_report(&ws, path, &mut out)?;
            }
        },
        Command::Clear { yes } => {
            commands::clear(&ws, yes, &mut out)?;
        }
        Command::Config { command } => match command {
            ConfigCommand::Show => commands::config_show(&ws, &mut out)?,
            ConfigCommand::SetPeriod { period } => {
                commands::config_set_period(&mut ws, &period, &mut out)?
            }
            ConfigCommand::SetDataDir { dir } => {
                commands::config_set_data_dir(&mut ws, dir, &mut out)?
            }
        },
    }

    out.flush()?;
    Ok(())
}
