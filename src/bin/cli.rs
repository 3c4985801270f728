use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use uniconnect::cli::{render_calendar, render_semester_list, render_summary};
use uniconnect::modules::{AcademicCalendarService, SemesterService};
use uniconnect::utils::date_format::MozambiqueDateFormatter;
use uniconnect_config::CalendarConfig;
use uniconnect_core::{Clock, SystemClock, parse_reference_time};
use uniconnect_models::SemesterId;

#[derive(Parser)]
#[command(name = "uniconnect-cli")]
#[command(about = "UniConnect CLI - Academic calendar tools", long_about = None)]
struct Cli {
    /// Log service activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the previous, current and next academic years
    Calendar {
        /// Reference date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(long, value_parser = parse_at)]
        at: Option<NaiveDateTime>,
    },
    /// List the semesters of a range of academic years, newest first
    Semesters {
        /// First academic year (inclusive)
        #[arg(long)]
        from: i32,

        /// Last academic year (inclusive)
        #[arg(long)]
        to: i32,

        /// Reference date; defaults to now
        #[arg(long, value_parser = parse_at)]
        at: Option<NaiveDateTime>,
    },
    /// Show one semester of the previous, current or next academic year
    Semester {
        /// Semester ID, e.g. 2025-S1
        id: String,

        /// Reference date; defaults to now
        #[arg(long, value_parser = parse_at)]
        at: Option<NaiveDateTime>,
    },
}

fn parse_at(raw: &str) -> Result<NaiveDateTime, String> {
    parse_reference_time(raw)
        .ok_or_else(|| format!("invalid date '{raw}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"))
}

fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    if cli.verbose {
        uniconnect_observability::init_basic_console_logging();
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<ExitCode> {
    let calendar_config = CalendarConfig::from_env();
    let clock = SystemClock::new(calendar_config.timezone);
    let formatter = MozambiqueDateFormatter;

    match command {
        Commands::Calendar { at } => {
            let now = at.unwrap_or_else(|| clock.now());
            let calendar = AcademicCalendarService::get_academic_calendar(now)?;
            print!("{}", render_calendar(&calendar, &formatter));
        }
        Commands::Semesters { from, to, at } => {
            SemesterService::validate_year_range(from, to, calendar_config.max_year_span)?;
            let now = at.unwrap_or_else(|| clock.now());
            let semesters = AcademicCalendarService::get_semesters_for_years(from, to, now)?;
            print!("{}", render_semester_list(&semesters, &formatter));
        }
        Commands::Semester { id, at } => {
            let semester_id: SemesterId = id.parse()?;
            let now = at.unwrap_or_else(|| clock.now());

            let Some(semester) = AcademicCalendarService::find_semester(semester_id, now)
                .context("Failed to compute academic calendar")?
            else {
                eprintln!("Semester {semester_id} is not in the previous, current or next academic year");
                return Ok(ExitCode::FAILURE);
            };

            let summary = SemesterService::summarize(semester, now, &formatter)?;
            print!("{}", render_summary(&summary));
        }
    }

    Ok(ExitCode::SUCCESS)
}
