use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod calendar;
mod config;
mod dates;
mod projection;
mod report;

#[derive(Parser)]
#[command(name = "attendance-planner")]
#[command(about = "Semester attendance standing and 80% projection", long_about = None)]
struct Cli {
    /// JSON calendar file overriding the built-in 2024-25 semesters
    #[arg(long, global = true)]
    calendar: Option<PathBuf>,
    /// Reference date (YYYY-MM-DD) instead of today in IST
    #[arg(long, global = true)]
    date: Option<NaiveDate>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active semester's weekend, holiday and working-day counts
    Breakdown,
    /// Project attendance against the 80% threshold
    Project {
        #[arg(long)]
        held: i64,
        #[arg(long)]
        attended: i64,
    },
    /// List every configured semester with its totals
    Semesters,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let semesters = config::load_semesters(cli.calendar.as_deref())?;
    let today = cli.date.unwrap_or_else(dates::today_ist);

    match cli.command {
        Commands::Breakdown => {
            let active = calendar::resolve(&semesters, today);
            let summary = active
                .as_ref()
                .map(|active| (active.semester.name.as_str(), calendar::breakdown(active)));
            print!("{}", report::render_breakdown(summary));
        }
        Commands::Project { held, attended } => {
            // Input problems and semester breaks are expected outcomes, not
            // process failures; report them and exit cleanly.
            let input = match projection::validate(held, attended) {
                Ok(input) => input,
                Err(errors) => {
                    println!("{errors}");
                    return Ok(());
                }
            };
            let Some(active) = calendar::resolve(&semesters, today) else {
                println!(
                    "No active semester found for {}.",
                    dates::format_iso_date(today)
                );
                return Ok(());
            };
            let remaining = calendar::remaining_teaching_days(&active, today);
            let projection = projection::project(input, remaining);
            print!(
                "{}",
                report::render_projection(&active.semester.name, today, &projection)
            );
        }
        Commands::Semesters => {
            let entries: Vec<_> = semesters
                .iter()
                .map(|semester| {
                    let active = calendar::ActiveSemester {
                        rest_days: calendar::rest_days(semester),
                        semester,
                    };
                    (semester, calendar::breakdown(&active))
                })
                .collect();
            print!("{}", report::render_semester_list(&entries));
        }
    }

    Ok(())
}
