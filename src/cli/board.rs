use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use escapegen::{DateWindow, Planner, StatusFilter, TripRecord, TripStatus};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

/// Command arguments for `escape board`.
#[derive(Debug, Parser, Default)]
#[command(about = "List your board with filters")]
pub struct Board {
    /// Case-insensitive substring match against destination names.
    #[arg(long, short, default_value = "")]
    search: String,

    /// Recency window.
    #[arg(long, value_enum, default_value_t)]
    window: DateWindow,

    /// Status filter.
    #[arg(long, value_enum, default_value_t)]
    status: StatusFilter,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and format rows for scripting.
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Board {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let planner = Planner::open(&root);
        let board = planner.board();

        let filtered: Vec<&TripRecord> = board
            .filtered(&self.search, self.window, self.status, Utc::now())
            .collect();

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&filtered)?),
            OutputFormat::Table if self.quiet => {
                for trip in &filtered {
                    println!(
                        "{}\t{}\t{}\t{}",
                        trip.id(),
                        status_label(trip.status),
                        trip.votes,
                        trip.destination()
                    );
                }
            }
            OutputFormat::Table => {
                if board.is_empty() {
                    println!("Board is empty. Run 'escape generate' to find your next escape.");
                    return Ok(());
                }
                if filtered.is_empty() {
                    println!("No trips match those filters.");
                    return Ok(());
                }
                Self::output_table(&filtered, board.len());
            }
        }

        Ok(())
    }

    fn output_table(filtered: &[&TripRecord], total: usize) {
        let narrow = is_narrow();

        if narrow {
            // Stacked output for narrow terminals
            for trip in filtered {
                println!("{} {}", trip.id(), trip.destination());
                println!("  {}", describe(trip).dim());
            }
        } else {
            println!(
                "{:<8} {:<22} {:<10} {:>5}  {}",
                "ID", "Destination", "Status", "Votes", "When"
            );
            for trip in filtered {
                println!(
                    "{:<8} {:<22} {:<10} {:>5}  {}",
                    trip.id(),
                    trip.destination(),
                    status_label(trip.status),
                    trip.votes,
                    when(trip).dim()
                );
            }
        }

        println!();
        println!("{}", format!("{} of {} trip(s)", filtered.len(), total).dim());
    }
}

const fn status_label(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Discovered => "discovered",
        TripStatus::Saved => "saved",
        TripStatus::Completed => "completed",
    }
}

fn when(trip: &TripRecord) -> String {
    trip.completion_date.map_or_else(
        || format!("added {}", trip.timestamp.format("%Y-%m-%d")),
        |done| format!("done {}", done.format("%Y-%m-%d")),
    )
}

fn describe(trip: &TripRecord) -> String {
    format!(
        "{} · {} vote(s) · {}",
        status_label(trip.status),
        trip.votes,
        when(trip)
    )
}
