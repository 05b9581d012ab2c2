use std::path::PathBuf;

use clap::Parser;
use escapegen::{Planner, TripStatus, domain::trip::Tag};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

/// Command arguments for `escape results`.
#[derive(Debug, Parser, Default)]
#[command(about = "Re-print the last generation's results")]
pub struct Results {}

impl Results {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let planner = Planner::open(&root);
        print_results(&planner);
        Ok(())
    }
}

/// Renders the active results list, with board membership markers.
///
/// Shared between `generate` and `results`.
pub(crate) fn print_results(planner: &Planner) {
    let trips = planner.results();
    if trips.is_empty() {
        println!("No results yet. Run 'escape generate' to discover escapes.");
        return;
    }

    // The first pick's nudge doubles as the "why go now" banner.
    if let Some(nudge) = trips
        .first()
        .map(|t| t.payload.nudge_reason.as_str())
        .filter(|reason| !reason.is_empty())
    {
        println!("Why go now? {}", format!("\"{nudge}\"").info());
        println!();
    }

    let narrow = is_narrow();
    if !narrow {
        println!(
            "{:<8} {:<22} {:>6} {:<14} {:<10} {:>5}  {}",
            "ID", "Destination", "km", "Travel", "Budget", "Score", "Tag"
        );
    }

    for trip in trips {
        let marker = match planner.board().get(trip.id()).map(|t| t.status) {
            Some(TripStatus::Completed) => "✓ ",
            Some(_) => "● ",
            None => "",
        };
        if narrow {
            println!("{} {}{}", trip.id(), marker, trip.destination());
            println!(
                "  {}",
                format!(
                    "{} km · {} · {} · {}/10",
                    trip.payload.distance,
                    trip.payload.travel_time,
                    trip.payload.budget_range,
                    trip.payload.reality_score
                )
                .dim()
            );
        } else {
            let tag = match trip.payload.tag {
                Some(Tag::Overrated) => "Overrated".warning(),
                Some(Tag::Underrated) => "Underrated".success(),
                None => String::new(),
            };
            println!(
                "{:<8} {:<22} {:>6} {:<14} {:<10} {:>5}  {}",
                trip.id(),
                format!("{marker}{}", trip.destination()),
                trip.payload.distance,
                trip.payload.travel_time,
                trip.payload.budget_range,
                trip.payload.reality_score,
                tag
            );
        }
    }

    println!();
    println!(
        "{}",
        "Use 'escape show <id>' for the full card, 'escape save <id>' to keep one.".dim()
    );
}
