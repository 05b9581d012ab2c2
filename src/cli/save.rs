use std::path::PathBuf;

use clap::Parser;
use escapegen::{Planner, SaveOutcome};
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `escape save`.
///
/// Saving is a toggle keyed on board membership: saving a trip that is
/// already on the board removes it, even if it was marked completed.
#[derive(Debug, Parser)]
#[command(about = "Save a trip to your board, or remove it if already there")]
pub struct Save {
    /// The id of the trip, from the results or the board.
    id: String,
}

impl Save {
    #[instrument(skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut planner = Planner::open(&root);
        let (trip, outcome) = planner.toggle_save(&self.id)?;

        match outcome {
            SaveOutcome::Saved => println!(
                "{}",
                format!("Saved {} to your board.", trip.destination()).success()
            ),
            SaveOutcome::Removed => {
                println!("Removed {} from your board.", trip.destination());
            }
        }
        Ok(())
    }
}
