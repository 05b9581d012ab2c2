use std::path::PathBuf;

use clap::Parser;
use escapegen::Planner;
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `escape complete`.
#[derive(Debug, Parser)]
#[command(about = "Mark a trip as completed")]
pub struct Complete {
    /// The id of the trip, from the results or the board.
    id: String,
}

impl Complete {
    #[instrument(skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut planner = Planner::open(&root);
        let trip = planner.mark_completed(&self.id)?;
        println!(
            "{}",
            format!("✅ Marked {} as completed.", trip.destination()).success()
        );
        Ok(())
    }
}
