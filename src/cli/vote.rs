use std::path::PathBuf;

use clap::Parser;
use escapegen::Planner;
use tracing::instrument;

/// Command arguments for `escape vote`.
#[derive(Debug, Parser)]
#[command(about = "Add a vote to a group trip")]
pub struct Vote {
    /// The id of the trip, from the results or the board.
    id: String,
}

impl Vote {
    #[instrument(skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut planner = Planner::open(&root);
        let destination = planner
            .find_trip(&self.id)
            .map(|trip| trip.destination().to_string());

        let voted = planner.vote(&self.id)?;
        let votes = voted.on_board.or(voted.in_results).unwrap_or_default();

        println!(
            "+1 for {}. Now at {votes} vote(s).",
            destination.unwrap_or_else(|| self.id.clone())
        );
        Ok(())
    }
}
