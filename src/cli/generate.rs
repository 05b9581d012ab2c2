use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use escapegen::{
    Generator, Planner,
    domain::preferences::{Budget, TravelMode, TripType, Vibe},
};
use indicatif::ProgressBar;
use tracing::instrument;

use super::{results, terminal::Colorize};

/// Command arguments for `escape generate`.
///
/// Omitted flags fall back to the last-used values, so `escape generate` on
/// its own reruns the previous preference set.
#[derive(Debug, Parser)]
#[command(about = "Generate fresh weekend trip options")]
pub struct Generate {
    /// Home city. Required the first time; remembered afterwards.
    #[arg(long)]
    city: Option<String>,

    /// Budget band for the whole weekend.
    #[arg(long, value_enum)]
    budget: Option<Budget>,

    /// The mood the trip should match.
    #[arg(long, value_enum)]
    vibe: Option<Vibe>,

    /// Preferred travel mode.
    #[arg(long, value_enum)]
    mode: Option<TravelMode>,

    /// Who's going.
    #[arg(long, value_enum)]
    trip_type: Option<TripType>,
}

impl Generate {
    #[instrument(skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut planner = Planner::open(&root);

        let mut prefs = planner.preferences().clone();
        if let Some(city) = self.city {
            prefs.city = city.trim().to_string();
        }
        if let Some(budget) = self.budget {
            prefs.budget = budget;
        }
        if let Some(vibe) = self.vibe {
            prefs.vibe = vibe;
        }
        if let Some(mode) = self.mode {
            prefs.travel_mode = mode;
        }
        if let Some(trip_type) = self.trip_type {
            prefs.trip_type = trip_type;
        }

        if prefs.city.is_empty() {
            anyhow::bail!("a home city is required: pass --city or run 'escape locate'");
        }

        // Remember the form values whether or not the generation succeeds.
        planner.set_preferences(prefs.clone())?;

        let generator = Generator::from_env(planner.config())?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!(
            "Scouring {} for {} escapes that match the {} vibe...",
            prefs.city,
            prefs.trip_type.to_string().to_lowercase(),
            prefs.vibe.to_string().to_lowercase(),
        ));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let generated = generator.generate(&prefs);
        spinner.finish_and_clear();

        let trips = generated.context("Something went wrong. Let's try again.")?;
        planner.replace_results(trips)?;

        println!(
            "{}",
            format!(
                "Curated {} weekend picks near {}.",
                planner.results().len(),
                prefs.city
            )
            .success()
        );
        println!();
        results::print_results(&planner);
        Ok(())
    }
}
