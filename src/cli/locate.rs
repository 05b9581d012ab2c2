use std::path::PathBuf;

use clap::Parser;
use dialoguer::Confirm;
use escapegen::{Located, Locator, Planner};
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `escape locate`.
#[derive(Debug, Parser)]
#[command(about = "Detect and confirm your home city")]
pub struct Locate {
    /// Accept the detected city without prompting
    #[arg(long, short)]
    yes: bool,
}

impl Locate {
    #[instrument(skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut planner = Planner::open(&root);

        let locator = match Locator::new() {
            Ok(locator) => locator,
            Err(err) => {
                // Location failures are never fatal; the typed city stands.
                eprintln!("{}", err.to_string().warning());
                return Ok(());
            }
        };

        println!("Detecting your city...");
        match locator.locate() {
            Ok(Located { city, coords }) => {
                let accept = self.yes
                    || Confirm::new()
                        .with_prompt(format!("In {city}?"))
                        .default(true)
                        .interact()?;
                if accept {
                    planner.accept_location(city.clone(), coords)?;
                    println!("{}", format!("Home city set to {city}.").success());
                } else {
                    let kept = planner.preferences().city.clone();
                    if kept.is_empty() {
                        println!("Okay, no city set. Pass one with 'escape generate --city'.");
                    } else {
                        println!("Okay, keeping '{kept}'.");
                    }
                }
            }
            Err(err) => eprintln!("{}", err.to_string().warning()),
        }

        Ok(())
    }
}
