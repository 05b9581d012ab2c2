use std::path::{Path, PathBuf};

mod board;
mod complete;
mod generate;
mod locate;
mod results;
mod save;
mod show;
mod terminal;
mod vote;

use clap::ArgAction;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the planner's data directory
    ///
    /// Defaults to an `escapegen` folder in the platform data directory.
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let root = self.root.unwrap_or_else(default_root);
        self.command
            .unwrap_or_else(|| Command::Board(board::Board::default()))
            .run(root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join("escapegen"))
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show the board (default)
    Board(board::Board),

    /// Initialize the data directory
    Init,

    /// Generate fresh weekend trip options
    Generate(generate::Generate),

    /// Re-print the last generation's results
    Results(results::Results),

    /// Show the full card for one trip
    Show(show::Show),

    /// Detect and confirm your home city
    Locate(locate::Locate),

    /// Save a trip to your board, or remove it if already there
    Save(save::Save),

    /// Mark a trip as completed
    Complete(complete::Complete),

    /// Add a vote to a group trip
    Vote(vote::Vote),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Board(command) => command.run(root)?,
            Self::Init => Init::run(&root)?,
            Self::Generate(command) => command.run(root)?,
            Self::Results(command) => command.run(root)?,
            Self::Show(command) => command.run(root)?,
            Self::Locate(command) => command.run(root)?,
            Self::Save(command) => command.run(root)?,
            Self::Complete(command) => command.run(root)?,
            Self::Vote(command) => command.run(root)?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {}

impl Init {
    #[instrument]
    fn run(root: &Path) -> anyhow::Result<()> {
        use std::fs;

        let config_path = root.join("config.toml");
        if config_path.exists() {
            anyhow::bail!("Data directory already initialized (found existing config.toml)");
        }

        fs::create_dir_all(root)
            .map_err(|e| anyhow::anyhow!("Failed to create data directory: {e}"))?;

        let config = escapegen::Config::default();
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create config.toml: {e}"))?;

        println!("Initialized planner data in {}", root.display());
        println!("  Created: config.toml");
        println!();
        println!("Next steps:");
        println!("  export GEMINI_API_KEY=<your key>");
        println!("  escape generate --city Pune");

        Ok(())
    }
}
