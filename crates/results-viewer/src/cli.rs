use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "View Iterated Prisoner's Dilemma tournament results")]
pub struct Cli {
    /// Results JSON file written by the tournament runner
    pub results: PathBuf,

    /// Only show matchups this participant played, with it listed first
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Decimal places for scores and averages
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Skip the per-matchup breakdown
    #[arg(long)]
    pub leaderboard_only: bool,

    /// Print the participant names accepted by --filter and exit
    #[arg(long)]
    pub list: bool,

    #[command(flatten)]
    pub tracing: TracingArgs,
}

/// Logging verbosity flags
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress all logging except warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl TracingArgs {
    /// `RUST_LOG` wins when set; otherwise the flags pick the level.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_level()));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .init();
    }

    fn default_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
