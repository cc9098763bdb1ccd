mod cli;
mod config;
mod render;

use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use clap::Parser;
use match_replay::{rank, Tournament};
use tracing::info;

use cli::Cli;
use config::ViewerConfig;

fn main() {
    let cli = Cli::parse();
    cli.tracing.init_tracing();
    run(&cli).unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn run(cli: &Cli) -> Result<()> {
    let tournament = load(cli)?;

    if cli.list {
        for standing in rank(&tournament.leaderboard) {
            println!("{}", standing.name);
        }
        return Ok(());
    }

    let config = ViewerConfig::from_cli(cli);
    let report = render::render_report(&tournament, cli.filter.as_deref(), &config);
    print!("{}", report.text);

    if report.failed > 0 {
        bail!("{} matchup(s) could not be reconstructed", report.failed);
    }
    Ok(())
}

fn load(cli: &Cli) -> Result<Tournament> {
    let file = File::open(&cli.results)
        .with_context(|| format!("could not open {}", cli.results.display()))?;
    let tournament = Tournament::from_reader(BufReader::new(file))
        .with_context(|| format!("could not load {}", cli.results.display()))?;

    info!(
        participants = tournament.leaderboard.len(),
        matches = tournament.matches.len(),
        "loaded results"
    );
    Ok(tournament)
}
