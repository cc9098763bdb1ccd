//! Plain-text rendering of the ranked leaderboard and matchup breakdowns

use std::fmt::Write;

use match_replay::{rank, select, MatchupView, Reconstruction, Standing, Tournament};
use tracing::{error, info};

use crate::config::ViewerConfig;

/// Rendered output plus the number of matchups that could not be replayed
pub struct Report {
    pub text: String,
    pub failed: usize,
}

pub fn render_leaderboard(standings: &[Standing], config: &ViewerConfig) -> String {
    let width = standings.iter().map(|s| display_width(&s.name)).max().unwrap_or(0);
    let mut out = String::new();
    for s in standings {
        let rank = format!("#{}", s.rank);
        let _ = writeln!(
            out,
            "{:<5} {:<width$}  {:.prec$}",
            rank,
            s.name,
            s.score,
            width = width,
            prec = config.precision
        );
    }
    out
}

pub fn render_matchup(view: &MatchupView, replay: &Reconstruction, config: &ViewerConfig) -> String {
    let width = display_width(&view.first.name).max(display_width(&view.second.name));
    let first_strip: String = replay
        .rounds
        .iter()
        .map(|r| config.glyphs.glyph(r.outcome))
        .collect();
    let second_strip: String = replay
        .rounds
        .iter()
        .map(|r| config.glyphs.glyph(r.outcome.mirrored()))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{} vs {}", view.first.name, view.second.name);
    let rows = [
        (&view.first.name, replay.average_a, first_strip),
        (&view.second.name, replay.average_b, second_strip),
    ];
    for (name, average, strip) in rows {
        let _ = writeln!(
            out,
            "  {:<width$}  {:.prec$}  {}",
            name,
            average,
            strip,
            width = width,
            prec = config.precision
        );
    }
    out
}

// `{:<width$}` pads by chars, not bytes
fn display_width(name: &str) -> usize {
    name.chars().count()
}

/// Render the whole record. A matchup that fails to replay is reported in
/// place and does not stop the others.
pub fn render_report(tournament: &Tournament, filter: Option<&str>, config: &ViewerConfig) -> Report {
    let standings = rank(&tournament.leaderboard);
    let mut text = String::from("Leaderboard\n");
    text.push_str(&render_leaderboard(&standings, config));

    let mut failed = 0;
    if config.show_matchups {
        let views = select(&tournament.matches, filter);
        info!(matchups = views.len(), "rendering matchups");

        for view in &views {
            text.push('\n');
            match view.replay() {
                Ok(replay) => text.push_str(&render_matchup(view, &replay, config)),
                Err(e) => {
                    error!(first = %view.first.name, second = %view.second.name, "{}", e);
                    failed += 1;
                    let _ = writeln!(text, "{} vs {}", view.first.name, view.second.name);
                    let _ = writeln!(text, "  error: {}", e);
                }
            }
        }
    }

    Report { text, failed }
}
