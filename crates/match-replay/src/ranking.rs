//! Leaderboard ranking

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tournament::Leaderboard;

/// One row of the ranked leaderboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position; tied scores still get distinct positions
    pub rank: usize,
    pub name: String,
    pub score: f64,
}

/// Rank participants by score, highest first.
///
/// The sort is stable: equal scores keep the order they have in `leaderboard`.
pub fn rank(leaderboard: &Leaderboard) -> Vec<Standing> {
    let mut entries: Vec<(&str, f64)> = leaderboard.iter().collect();
    // -0.0 and 0.0 compare equal here, so they stay in insertion order
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    debug!(participants = entries.len(), "ranked leaderboard");

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (name, score))| Standing {
            rank: i + 1,
            name: name.to_string(),
            score,
        })
        .collect()
}
