//! Match replay: per-round payoffs and outcomes rebuilt from recorded histories

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::action::{Action, ActionHistory};
use crate::error::{ReplayError, Result};
use crate::payoff;

/// Classification of one round, from side A's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both sides defected
    MutualDefection,
    /// A cooperated and was defected against
    ExploitedLoss,
    /// A defected against a cooperating B
    ExploitedWin,
    /// Both sides cooperated
    MutualCooperation,
}

impl RoundOutcome {
    pub fn classify(action_a: Action, action_b: Action) -> Self {
        match (action_a, action_b) {
            (Action::Defect, Action::Defect) => RoundOutcome::MutualDefection,
            (Action::Cooperate, Action::Defect) => RoundOutcome::ExploitedLoss,
            (Action::Defect, Action::Cooperate) => RoundOutcome::ExploitedWin,
            (Action::Cooperate, Action::Cooperate) => RoundOutcome::MutualCooperation,
        }
    }

    /// The same round seen from side B
    pub fn mirrored(self) -> Self {
        match self {
            RoundOutcome::ExploitedLoss => RoundOutcome::ExploitedWin,
            RoundOutcome::ExploitedWin => RoundOutcome::ExploitedLoss,
            same => same,
        }
    }
}

/// Result of a single replayed round
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: usize,
    pub action_a: Action,
    pub action_b: Action,
    pub score_a: u8,
    pub score_b: u8,
    pub outcome: RoundOutcome,
    pub cumulative_a: u32,
    pub cumulative_b: u32,
}

/// A fully reconstructed match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reconstruction {
    pub rounds: Vec<RoundResult>,
    pub total_score_a: u32,
    pub total_score_b: u32,
    pub round_count: usize,
    /// Mean payoff per round for A; 0.0 when no rounds were played
    pub average_a: f64,
    /// Mean payoff per round for B; 0.0 when no rounds were played
    pub average_b: f64,
}

impl Reconstruction {
    pub fn per_round_a(&self) -> Vec<u8> {
        self.rounds.iter().map(|r| r.score_a).collect()
    }

    pub fn per_round_b(&self) -> Vec<u8> {
        self.rounds.iter().map(|r| r.score_b).collect()
    }

    pub fn outcomes(&self) -> Vec<RoundOutcome> {
        self.rounds.iter().map(|r| r.outcome).collect()
    }
}

/// Reconstruct a match from two encoded histories (`'0'` = Defect, `'1'` = Cooperate).
///
/// Lengths are compared before decoding, so unequal histories always fail with
/// [`ReplayError::LengthMismatch`] regardless of their contents.
pub fn reconstruct(history_a: &str, history_b: &str) -> Result<Reconstruction> {
    check_lengths(history_a.chars().count(), history_b.chars().count())?;

    let a: ActionHistory = history_a.parse()?;
    let b: ActionHistory = history_b.parse()?;
    replay(&a, &b)
}

/// Reconstruct a match from two decoded histories
///
/// # Arguments
/// * `history_a` - Actions of the side reported first
/// * `history_b` - Actions of the side reported second
///
/// # Returns
/// Round-by-round payoffs and outcomes (from A's perspective) plus both averages
pub fn replay(history_a: &ActionHistory, history_b: &ActionHistory) -> Result<Reconstruction> {
    check_lengths(history_a.len(), history_b.len())?;

    let round_count = history_a.len();
    let mut rounds: Vec<RoundResult> = Vec::with_capacity(round_count);
    let mut total_a = 0u32;
    let mut total_b = 0u32;

    for (round, (action_a, action_b)) in history_a.iter().zip(history_b.iter()).enumerate() {
        // Opponent first: A's payoff is looked up with B's action as the opponent coordinate
        let (score_a, score_b) = payoff(action_b, action_a);
        total_a += score_a as u32;
        total_b += score_b as u32;

        rounds.push(RoundResult {
            round,
            action_a,
            action_b,
            score_a,
            score_b,
            outcome: RoundOutcome::classify(action_a, action_b),
            cumulative_a: total_a,
            cumulative_b: total_b,
        });
    }

    let average_a = average(total_a, round_count);
    let average_b = average(total_b, round_count);
    debug!(round_count, average_a, average_b, "reconstructed match");

    Ok(Reconstruction {
        rounds,
        total_score_a: total_a,
        total_score_b: total_b,
        round_count,
        average_a,
        average_b,
    })
}

fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        warn!(left, right, "histories differ in length");
        return Err(ReplayError::LengthMismatch { left, right });
    }
    Ok(())
}

fn average(total: u32, rounds: usize) -> f64 {
    if rounds == 0 {
        return 0.0;
    }
    total as f64 / rounds as f64
}
