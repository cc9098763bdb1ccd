//! Match Replay for Iterated Prisoner's Dilemma results
//!
//! Rebuilds round-by-round payoffs and outcomes from recorded tournament
//! histories, ranks the leaderboard and selects matchups for display.
//! This crate is compiled to:
//! - Native (for the terminal viewer)
//! - WASM (for the browser viewer)

mod action;
mod error;
mod matchups;
mod ranking;
mod replay;
mod tournament;

#[cfg(feature = "wasm")]
mod wasm;

pub use action::{Action, ActionHistory};
pub use error::{ReplayError, Result};
pub use matchups::{select, MatchupView};
pub use ranking::{rank, Standing};
pub use replay::{reconstruct, replay, Reconstruction, RoundOutcome, RoundResult};
pub use tournament::{Leaderboard, Match, StrategyResult, Tournament};

/// Payoff matrix for the Prisoner's Dilemma
///
/// Indexed opponent first: `payoff(opponent, own)`.
/// Returns (own_score, opponent_score)
pub fn payoff(opponent: Action, own: Action) -> (u8, u8) {
    match (opponent, own) {
        (Action::Defect, Action::Defect) => (1, 1),
        (Action::Defect, Action::Cooperate) => (0, 5),
        (Action::Cooperate, Action::Defect) => (5, 0),
        (Action::Cooperate, Action::Cooperate) => (3, 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_matrix() {
        assert_eq!(payoff(Action::Defect, Action::Defect), (1, 1));
        assert_eq!(payoff(Action::Defect, Action::Cooperate), (0, 5));
        assert_eq!(payoff(Action::Cooperate, Action::Defect), (5, 0));
        assert_eq!(payoff(Action::Cooperate, Action::Cooperate), (3, 3));
    }

    #[test]
    fn test_payoff_round_totals() {
        let total = |opponent, own| {
            let (a, b) = payoff(opponent, own);
            a + b
        };
        assert_eq!(total(Action::Defect, Action::Defect), 2);
        assert_eq!(total(Action::Defect, Action::Cooperate), 5);
        assert_eq!(total(Action::Cooperate, Action::Defect), 5);
        assert_eq!(total(Action::Cooperate, Action::Cooperate), 6);
    }

    #[test]
    fn test_payoff_symmetric_under_role_swap() {
        let actions = [Action::Defect, Action::Cooperate];
        for opponent in actions {
            for own in actions {
                let (mine, theirs) = payoff(opponent, own);
                assert_eq!(payoff(own, opponent), (theirs, mine));
            }
        }
    }
}
