//! Matchup selection for per-participant views

use tracing::debug;

use crate::error::Result;
use crate::replay::{replay, Reconstruction};
use crate::tournament::{Match, StrategyResult};

/// A borrowed view of a match with its sides possibly reordered.
///
/// The underlying [`Match`] is never modified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchupView<'a> {
    pub first: &'a StrategyResult,
    pub second: &'a StrategyResult,
    /// True when `first` is the match's `s2`
    pub swapped: bool,
}

impl<'a> MatchupView<'a> {
    pub fn new(m: &'a Match) -> Self {
        Self { first: &m.s1, second: &m.s2, swapped: false }
    }

    /// View of `m` with `name` on the first side; `None` if `name` did not play
    pub fn from_perspective(m: &'a Match, name: &str) -> Option<Self> {
        if !m.involves(name) {
            return None;
        }
        if m.s1.name == name {
            Some(Self::new(m))
        } else {
            Some(Self { first: &m.s2, second: &m.s1, swapped: true })
        }
    }

    /// Replay with `first` as side A
    pub fn replay(&self) -> Result<Reconstruction> {
        replay(&self.first.history, &self.second.history)
    }
}

/// Select the matches to display.
///
/// With no filter every match is returned in order. With a filter, only
/// matches the named participant played are returned (exact, case-sensitive),
/// each with that participant first. An unknown name yields no matches.
pub fn select<'a>(matches: &'a [Match], filter: Option<&str>) -> Vec<MatchupView<'a>> {
    let selected: Vec<_> = match filter {
        None => matches.iter().map(MatchupView::new).collect(),
        Some(name) => matches
            .iter()
            .filter_map(|m| MatchupView::from_perspective(m, name))
            .collect(),
    };

    debug!(filter, total = matches.len(), selected = selected.len(), "selected matchups");
    selected
}
