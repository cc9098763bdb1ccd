//! Actions and encoded action histories

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ReplayError;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Defect,
    Cooperate,
}

impl Action {
    /// Decode a single history character: '0' = Defect, '1' = Cooperate
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Action::Defect),
            '1' => Some(Action::Cooperate),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Action::Defect => '0',
            Action::Cooperate => '1',
        }
    }
}

/// The actions one participant took across a match, indexed by round.
///
/// Serialized as the compact `'0'`/`'1'` string used in results files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActionHistory(Vec<Action>);

impl ActionHistory {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for ActionHistory {
    type Err = ReplayError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        encoded
            .chars()
            .enumerate()
            .map(|(index, found)| {
                Action::from_char(found).ok_or(ReplayError::InvalidAction { index, found })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for ActionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.0 {
            write!(f, "{}", action.as_char())?;
        }
        Ok(())
    }
}

impl FromIterator<Action> for ActionHistory {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ActionHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ActionHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        encoded.parse().map_err(serde::de::Error::custom)
    }
}
