//! Tournament results record as written by the tournament runner

use core::fmt;
use std::collections::HashMap;
use std::io::Read;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::action::ActionHistory;
use crate::error::Result;
use crate::replay::{replay, Reconstruction};

/// One side of a recorded match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub name: String,
    /// Not every runner writes a per-match score
    #[serde(default)]
    pub score: f64,
    pub history: ActionHistory,
}

/// A recorded pairwise match. Side order carries no meaning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub s1: StrategyResult,
    pub s2: StrategyResult,
}

impl Match {
    pub fn involves(&self, name: &str) -> bool {
        self.s1.name == name || self.s2.name == name
    }

    /// Replay with `s1` as side A
    pub fn replay(&self) -> Result<Reconstruction> {
        replay(&self.s1.history, &self.s2.history)
    }
}

/// Aggregate score per participant, in the order the record lists them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Leaderboard {
    entries: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, score: f64) {
        let name = name.into();
        match self.positions.get(&name) {
            Some(&i) => self.entries[i].1 = score,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, score));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut leaderboard = Leaderboard::new();
        for (name, score) in iter {
            leaderboard.insert(name, score);
        }
        leaderboard
    }
}

impl Serialize for Leaderboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

struct LeaderboardVisitor;

impl<'de> Visitor<'de> for LeaderboardVisitor {
    type Value = Leaderboard;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of participant name to score")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut leaderboard = Leaderboard::new();
        while let Some((name, score)) = access.next_entry::<String, f64>()? {
            leaderboard.insert(name, score);
        }
        Ok(leaderboard)
    }
}

impl<'de> Deserialize<'de> for Leaderboard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(LeaderboardVisitor)
    }
}

/// A complete results record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub leaderboard: Leaderboard,
    pub matches: Vec<Match>,
}

impl Tournament {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReplayError;

    const RESULTS: &str = r#"{
        "leaderboard": {"tit_for_tat": 2.5, "grim_trigger": 2.5, "joss": 3.1},
        "matches": [
            {"s1": {"name": "tit_for_tat", "score": 250.0, "history": "1100"},
             "s2": {"name": "joss", "score": 310.0, "history": "1001"}},
            {"s1": {"name": "grim_trigger", "history": "11"},
             "s2": {"name": "joss", "history": "10"}}
        ]
    }"#;

    #[test]
    fn test_parse_record() {
        let tournament = Tournament::from_json(RESULTS).unwrap();

        let names: Vec<_> = tournament.leaderboard.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["tit_for_tat", "grim_trigger", "joss"]);
        assert_eq!(tournament.leaderboard.iter().last(), Some(("joss", 3.1)));

        assert_eq!(tournament.matches.len(), 2);
        assert_eq!(tournament.matches[0].s1.score, 250.0);
        assert_eq!(tournament.matches[1].s1.score, 0.0);
        assert_eq!(tournament.matches[1].s2.history.to_string(), "10");
        assert!(tournament.matches[0].involves("joss"));
        assert!(!tournament.matches[0].involves("grim_trigger"));
    }

    #[test]
    fn test_from_reader() {
        let tournament = Tournament::from_reader(RESULTS.as_bytes()).unwrap();
        assert_eq!(tournament.leaderboard.len(), 3);
    }

    #[test]
    fn test_serialize_keeps_leaderboard_order() {
        let leaderboard: Leaderboard = [("b", 1.0), ("a", 2.0)].into_iter().collect();
        let json = serde_json::to_string(&leaderboard).unwrap();
        assert_eq!(json, r#"{"b":1.0,"a":2.0}"#);
    }

    #[test]
    fn test_duplicate_name_keeps_first_position() {
        let mut leaderboard = Leaderboard::new();
        leaderboard.insert("a", 1.0);
        leaderboard.insert("b", 2.0);
        leaderboard.insert("a", 3.0);

        let entries: Vec<_> = leaderboard.iter().collect();
        assert_eq!(entries, vec![("a", 3.0), ("b", 2.0)]);
    }

    #[test]
    fn test_large_leaderboard_with_overwrites() {
        let mut leaderboard: Leaderboard = (0..10_000).map(|i| (format!("p{i}"), i as f64)).collect();
        leaderboard.insert("p42", -1.0);
        leaderboard.insert("p9999", 0.5);

        assert_eq!(leaderboard.len(), 10_000);
        assert_eq!(leaderboard.iter().nth(42), Some(("p42", -1.0)));
        assert_eq!(leaderboard.iter().last(), Some(("p9999", 0.5)));
    }

    #[test]
    fn test_invalid_history_fails_load() {
        let json = r#"{"leaderboard": {}, "matches": [
            {"s1": {"name": "a", "history": "012"}, "s2": {"name": "b", "history": "011"}}
        ]}"#;
        assert!(matches!(Tournament::from_json(json), Err(ReplayError::Parse(_))));
    }

    #[test]
    fn test_malformed_shape_fails_load() {
        assert!(Tournament::from_json(r#"{"leaderboard": {"a": "high"}, "matches": []}"#).is_err());
        assert!(Tournament::from_json(r#"{"leaderboard": {}}"#).is_err());
        assert!(Tournament::from_json("not json").is_err());
    }

    #[test]
    fn test_match_replay_reports_mismatch() {
        let json = r#"{"leaderboard": {"a": 1.0, "b": 1.0}, "matches": [
            {"s1": {"name": "a", "history": "0101"}, "s2": {"name": "b", "history": "01"}}
        ]}"#;
        let tournament = Tournament::from_json(json).unwrap();
        let err = tournament.matches[0].replay().unwrap_err();
        assert!(matches!(err, ReplayError::LengthMismatch { left: 4, right: 2 }));
    }

    #[test]
    fn test_leaderboard_name_without_matches() {
        let json = r#"{"leaderboard": {"lonely": 0.0}, "matches": []}"#;
        let tournament = Tournament::from_json(json).unwrap();
        assert_eq!(tournament.leaderboard.len(), 1);
        assert!(tournament.matches.is_empty());
    }
}
