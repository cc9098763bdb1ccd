//! WASM bindings for the browser results viewer

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{rank, reconstruct, select, Reconstruction, Tournament};

fn parse_tournament(json: &str) -> Result<Tournament, JsError> {
    Tournament::from_json(json)
        .map_err(|e| JsError::new(&format!("Invalid results file: {}", e)))
}

/// Reconstruct a match from two encoded histories
///
/// # Arguments
/// * `history_a` - '0'/'1' history of the side shown first
/// * `history_b` - '0'/'1' history of the side shown second
///
/// # Returns
/// JSON serialized Reconstruction
#[wasm_bindgen]
pub fn reconstruct_histories(history_a: &str, history_b: &str) -> Result<JsValue, JsError> {
    let result = reconstruct(history_a, history_b)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Ranked leaderboard for a results file
#[wasm_bindgen]
pub fn rank_leaderboard(tournament_json: &str) -> Result<JsValue, JsError> {
    let tournament = parse_tournament(tournament_json)?;
    let standings = rank(&tournament.leaderboard);

    serde_wasm_bindgen::to_value(&standings)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct MatchupReport<'a> {
    first: &'a str,
    second: &'a str,
    swapped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    replay: Option<Reconstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Selected matchups, each with its reconstruction.
///
/// A matchup whose histories cannot be replayed carries `error` instead of
/// `replay`; it does not fail the whole selection.
#[wasm_bindgen]
pub fn select_matchups(tournament_json: &str, filter: Option<String>) -> Result<JsValue, JsError> {
    let tournament = parse_tournament(tournament_json)?;

    let reports: Vec<MatchupReport> = select(&tournament.matches, filter.as_deref())
        .into_iter()
        .map(|view| {
            let (replay, error) = match view.replay() {
                Ok(r) => (Some(r), None),
                Err(e) => (None, Some(e.to_string())),
            };
            MatchupReport {
                first: &view.first.name,
                second: &view.second.name,
                swapped: view.swapped,
                replay,
                error,
            }
        })
        .collect();

    serde_wasm_bindgen::to_value(&reports)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
