//! JSON encoding of the persisted workout list.

use crate::error::{Result, TrailogError};
use crate::model::Workout;

/// Serialize the full ordered list as a JSON array.
pub fn encode_workouts(key: &str, workouts: &[Workout]) -> Result<String> {
    serde_json::to_string(workouts).map_err(|e| TrailogError::persistence(key, e.to_string()))
}

/// Parse a persisted value back into workouts.
///
/// `null` decodes to an empty list. Every record is rebuilt from its inputs,
/// so stored pace, speed and label never outlive the values they derive
/// from. One record with bad inputs rejects the whole value.
pub fn decode_workouts(key: &str, raw: &str) -> Result<Vec<Workout>> {
    let parsed: Option<Vec<Workout>> = serde_json::from_str(raw)
        .map_err(|e| TrailogError::persistence(key, format!("corrupt data: {}", e)))?;

    parsed
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, stored)| {
            stored.recompute().map_err(|e| {
                TrailogError::persistence(key, format!("corrupt record {}: {}", i, e))
            })
        })
        .collect()
}
