//! Workout ID generation and parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of trailing epoch-millisecond digits kept in an id.
const ID_DIGITS: u32 = 10;

/// Opaque identifier for a workout.
///
/// Generated from the creation time: the last ten decimal digits of the
/// epoch milliseconds. Stored as a string so ids written by other clients
/// load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Generate an id from a creation timestamp.
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        let millis = timestamp.timestamp_millis().unsigned_abs();
        Self::from_number(millis % 10u64.pow(ID_DIGITS))
    }

    fn from_number(n: u64) -> Self {
        Self(format!("{:0width$}", n, width = ID_DIGITS as usize))
    }

    /// The id that follows this one numerically, wrapping within ten digits.
    ///
    /// Ids that are not purely numeric get a numeric suffix instead.
    pub fn successor(&self) -> Self {
        match self.0.parse::<u64>() {
            Ok(n) => Self::from_number((n + 1) % 10u64.pow(ID_DIGITS)),
            Err(_) => Self(format!("{}-1", self.0)),
        }
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WorkoutId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for WorkoutId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
