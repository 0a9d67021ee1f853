//! Workout kind discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrailogError;

/// The two kinds of workout that can be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// All kinds, in display order.
    pub const ALL: [WorkoutKind; 2] = [WorkoutKind::Running, WorkoutKind::Cycling];

    /// Lowercase wire name, also used for ordering by type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    /// Capitalized name used in labels.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    /// Name of the kind-specific input metric.
    pub fn input_metric(&self) -> &'static str {
        match self {
            Self::Running => "cadence",
            Self::Cycling => "elevation gain",
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = TrailogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            _ => Err(TrailogError::UnknownKind {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("Running".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        assert_eq!(" cycling ".parse::<WorkoutKind>().unwrap(), WorkoutKind::Cycling);
    }

    #[test]
    fn rejects_unknown() {
        let err = "swimming".parse::<WorkoutKind>().unwrap_err();
        assert!(matches!(err, TrailogError::UnknownKind { .. }));
    }

    #[test]
    fn wire_names_order_cycling_first() {
        assert!(WorkoutKind::Cycling.as_str() < WorkoutKind::Running.as_str());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&WorkoutKind::Cycling).unwrap(),
            "\"cycling\""
        );
    }
}
