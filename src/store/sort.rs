//! Sort keys for the workout list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::TrailogError;
use crate::model::Workout;

/// Field a workout list can be ordered by.
///
/// Each key maps to a fixed accessor; there is no lookup by field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Group by kind: `cycling` before `running`.
    Type,
    /// Ascending distance.
    Distance,
    /// Ascending duration.
    Duration,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Type, SortKey::Distance, SortKey::Duration];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Distance => "distance",
            Self::Duration => "duration",
        }
    }

    /// Compare two workouts on this key alone.
    ///
    /// Callers rely on a stable sort to keep ties in their prior order.
    pub fn compare(&self, a: &Workout, b: &Workout) -> Ordering {
        match self {
            Self::Type => a.kind().as_str().cmp(b.kind().as_str()),
            Self::Distance => a.distance().total_cmp(&b.distance()),
            Self::Duration => a.duration().total_cmp(&b.duration()),
        }
    }
}

impl FromStr for SortKey {
    type Err = TrailogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "type" | "kind" => Ok(Self::Type),
            "distance" => Ok(Self::Distance),
            "duration" => Ok(Self::Duration),
            _ => Err(TrailogError::UnknownSortKey {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;

    fn running(distance: f64, duration: f64) -> Workout {
        Workout::create_running(Coordinates::new(0.0, 0.0).unwrap(), distance, duration, 170.0)
            .unwrap()
    }

    fn cycling(distance: f64, duration: f64) -> Workout {
        Workout::create_cycling(Coordinates::new(0.0, 0.0).unwrap(), distance, duration, 10.0)
            .unwrap()
    }

    #[test]
    fn parses_known_keys() {
        assert_eq!("type".parse::<SortKey>().unwrap(), SortKey::Type);
        assert_eq!("Distance".parse::<SortKey>().unwrap(), SortKey::Distance);
        assert_eq!("duration".parse::<SortKey>().unwrap(), SortKey::Duration);
    }

    #[test]
    fn rejects_unknown_key() {
        let err = "pace".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, TrailogError::UnknownSortKey { .. }));
    }

    #[test]
    fn type_orders_cycling_first() {
        assert_eq!(
            SortKey::Type.compare(&cycling(1.0, 1.0), &running(1.0, 1.0)),
            Ordering::Less
        );
        assert_eq!(
            SortKey::Type.compare(&running(1.0, 1.0), &running(9.0, 9.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn numeric_keys_compare_ascending() {
        assert_eq!(
            SortKey::Distance.compare(&running(3.0, 50.0), &cycling(9.0, 10.0)),
            Ordering::Less
        );
        assert_eq!(
            SortKey::Duration.compare(&running(3.0, 50.0), &cycling(9.0, 10.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }
}
