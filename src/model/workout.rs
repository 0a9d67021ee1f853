//! Workout records and their derived metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{require_non_negative, require_positive, require_within};
use super::{WorkoutId, WorkoutKind};
use crate::error::Result;

/// Where a workout was recorded, serialized as `[latitude, longitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create validated coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coords = Self {
            latitude,
            longitude,
        };
        coords.validate()?;
        Ok(coords)
    }

    /// Check both components are finite and on the globe.
    pub fn validate(&self) -> Result<()> {
        require_within("latitude", self.latitude, 90.0, "between -90 and 90")?;
        require_within("longitude", self.longitude, 180.0, "between -180 and 180")?;
        Ok(())
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coords: Coordinates) -> Self {
        [coords.latitude, coords.longitude]
    }
}

/// Kind-specific input metric and the value derived from it.
///
/// The `type` tag and the fields travel together, so a record can never
/// carry a cadence and a speed at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute.
        #[serde(alias = "cadenceSpm")]
        cadence: f64,
        /// Minutes per kilometre.
        #[serde(alias = "paceMinPerKm")]
        pace: f64,
    },
    Cycling {
        /// Metres climbed.
        #[serde(rename = "elevationGain", alias = "elevationGainM")]
        elevation_gain: f64,
        /// Kilometres per hour.
        #[serde(alias = "speedKmPerH")]
        speed: f64,
    },
}

impl WorkoutDetails {
    /// Validate the kind-specific metric and compute the derived one.
    ///
    /// `distance` and `duration` must already be validated as positive. The
    /// derived value is checked too, so it always survives serialization.
    fn compute(kind: WorkoutKind, distance: f64, duration: f64, metric: f64) -> Result<Self> {
        match kind {
            WorkoutKind::Running => {
                let cadence = require_positive("cadence", metric)?;
                // Extreme but finite inputs can still overflow or underflow.
                let pace = require_positive("pace", duration / distance)?;
                Ok(Self::Running { cadence, pace })
            }
            WorkoutKind::Cycling => {
                let elevation_gain = require_non_negative("elevation gain", metric)?;
                let speed = require_positive("speed", distance / (duration / 60.0))?;
                Ok(Self::Cycling {
                    elevation_gain,
                    speed,
                })
            }
        }
    }

    /// The kind this detail set belongs to.
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// The user-supplied metric (cadence or elevation gain).
    pub fn input_metric(&self) -> f64 {
        match self {
            Self::Running { cadence, .. } => *cadence,
            Self::Cycling { elevation_gain, .. } => *elevation_gain,
        }
    }
}

/// A single recorded activity.
///
/// Fields are private: a workout is created through [`Workout::create`] (or
/// one of its siblings) and replaced wholesale through [`Workout::rebuild`].
/// Serialized field names match the layout other clients write to the
/// durable slot; the longer descriptive names are accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,
    #[serde(rename = "date", alias = "createdAt")]
    created_at: DateTime<Utc>,
    #[serde(rename = "coords", alias = "coordinates")]
    coordinates: Coordinates,
    #[serde(alias = "distanceKm")]
    distance: f64,
    #[serde(alias = "durationMin")]
    duration: f64,
    #[serde(flatten)]
    details: WorkoutDetails,
    #[serde(rename = "description", alias = "label", default)]
    label: String,
}

impl Workout {
    /// Create a workout stamped with the current time.
    pub fn create(
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        metric: f64,
    ) -> Result<Self> {
        let created_at = now_millis();
        Self::create_at(
            WorkoutId::from_timestamp(created_at),
            created_at,
            kind,
            coordinates,
            distance,
            duration,
            metric,
        )
    }

    /// Create a running workout; pace is `duration / distance`.
    pub fn create_running(
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Result<Self> {
        Self::create(WorkoutKind::Running, coordinates, distance, duration, cadence)
    }

    /// Create a cycling workout; speed is `distance / (duration / 60)`.
    pub fn create_cycling(
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Result<Self> {
        Self::create(
            WorkoutKind::Cycling,
            coordinates,
            distance,
            duration,
            elevation_gain,
        )
    }

    /// Create a workout with an explicit identity and creation time.
    ///
    /// Every input is validated before anything is built; on error nothing
    /// is returned.
    pub fn create_at(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        metric: f64,
    ) -> Result<Self> {
        coordinates.validate()?;
        let distance = require_positive("distance", distance)?;
        let duration = require_positive("duration", duration)?;
        let details = WorkoutDetails::compute(kind, distance, duration, metric)?;

        Ok(Self {
            id,
            created_at,
            coordinates,
            distance,
            duration,
            details,
            label: String::new(),
        }
        .relabel())
    }

    /// Build a replacement record with new metrics, possibly of another kind.
    ///
    /// Identity, creation time and coordinates carry over; everything else
    /// is computed from scratch. `self` is not touched.
    pub fn rebuild(
        &self,
        kind: WorkoutKind,
        distance: f64,
        duration: f64,
        metric: f64,
    ) -> Result<Self> {
        Self::create_at(
            self.id.clone(),
            self.created_at,
            kind,
            self.coordinates,
            distance,
            duration,
            metric,
        )
    }

    /// Recompute the label from the record's own date and kind.
    pub fn relabel(mut self) -> Self {
        self.label = label_for(self.kind(), self.created_at);
        self
    }

    pub(crate) fn with_id(mut self, id: WorkoutId) -> Self {
        self.id = id;
        self
    }

    /// Rebuild a record that did not come through a constructor.
    ///
    /// Only the inputs (id, date, coordinates, kind, distance, duration and
    /// the kind-specific metric) are trusted. Pace or speed and the label are
    /// recomputed, whatever the record carried.
    pub fn recompute(&self) -> Result<Self> {
        self.rebuild(
            self.kind(),
            self.distance,
            self.duration,
            self.details.input_metric(),
        )
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Distance in kilometres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Duration in minutes.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Human-readable label, e.g. "Running on April 14".
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cadence(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { cadence, .. } => Some(cadence),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace, .. } => Some(pace),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { elevation_gain, .. } => Some(elevation_gain),
            WorkoutDetails::Running { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed, .. } => Some(speed),
            WorkoutDetails::Running { .. } => None,
        }
    }
}

/// Label for a workout of `kind` created at `created_at`.
///
/// Format: `"<Kind> on <Month> <day>"`, using the UTC calendar date.
pub fn label_for(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.title(), created_at.format("%B %-d"))
}

// Truncate to milliseconds so the timestamp survives a JSON round-trip.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
