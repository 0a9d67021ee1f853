//! Workout domain model.
//!
//! A [`Workout`] is one recorded activity: where it started, how far and how
//! long it went, and a kind-specific metric pair ([`WorkoutDetails`]). Records
//! are built through validating constructors and never mutated field by field;
//! changing a record means building a new one.

mod id;
mod kind;
mod validate;
mod workout;

pub use id::WorkoutId;
pub use kind::WorkoutKind;
pub use validate::{require_non_negative, require_positive};
pub use workout::{label_for, Coordinates, Workout, WorkoutDetails};
