//! Workout store: the ordered in-memory collection and its persistence.
//!
//! [`WorkoutStore`] owns its records outright. Callers get clones back from
//! `create` and `edit` and must re-read the store after a mutation rather
//! than hold on to an older copy.

mod codec;
mod sort;
mod workout_store;

pub use codec::{decode_workouts, encode_workouts};
pub use sort::SortKey;
pub use workout_store::{SharedWorkoutStore, WorkoutStore, DEFAULT_STORAGE_KEY};
