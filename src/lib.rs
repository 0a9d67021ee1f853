//! trailog - A personal workout log.
//!
//! trailog records running and cycling workouts at a location, computes
//! their derived pace or speed, and keeps them in an ordered list that is
//! written through to a durable key-value slot after every change.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`model`] - Workouts, their kinds and derived metrics
//! - [`storage`] - Durable key-value storage backends
//! - [`store`] - The ordered, persisted workout collection
//! - [`ui`] - Terminal output, tables and prompts
//!
//! # Example
//!
//! ```
//! use trailog::{Coordinates, MemoryStorage, SortKey, WorkoutKind, WorkoutStore};
//!
//! let mut store = WorkoutStore::new(MemoryStorage::new());
//! let here = Coordinates::new(51.5, -0.12).unwrap();
//!
//! store.create(WorkoutKind::Cycling, here, 30.0, 90.0, 400.0).unwrap();
//! let run = store.create(WorkoutKind::Running, here, 5.0, 25.0, 170.0).unwrap();
//! assert_eq!(run.pace(), Some(5.0));
//!
//! store.sort(SortKey::Distance).unwrap();
//! assert_eq!(store.workouts()[0].id(), run.id());
//! ```
//!
//! For file-backed storage, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;
pub mod ui;

pub use error::{Result, TrailogError};
pub use model::{Coordinates, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{SharedWorkoutStore, SortKey, WorkoutStore};
