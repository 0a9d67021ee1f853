//! The ordered, persisted workout collection.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use super::codec::{decode_workouts, encode_workouts};
use super::SortKey;
use crate::error::{Result, TrailogError};
use crate::model::{Coordinates, Workout, WorkoutId, WorkoutKind};
use crate::storage::KeyValueStorage;

/// Storage key the workout list is kept under.
pub const DEFAULT_STORAGE_KEY: &str = "workouts";

/// A store shared between threads. Every operation takes the lock for its
/// whole duration, so at most one mutation is in flight.
pub type SharedWorkoutStore<S> = Arc<Mutex<WorkoutStore<S>>>;

/// Ordered collection of workouts with write-through persistence.
///
/// Insertion order is the display order until [`WorkoutStore::sort`] is
/// called. Every mutating operation writes the whole list back to storage
/// before returning. When that write fails the in-memory change is kept
/// and the failure is returned as [`TrailogError::Persistence`].
#[derive(Debug)]
pub struct WorkoutStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStorage> WorkoutStore<S> {
    /// Create an empty store. Nothing is read from `storage`.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Create an empty store persisting under a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            workouts: Vec::new(),
        }
    }

    /// Create a store populated from `storage`.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Create a store populated from `storage` under a custom key.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::with_key(storage, key);
        store.load_from_storage();
        store
    }

    /// Wrap the store for use from several threads.
    pub fn into_shared(self) -> SharedWorkoutStore<S> {
        Arc::new(Mutex::new(self))
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// Absent, unreadable or corrupt data yields an empty list; the problem
    /// is logged, never returned. Returns the number of workouts loaded.
    pub fn load_from_storage(&mut self) -> usize {
        self.workouts = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => match decode_workouts(&self.key, &raw) {
                Ok(workouts) => workouts,
                Err(e) => {
                    warn!(key = %self.key, error = %e, "discarding unreadable workouts");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read workouts");
                Vec::new()
            }
        };

        info!(key = %self.key, count = self.workouts.len(), "loaded workouts");
        self.workouts.len()
    }

    /// Write the full ordered list to storage, replacing any prior value.
    pub fn save_to_storage(&mut self) -> Result<()> {
        let raw = encode_workouts(&self.key, &self.workouts)?;
        self.storage.set_item(&self.key, &raw)
    }

    /// Record a new workout at the end of the list.
    ///
    /// Inputs are validated before anything changes; an invalid metric
    /// leaves the list as it was.
    pub fn create(
        &mut self,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        metric: f64,
    ) -> Result<Workout> {
        let workout = Workout::create(kind, coordinates, distance, duration, metric)?;
        let id = self.unique_id(workout.id().clone());
        let workout = workout.with_id(id);

        debug!(id = %workout.id(), kind = %kind, "created workout");
        self.workouts.push(workout.clone());
        self.persist()?;

        Ok(workout)
    }

    /// Replace a workout's kind and metrics, keeping its id and date.
    ///
    /// The replacement is built and validated in full before the stored
    /// record is swapped, so a failed edit changes nothing.
    pub fn edit(
        &mut self,
        id: &str,
        kind: WorkoutKind,
        distance: f64,
        duration: f64,
        metric: f64,
    ) -> Result<Workout> {
        let index = self
            .position(id)
            .ok_or_else(|| TrailogError::NotFound { id: id.to_string() })?;

        let replacement = self.workouts[index].rebuild(kind, distance, duration, metric)?;

        debug!(
            id,
            from = %self.workouts[index].kind(),
            to = %kind,
            "edited workout"
        );
        self.workouts[index] = replacement.clone();
        self.persist()?;

        Ok(replacement)
    }

    /// Remove the first workout with this id.
    ///
    /// An unknown id is not an error. Returns whether a workout was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = match self.position(id) {
            Some(index) => {
                self.workouts.remove(index);
                debug!(id, "deleted workout");
                true
            }
            None => {
                debug!(id, "delete of unknown workout ignored");
                false
            }
        };

        self.persist()?;
        Ok(removed)
    }

    /// Remove every workout.
    pub fn delete_all(&mut self) -> Result<()> {
        debug!(count = self.workouts.len(), "deleting all workouts");
        self.workouts.clear();
        self.persist()
    }

    /// Reorder by `key`, ascending. The sort is stable.
    pub fn sort(&mut self, key: SortKey) -> Result<()> {
        self.workouts.sort_by(|a, b| key.compare(a, b));
        debug!(key = %key, "sorted workouts");
        self.persist()
    }

    /// Drop all workouts and remove the storage key entirely.
    pub fn reset(&mut self) -> Result<()> {
        info!(key = %self.key, "resetting workout store");
        self.workouts.clear();
        self.storage.remove_item(&self.key)
    }

    /// Look up a workout by id.
    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// All workouts in display order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// The key the list is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.workouts.iter().position(|w| w.id() == id)
    }

    fn unique_id(&self, mut id: WorkoutId) -> WorkoutId {
        while self.workouts.iter().any(|w| *w.id() == id) {
            id = id.successor();
        }
        id
    }

    fn persist(&mut self) -> Result<()> {
        self.save_to_storage().inspect_err(|e| {
            warn!(key = %self.key, error = %e, "in-memory change kept but not persisted");
        })
    }
}
