//! Sort command implementation.
//!
//! The `trailog sort` command reorders the stored workouts.

use crate::cli::args::SortArgs;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::store::WorkoutStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sort command implementation.
pub struct SortCommand {
    args: SortArgs,
}

impl SortCommand {
    /// Create a new sort command.
    pub fn new(args: SortArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SortArgs {
        &self.args
    }
}

impl Command for SortCommand {
    fn execute<S: KeyValueStorage>(
        &self,
        store: &mut WorkoutStore<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        store.sort(self.args.key)?;
        ui.success(&format!(
            "Sorted {} workout(s) by {}",
            store.len(),
            self.args.key
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, WorkoutKind};
    use crate::storage::MemoryStorage;
    use crate::store::SortKey;
    use crate::ui::MockUI;

    #[test]
    fn sort_orders_and_reports() {
        let mut store = WorkoutStore::new(MemoryStorage::new());
        let at = Coordinates::new(1.0, 2.0).unwrap();
        store
            .create(WorkoutKind::Running, at, 8.0, 40.0, 170.0)
            .unwrap();
        store
            .create(WorkoutKind::Running, at, 2.0, 10.0, 170.0)
            .unwrap();
        let mut ui = MockUI::new();

        SortCommand::new(SortArgs {
            key: SortKey::Distance,
        })
        .execute(&mut store, &mut ui)
        .unwrap();

        let distances: Vec<f64> = store.workouts().iter().map(|w| w.distance()).collect();
        assert_eq!(distances, vec![2.0, 8.0]);
        assert!(ui.has_success("Sorted 2 workout(s) by distance"));
    }

    #[test]
    fn sort_empty_store_is_fine() {
        let mut store = WorkoutStore::new(MemoryStorage::new());

        let result = SortCommand::new(SortArgs { key: SortKey::Type })
            .execute(&mut store, &mut MockUI::new())
            .unwrap();

        assert!(result.success);
    }
}
