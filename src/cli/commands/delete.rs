//! Delete command implementation.
//!
//! The `trailog delete` command removes one workout by id, or every
//! workout with `--all`.

use crate::cli::args::DeleteArgs;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::store::WorkoutStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The delete command implementation.
pub struct DeleteCommand {
    args: DeleteArgs,
}

impl DeleteCommand {
    /// Create a new delete command.
    pub fn new(args: DeleteArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &DeleteArgs {
        &self.args
    }
}

impl Command for DeleteCommand {
    fn execute<S: KeyValueStorage>(
        &self,
        store: &mut WorkoutStore<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if self.args.all {
            let count = store.len();
            store.delete_all()?;
            ui.success(&format!("Deleted {} workout(s)", count));
            return Ok(CommandResult::success());
        }

        let Some(id) = self.args.id.as_deref() else {
            ui.error("Pass a workout id or --all");
            return Ok(CommandResult::failure(2));
        };

        if store.delete(id)? {
            ui.success(&format!("Deleted workout {}", id));
        } else {
            ui.warning(&format!("No workout with id {}", id));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, WorkoutKind};
    use crate::storage::MemoryStorage;
    use crate::ui::MockUI;

    fn store_with(n: usize) -> WorkoutStore<MemoryStorage> {
        let mut store = WorkoutStore::new(MemoryStorage::new());
        for i in 0..n {
            store
                .create(
                    WorkoutKind::Running,
                    Coordinates::new(1.0, 2.0).unwrap(),
                    5.0 + i as f64,
                    25.0,
                    170.0,
                )
                .unwrap();
        }
        store
    }

    #[test]
    fn delete_by_id() {
        let mut store = store_with(2);
        let id = store.workouts()[0].id().to_string();
        let mut ui = MockUI::new();

        DeleteCommand::new(DeleteArgs {
            id: Some(id.clone()),
            all: false,
        })
        .execute(&mut store, &mut ui)
        .unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());
        assert!(ui.has_success(&id));
    }

    #[test]
    fn delete_unknown_id_warns_and_succeeds() {
        let mut store = store_with(1);
        let mut ui = MockUI::new();

        let result = DeleteCommand::new(DeleteArgs {
            id: Some("missing".to_string()),
            all: false,
        })
        .execute(&mut store, &mut ui)
        .unwrap();

        assert!(result.success);
        assert_eq!(store.len(), 1);
        assert!(ui.has_warning("No workout with id missing"));
    }

    #[test]
    fn delete_all_empties_store() {
        let mut store = store_with(3);
        let mut ui = MockUI::new();

        DeleteCommand::new(DeleteArgs { id: None, all: true })
            .execute(&mut store, &mut ui)
            .unwrap();

        assert!(store.is_empty());
        assert!(ui.has_success("Deleted 3 workout(s)"));
    }

    #[test]
    fn delete_without_target_fails() {
        let mut store = store_with(1);
        let mut ui = MockUI::new();

        let result = DeleteCommand::new(DeleteArgs {
            id: None,
            all: false,
        })
        .execute(&mut store, &mut ui)
        .unwrap();

        assert!(!result.success);
        assert_eq!(store.len(), 1);
    }
}
