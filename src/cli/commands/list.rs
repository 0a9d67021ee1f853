//! List command implementation.
//!
//! The `trailog list` command shows recorded workouts in store order,
//! optionally sorting (and storing the new order) first.

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::store::{SortKey, WorkoutStore};
use crate::ui::{workout_table, TrailogTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
    default_sort: Option<SortKey>,
}

impl ListCommand {
    /// Create a new list command. `default_sort` applies when the
    /// arguments carry no `--sort`.
    pub fn new(args: ListArgs, default_sort: Option<SortKey>) -> Self {
        Self { args, default_sort }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn sort_key(&self) -> Option<SortKey> {
        self.args.sort.or(self.default_sort)
    }
}

impl Command for ListCommand {
    fn execute<S: KeyValueStorage>(
        &self,
        store: &mut WorkoutStore<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if let Some(key) = self.sort_key() {
            store.sort(key)?;
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(store.workouts())
                .context("failed to render workouts as JSON")?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if store.is_empty() {
            ui.message("No workouts recorded yet.");
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Workouts ({})", store.len()));
        let table = workout_table(store.workouts(), &TrailogTheme::detect());
        ui.message(&table.render());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, WorkoutKind};
    use crate::storage::MemoryStorage;
    use crate::ui::MockUI;

    fn store() -> WorkoutStore<MemoryStorage> {
        let mut store = WorkoutStore::new(MemoryStorage::new());
        let at = Coordinates::new(1.0, 2.0).unwrap();
        store
            .create(WorkoutKind::Running, at, 10.0, 50.0, 170.0)
            .unwrap();
        store
            .create(WorkoutKind::Cycling, at, 30.0, 60.0, 200.0)
            .unwrap();
        store
            .create(WorkoutKind::Running, at, 3.0, 15.0, 160.0)
            .unwrap();
        store
    }

    fn distances(store: &WorkoutStore<MemoryStorage>) -> Vec<f64> {
        store.workouts().iter().map(|w| w.distance()).collect()
    }

    #[test]
    fn list_empty_store() {
        let mut store = WorkoutStore::new(MemoryStorage::new());
        let mut ui = MockUI::new();

        ListCommand::new(ListArgs::default(), None)
            .execute(&mut store, &mut ui)
            .unwrap();

        assert!(ui.has_message("No workouts recorded yet."));
    }

    #[test]
    fn list_renders_table_in_store_order() {
        let mut store = store();
        let mut ui = MockUI::new();

        ListCommand::new(ListArgs::default(), None)
            .execute(&mut store, &mut ui)
            .unwrap();

        assert_eq!(ui.headers(), &["Workouts (3)".to_string()]);
        assert!(ui.has_message("Cycling on"));
        assert_eq!(distances(&store), vec![10.0, 30.0, 3.0]);
    }

    #[test]
    fn list_with_sort_reorders_store() {
        let mut store = store();
        let args = ListArgs {
            sort: Some(SortKey::Distance),
            json: false,
        };

        ListCommand::new(args, None)
            .execute(&mut store, &mut MockUI::new())
            .unwrap();

        assert_eq!(distances(&store), vec![3.0, 10.0, 30.0]);
    }

    #[test]
    fn explicit_sort_beats_default() {
        let mut store = store();
        let args = ListArgs {
            sort: Some(SortKey::Type),
            json: false,
        };

        ListCommand::new(args, Some(SortKey::Distance))
            .execute(&mut store, &mut MockUI::new())
            .unwrap();

        assert_eq!(distances(&store), vec![30.0, 10.0, 3.0]);
    }

    #[test]
    fn default_sort_applies_without_flag() {
        let mut store = store();

        ListCommand::new(ListArgs::default(), Some(SortKey::Duration))
            .execute(&mut store, &mut MockUI::new())
            .unwrap();

        assert_eq!(distances(&store), vec![3.0, 10.0, 30.0]);
    }

    #[test]
    fn list_json_uses_storage_layout() {
        let mut store = store();
        let mut ui = MockUI::new();
        let args = ListArgs {
            sort: None,
            json: true,
        };

        ListCommand::new(args, None)
            .execute(&mut store, &mut ui)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1]["type"], "cycling");
        assert_eq!(records[1]["elevationGain"], 200.0);
    }
}
