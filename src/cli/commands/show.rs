//! Show command implementation.
//!
//! The `trailog show` command prints a single workout.

use anyhow::Context;

use crate::cli::args::ShowArgs;
use crate::error::{Result, TrailogError};
use crate::storage::KeyValueStorage;
use crate::store::WorkoutStore;
use crate::ui::{describe_workout, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(args: ShowArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ShowArgs {
        &self.args
    }
}

impl Command for ShowCommand {
    fn execute<S: KeyValueStorage>(
        &self,
        store: &mut WorkoutStore<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let workout = store
            .get(&self.args.id)
            .ok_or_else(|| TrailogError::NotFound {
                id: self.args.id.clone(),
            })?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(workout).context("failed to render workout as JSON")?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(workout.label());
        for line in describe_workout(workout) {
            ui.message(&line);
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

    fn store_with_ride() -> (WorkoutStore<MemoryStorage>, String) {
        let mut store = WorkoutStore::new(MemoryStorage::new());
        let w = store
            .create(
                WorkoutKind::Cycling,
                Coordinates::new(45.0, 7.0).unwrap(),
                30.0,
                90.0,
                450.0,
            )
            .unwrap();
        let id = w.id().to_string();
        (store, id)
    }

    #[test]
    fn show_prints_details() {
        let (mut store, id) = store_with_ride();
        let mut ui = MockUI::new();

        ShowCommand::new(ShowArgs {
            id: id.clone(),
            json: false,
        })
        .execute(&mut store, &mut ui)
        .unwrap();

        assert!(ui.headers()[0].starts_with("Cycling on"));
        assert!(ui.has_message(&id));
        assert!(ui.has_message("20.0 km/h"));
        assert!(ui.has_message("450.0 m"));
    }

    #[test]
    fn show_json() {
        let (mut store, id) = store_with_ride();
        let mut ui = MockUI::new();

        ShowCommand::new(ShowArgs {
            id: id.clone(),
            json: true,
        })
        .execute(&mut store, &mut ui)
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["id"], id.as_str());
        assert_eq!(json["coords"], serde_json::json!([45.0, 7.0]));
    }

    #[test]
    fn show_unknown_id_is_not_found() {
        let (mut store, _) = store_with_ride();

        let err = ShowCommand::new(ShowArgs {
            id: "0".to_string(),
            json: false,
        })
        .execute(&mut store, &mut MockUI::new())
        .unwrap_err();

        assert!(matches!(err, TrailogError::NotFound { id } if id == "0"));
    }
}
