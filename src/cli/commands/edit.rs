//! Edit command implementation.
//!
//! The `trailog edit` command replaces a workout's type and metrics in place.

use crate::cli::args::EditArgs;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::store::WorkoutStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The edit command implementation.
pub struct EditCommand {
    args: EditArgs,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(args: EditArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &EditArgs {
        &self.args
    }
}

impl Command for EditCommand {
    fn execute<S: KeyValueStorage>(
        &self,
        store: &mut WorkoutStore<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let args = &self.args;
        let metric = args.metric.value_for(args.kind)?;

        let workout = store.edit(&args.id, args.kind, args.distance, args.duration, metric)?;

        ui.success(&format!("Updated {} ({})", workout.label(), workout.id()));
        Ok(CommandResult::success())
    }
}
