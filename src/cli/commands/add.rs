//! Add command implementation.
//!
//! The `trailog add` command records a new workout.

use crate::cli::args::AddArgs;
use crate::error::Result;
use crate::model::Coordinates;
use crate::storage::KeyValueStorage;
use crate::store::WorkoutStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(args: AddArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AddArgs {
        &self.args
    }
}

impl Command for AddCommand {
    fn execute<S: KeyValueStorage>(
        &self,
        store: &mut WorkoutStore<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let args = &self.args;
        let metric = args.metric.value_for(args.kind)?;
        let coordinates = Coordinates::new(args.lat, args.lng)?;

        let workout = store.create(
            args.kind,
            coordinates,
            args.distance,
            args.duration,
            metric,
        )?;

        ui.success(&format!("Added {} ({})", workout.label(), workout.id()));
        Ok(CommandResult::success())
    }
}
