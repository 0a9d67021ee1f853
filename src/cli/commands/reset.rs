//! Reset command implementation.
//!
//! The `trailog reset` command drops every workout and removes the stored
//! data, after confirmation.

use crate::cli::args::ResetArgs;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::store::WorkoutStore;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Prompt key; `TRAILOG_CONFIRM_RESET` answers it non-interactively.
pub const RESET_PROMPT_KEY: &str = "reset";

/// The reset command implementation.
pub struct ResetCommand {
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(args: ResetArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ResetArgs {
        &self.args
    }
}

impl Command for ResetCommand {
    fn execute<S: KeyValueStorage>(
        &self,
        store: &mut WorkoutStore<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if !self.args.yes {
            let prompt = Prompt::new(
                RESET_PROMPT_KEY,
                &format!(
                    "Delete all {} workout(s) and remove stored data?",
                    store.len()
                ),
                false,
            );
            if !ui.confirm(&prompt)? {
                if !ui.is_interactive() {
                    ui.warning("Reset needs confirmation; pass --yes to skip the prompt");
                }
                ui.message("Reset cancelled.");
                return Ok(CommandResult::failure(1));
            }
        }

        store.reset()?;
        ui.success("Workout log reset");
        Ok(CommandResult::success())
    }
}
