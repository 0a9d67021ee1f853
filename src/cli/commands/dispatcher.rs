//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::TrailogConfig;
use crate::error::Result;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::{SortKey, WorkoutStore};
use crate::ui::UserInterface;

use super::{
    AddCommand, DeleteCommand, EditCommand, ListCommand, ResetCommand, ShowCommand, SortCommand,
};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic
/// against an already-loaded store.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `store` - The workout store, loaded from its storage backend
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute<S: KeyValueStorage>(
        &self,
        store: &mut WorkoutStore<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<S: KeyValueStorage> {
    store: WorkoutStore<S>,
    default_sort: Option<SortKey>,
}

impl CommandDispatcher<FileStorage> {
    /// Open the file-backed store described by `config`.
    pub fn from_config(config: &TrailogConfig) -> Result<Self> {
        let default_sort = config.default_sort()?;
        let storage = FileStorage::new(config.data_dir());
        tracing::debug!(dir = %storage.dir().display(), key = config.storage_key(), "opening store");

        let store = WorkoutStore::open_with_key(storage, config.storage_key());
        Ok(Self::new(store, default_sort))
    }
}

impl<S: KeyValueStorage> CommandDispatcher<S> {
    /// Create a dispatcher over an already-opened store.
    pub fn new(store: WorkoutStore<S>, default_sort: Option<SortKey>) -> Self {
        Self {
            store,
            default_sort,
        }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &WorkoutStore<S> {
        &self.store
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&mut self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = &mut self.store;
        match &cli.command {
            Commands::Add(args) => AddCommand::new(args.clone()).execute(store, ui),
            Commands::Edit(args) => EditCommand::new(args.clone()).execute(store, ui),
            Commands::Delete(args) => DeleteCommand::new(args.clone()).execute(store, ui),
            Commands::List(args) => {
                ListCommand::new(args.clone(), self.default_sort).execute(store, ui)
            }
            Commands::Sort(args) => SortCommand::new(args.clone()).execute(store, ui),
            Commands::Show(args) => ShowCommand::new(args.clone()).execute(store, ui),
            Commands::Reset(args) => ResetCommand::new(args.clone()).execute(store, ui),
        }
    }
}
