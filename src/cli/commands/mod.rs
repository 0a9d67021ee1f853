//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which owns the loaded
//! [`WorkoutStore`](crate::store::WorkoutStore) and routes each subcommand
//! to one store operation. Commands only parse and present; validation and
//! persistence happen in the store.

pub mod add;
pub mod delete;
pub mod dispatcher;
pub mod edit;
pub mod list;
pub mod reset;
pub mod show;
pub mod sort;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use edit::EditCommand;
pub use list::ListCommand;
pub use reset::ResetCommand;
pub use show::ShowCommand;
pub use sort::SortCommand;
