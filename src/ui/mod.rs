//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes and scripts
//! - [`MockUI`] for tests
//! - Workout formatting and tables
//!
//! # Example
//!
//! ```
//! use trailog::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Workouts");
//! ui.success("Workout added");
//! ```

pub mod format;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use format::{describe_workout, format_metric, workout_table};
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::confirm_user;
pub use table::{Align, Table};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, TrailogTheme};

use crate::error::Result;

/// Where the CLI commands send their output.
///
/// `message` carries results and is never suppressed. `success` and
/// `show_header` are status lines on stdout, `warning` and `error` go to
/// stderr. All but `error` are hidden by [`OutputMode::Quiet`].
pub trait UserInterface {
    /// Current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print a result line (table row, detail view, JSON document).
    fn message(&mut self, msg: &str);

    /// Confirm a completed store operation.
    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    fn error(&mut self, msg: &str);

    /// Title above a listing.
    fn show_header(&mut self, title: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Whether a person can answer prompts.
    fn is_interactive(&self) -> bool;
}

/// A yes/no question to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter or cannot be asked.
    pub default: bool,
}

impl Prompt {
    pub fn new(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            default,
        }
    }
}
