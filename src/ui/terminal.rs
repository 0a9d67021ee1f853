//! Colored output for a terminal session.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    confirm_user, NonInteractiveUI, OutputMode, Prompt, TrailogTheme, UserInterface,
};

/// Styled output when stdout is a terminal.
///
/// Results go to stdout as-is. Confirmations and headers are themed and
/// share stdout; warnings and errors are themed on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: TrailogTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, TrailogTheme::detect())
    }

    /// Use a fixed theme instead of detecting color support.
    pub fn with_theme(mode: OutputMode, theme: TrailogTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    // Status lines are dropped in quiet mode; a closed pipe is not an error.
    fn status(&self, to_stderr: bool, line: String) {
        if !self.mode.shows_status() {
            return;
        }
        let mut term = if to_stderr { &self.err } else { &self.out };
        writeln!(term, "{}", line).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        self.status(false, self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.status(true, self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        self.status(false, format!("\n{}\n", self.theme.format_header(title)));
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        confirm_user(prompt, &self.err)
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term() && self.err.is_term()
    }
}

/// Pick the terminal UI when stdout is a terminal, plain output otherwise.
///
/// `trailog list --json > log.json` therefore gets undecorated output even
/// when run from a shell.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
