//! How much trailog prints besides the data that was asked for.
//!
//! Listings, detail views and `--json` documents are results: they are the
//! point of the command and always reach stdout. Confirmations such as
//! "Added Running on April 14", headers and warnings are status lines that
//! `--quiet` hides, so a script can pipe `trailog --quiet list --json`
//! straight into another tool. Errors are never hidden.

use std::str::FromStr;

/// Whether status lines are printed alongside results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Results plus status lines.
    #[default]
    Normal,
    /// Results and errors only (`--quiet`).
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Pick the mode for the global `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Whether confirmations, headers and warnings are printed.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
