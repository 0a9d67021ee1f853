//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::{Result, TrailogError};
use crate::model::WorkoutKind;
use crate::store::SortKey;

/// trailog - A personal workout log.
#[derive(Debug, Parser)]
#[command(name = "trailog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding stored workouts (overrides config and TRAILOG_DATA_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (overrides default ~/.trailog/config.yml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a new workout
    Add(AddArgs),

    /// Replace a workout's type and metrics
    Edit(EditArgs),

    /// Delete one workout, or all of them
    Delete(DeleteArgs),

    /// List recorded workouts
    List(ListArgs),

    /// Reorder the stored workouts
    Sort(SortArgs),

    /// Show a single workout
    Show(ShowArgs),

    /// Delete all workouts and remove stored data
    Reset(ResetArgs),
}

/// The kind-specific metric: cadence for running, elevation gain for cycling.
#[derive(Debug, Clone, Default, clap::Args)]
#[command(group(ArgGroup::new("metric").required(true).args(["cadence", "elevation"])))]
pub struct MetricArgs {
    /// Cadence in steps per minute (running)
    #[arg(long, allow_negative_numbers = true)]
    pub cadence: Option<f64>,

    /// Elevation gain in metres (cycling)
    #[arg(long, allow_negative_numbers = true)]
    pub elevation: Option<f64>,
}

impl MetricArgs {
    /// The metric value for `kind`, rejecting the other kind's flag.
    pub fn value_for(&self, kind: WorkoutKind) -> Result<f64> {
        let (value, flag) = match kind {
            WorkoutKind::Running => (self.cadence, "--cadence"),
            WorkoutKind::Cycling => (self.elevation, "--elevation"),
        };
        value.ok_or_else(|| {
            TrailogError::Other(anyhow::anyhow!(
                "{} workouts take {} ({})",
                kind,
                flag,
                kind.input_metric()
            ))
        })
    }
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Workout type
    #[arg(value_name = "TYPE")]
    pub kind: WorkoutKind,

    /// Latitude of the start point
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the start point
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Distance in kilometres
    #[arg(long, allow_negative_numbers = true)]
    pub distance: f64,

    /// Duration in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub duration: f64,

    #[command(flatten)]
    pub metric: MetricArgs,
}

/// Arguments for the `edit` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EditArgs {
    /// Id of the workout to edit
    pub id: String,

    /// New workout type
    #[arg(value_name = "TYPE")]
    pub kind: WorkoutKind,

    /// Distance in kilometres
    #[arg(long, allow_negative_numbers = true)]
    pub distance: f64,

    /// Duration in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub duration: f64,

    #[command(flatten)]
    pub metric: MetricArgs,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, clap::Args)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "all"])))]
pub struct DeleteArgs {
    /// Id of the workout to delete
    pub id: Option<String>,

    /// Delete every workout
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Sort (and store) the list by this key first
    #[arg(short, long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Print the workouts as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `sort` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SortArgs {
    /// Sort key: type, distance or duration
    pub key: SortKey,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Id of the workout to show
    pub id: String,

    /// Print the workout as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_running() {
        let cli = Cli::parse_from([
            "trailog",
            "add",
            "running",
            "--lat",
            "-33.9",
            "--lng",
            "18.4",
            "--distance",
            "5.2",
            "--duration",
            "24",
            "--cadence",
            "178",
        ]);

        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.kind, WorkoutKind::Running);
                assert_eq!(args.lat, -33.9);
                assert_eq!(args.metric.cadence, Some(178.0));
                assert_eq!(args.metric.value_for(WorkoutKind::Running).unwrap(), 178.0);
            }
            other => panic!("expected add, got {:?}", other),
        }
    }

    #[test]
    fn add_requires_a_metric() {
        let result = Cli::try_parse_from([
            "trailog",
            "add",
            "cycling",
            "--lat",
            "1",
            "--lng",
            "1",
            "--distance",
            "20",
            "--duration",
            "60",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn metric_for_other_kind_is_rejected() {
        let metric = MetricArgs {
            cadence: Some(170.0),
            elevation: None,
        };
        assert!(metric.value_for(WorkoutKind::Cycling).is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = Cli::try_parse_from([
            "trailog", "edit", "123", "swimming", "--distance", "1", "--duration", "1",
            "--cadence", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn delete_takes_id_or_all() {
        let cli = Cli::parse_from(["trailog", "delete", "--all"]);
        assert!(matches!(cli.command, Commands::Delete(DeleteArgs { all: true, .. })));

        assert!(Cli::try_parse_from(["trailog", "delete"]).is_err());
        assert!(Cli::try_parse_from(["trailog", "delete", "123", "--all"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["trailog", "list", "--data-dir", "/tmp/x", "--quiet"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.quiet);
    }

    #[test]
    fn list_sort_parses_key() {
        let cli = Cli::parse_from(["trailog", "list", "--sort", "distance", "--json"]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.sort, Some(SortKey::Distance));
                assert!(args.json);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }
}
