//! trailog CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trailog::cli::{Cli, CommandDispatcher};
use trailog::config::{load_config, TrailogConfig};
use trailog::ui::{create_ui, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs are written to stderr so stdout stays usable for `--json` output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("trailog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trailog=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("trailog starting with args: {:?}", cli);

    let output_mode = OutputMode::from_quiet(cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(true, output_mode);

    // Flags beat the config file and environment.
    let dispatcher = load_config(cli.config.as_deref())
        .map(|config| {
            config.merge(TrailogConfig {
                data_dir: cli.data_dir.clone(),
                ..Default::default()
            })
        })
        .and_then(|config| CommandDispatcher::from_config(&config));

    let result = dispatcher.and_then(|mut dispatcher| dispatcher.dispatch(&cli, ui.as_mut()));

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            // Bad input speaks for itself; storage and config failures get a pointer to the logs.
            if !e.is_recoverable() && !cli.debug {
                ui.warning("Re-run with --debug for details");
            }
            ExitCode::from(1)
        }
    }
}
