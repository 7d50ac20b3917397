mod cli;
mod console;
mod detect;
mod executor;
mod pipeline;

use clap::Parser;
use cli::Args;
use console::Console;
use executor::ProcessRunner;
use pipeline::{run_setup, SetupError};
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::fmt;

/// Single-threaded runtime; steps are awaited one at a time
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout carries only console text
    fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!(args = ?args, "Starting portful-setup...");

    let mut console = Console::stdout();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            console.error(&e);
            return ExitCode::from(SetupError::from(e).exit_code());
        }
    };

    info!(
        project_dir = %config.executor.working_dir.display(),
        min_node_major = config.detect.min_node_major,
        "Configuration loaded"
    );

    match run_setup(&config, &ProcessRunner, &mut console).await {
        Ok(report) => {
            info!(
                steps = report.steps.len(),
                duration_ms = report.total_duration_ms(),
                "Setup finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            info!(error = %e, "Setup failed");
            ExitCode::from(e.exit_code())
        }
    }
}
