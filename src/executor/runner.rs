// Step runner implementation

use crate::executor::error::{ExecutorError, Result};
use crate::executor::types::{StepCommand, StepOutput};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Runs a single command to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command in `cwd` and wait for it to exit.
    ///
    /// A non-zero exit is reported through `StepOutput`, not as an error.
    async fn run(&self, command: &StepCommand, cwd: &Path) -> Result<StepOutput>;
}

/// Runs commands as child processes sharing the parent's stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &StepCommand, cwd: &Path) -> Result<StepOutput> {
        let start = Instant::now();

        debug!(command = %command, cwd = %cwd.display(), "spawning process");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ExecutorError::SpawnFailed(command.to_string(), e.to_string()))?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let exit_code = status.code().unwrap_or(-1);

        if status.code().is_none() {
            warn!(command = %command, "process terminated without an exit code");
        }

        info!(
            command = %command,
            duration_ms = duration_ms,
            exit_code = exit_code,
            "process exited"
        );

        Ok(StepOutput {
            exit_code,
            duration_ms,
        })
    }
}

/// Run one step, failing with `StepFailed` on a non-zero exit
pub async fn run_step(
    runner: &dyn CommandRunner,
    command: &StepCommand,
    cwd: &Path,
) -> Result<StepOutput> {
    let output = runner.run(command, cwd).await?;

    if !output.success() {
        return Err(ExecutorError::StepFailed {
            command: command.to_string(),
            exit_code: output.exit_code,
        });
    }

    Ok(output)
}
