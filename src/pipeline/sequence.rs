// Fail-fast step sequence
#![allow(dead_code)]

use crate::console::Console;
use crate::executor::{run_step, CommandRunner, Result, StepCommand};
use crate::pipeline::types::{PipelineReport, Step, StepReport};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Ordered list of steps run in one working directory
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<Step>,
    working_dir: PathBuf,
}

impl Pipeline {
    pub fn new(steps: Vec<Step>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            steps,
            working_dir: working_dir.into(),
        }
    }

    /// install, build, lint, all through the resolved npm
    pub fn standard(npm: &Path, working_dir: impl Into<PathBuf>) -> Self {
        let steps = vec![
            Step::new(
                "Installing project dependencies...",
                StepCommand::new(npm, ["install"]),
            ),
            Step::new(
                "Building the Astro project...",
                StepCommand::new(npm, ["run", "build"]),
            ),
            Step::new(
                "Running Astro type/content checks...",
                StepCommand::new(npm, ["run", "lint"]),
            ),
        ];
        Self::new(steps, working_dir)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Run every step in order, stopping at the first failure
    pub async fn run<W: Write>(
        &self,
        runner: &dyn CommandRunner,
        console: &mut Console<W>,
    ) -> Result<PipelineReport> {
        let mut report = PipelineReport::default();

        for (i, step) in self.steps.iter().enumerate() {
            let index = i + 1;
            console.step_started(index, &step.label);

            let output = match run_step(runner, &step.command, &self.working_dir).await {
                Ok(output) => output,
                Err(e) => {
                    info!(step = index, command = %step.command, error = %e, "step failed");
                    return Err(e);
                }
            };

            info!(
                step = index,
                command = %step.command,
                duration_ms = output.duration_ms,
                "step completed"
            );

            report.steps.push(StepReport {
                label: step.label.clone(),
                command: step.command.clone(),
                output,
            });
        }

        Ok(report)
    }
}
