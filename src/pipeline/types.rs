// Pipeline types
#![allow(dead_code)]

use crate::executor::{StepCommand, StepOutput};

/// One entry in the pipeline
#[derive(Debug, Clone)]
pub struct Step {
    /// Progress message shown before the step runs
    pub label: String,
    pub command: StepCommand,
}

impl Step {
    pub fn new(label: impl Into<String>, command: StepCommand) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }
}

/// A step that ran to a zero exit
#[derive(Debug, Clone)]
pub struct StepReport {
    pub label: String,
    pub command: StepCommand,
    pub output: StepOutput,
}

/// Completed steps, in execution order
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub steps: Vec<StepReport>,
}

impl PipelineReport {
    pub fn total_duration_ms(&self) -> u64 {
        self.steps.iter().map(|s| s.output.duration_ms).sum()
    }
}
