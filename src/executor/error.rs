// Error types for Executor module
#![allow(dead_code)]

use thiserror::Error;

/// Executor error types
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Command {command} failed with exit code {exit_code}")]
    StepFailed { command: String, exit_code: i32 },

    #[error("Failed to spawn process for command '{0}': {1}")]
    SpawnFailed(String, String),
}

impl ExecutorError {
    /// Exit code of the failed step, if the process ran at all
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecutorError::StepFailed { exit_code, .. } => Some(*exit_code),
            ExecutorError::SpawnFailed(..) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExecutorError>;
