// Setup errors

use crate::detect::DetectError;
use crate::executor::ExecutorError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Project directory does not exist: {}", .0.display())]
    ProjectDirMissing(PathBuf),
}

/// Errors that end a setup run
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error(transparent)]
    Executor(#[from] ExecutorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SetupError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}
