// Error types for Detect module

use thiserror::Error;

/// Detect error types
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Required tools not found on PATH: {}", .missing.join(", "))]
    ToolNotFound { missing: Vec<String> },
}

pub type Result<T> = std::result::Result<T, DetectError>;
