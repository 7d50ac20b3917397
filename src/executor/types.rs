// Data types for Executor module

use std::fmt;
use std::path::PathBuf;

/// A program invocation: resolved executable plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl StepCommand {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for StepCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a finished process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutput {
    /// Process exit code (-1 when terminated by a signal)
    pub exit_code: i32,
    /// Wall time in milliseconds
    pub duration_ms: u64,
}

impl StepOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
