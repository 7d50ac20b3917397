// Executor module - Step subprocess execution
#![allow(unused_imports)]

pub mod config;
pub mod error;
pub mod runner;
pub mod types;

pub use config::ExecutorConfig;
pub use error::{ExecutorError, Result};
pub use runner::{run_step, CommandRunner, ProcessRunner};
pub use types::{StepCommand, StepOutput};
