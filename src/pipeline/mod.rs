// Pipeline module - Fixed install/build/lint sequence
#![allow(unused_imports)]

pub mod config;
pub mod error;
pub mod sequence;
pub mod setup;
pub mod types;

pub use config::SetupConfig;
pub use error::{ConfigError, SetupError};
pub use sequence::Pipeline;
pub use setup::run_setup;
pub use types::{PipelineReport, Step, StepReport};
