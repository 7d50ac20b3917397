//! Command-line arguments

use crate::pipeline::{ConfigError, SetupConfig};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "portful-setup")]
#[command(about = "Install, build, and check the Portful Arena site using the local npm")]
pub struct Args {
    /// Project directory containing package.json (default: current directory).
    /// A `.env` file in this directory is loaded as well
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Merge flags over the environment configuration
    pub fn into_config(self) -> Result<SetupConfig, ConfigError> {
        let config = SetupConfig::load(self.project_dir);
        config.validate()?;
        Ok(config)
    }
}
