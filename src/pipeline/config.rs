// Setup configuration

use crate::detect::DetectConfig;
use crate::executor::ExecutorConfig;
use crate::pipeline::error::ConfigError;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Parse an environment variable, logging a warning if the value is present but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// Full configuration for one setup run
#[derive(Debug, Clone, Default)]
pub struct SetupConfig {
    pub detect: DetectConfig,
    pub executor: ExecutorConfig,
}

impl SetupConfig {
    /// Load from `.env` and environment variables
    pub fn from_env() -> Self {
        Self::load(None)
    }

    /// Load configuration, with `project_dir` taking precedence over
    /// `PORTFUL_PROJECT_DIR`.
    ///
    /// The project's own `.env` is read once the directory is known.
    /// Variables already set in the environment are never overridden.
    pub fn load(project_dir: Option<PathBuf>) -> Self {
        dotenvy::dotenv().ok();

        let mut config = SetupConfig::default();

        config.executor.working_dir = match project_dir {
            Some(dir) => dir,
            None => parse_env_var("PORTFUL_PROJECT_DIR", config.executor.working_dir),
        };

        let project_env = config.executor.working_dir.join(".env");
        if let Err(e) = dotenvy::from_path(&project_env) {
            debug!(path = %project_env.display(), error = %e, "no project .env loaded");
        }

        config.detect.min_node_major =
            parse_env_var("PORTFUL_MIN_NODE_MAJOR", config.detect.min_node_major);
        config.detect.search_path = std::env::var_os("PORTFUL_SEARCH_PATH");

        config
    }

    /// Replace the project directory
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.executor.working_dir = dir.into();
        self
    }

    /// Check that the project directory exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.executor.working_dir.is_dir() {
            return Err(ConfigError::ProjectDirMissing(
                self.executor.working_dir.clone(),
            ));
        }
        Ok(())
    }
}
