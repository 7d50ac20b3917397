// Detect configuration

use std::ffi::OsString;

/// Detect configuration
#[derive(Debug, Clone)]
pub struct DetectConfig {
    /// Search path override, from `PORTFUL_SEARCH_PATH` (None = process PATH)
    pub search_path: Option<OsString>,
    /// Minimum supported Node.js major version
    pub min_node_major: u64,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            search_path: None,
            min_node_major: 18,
        }
    }
}
