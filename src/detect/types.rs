// Data types for Detect module

use semver::Version;
use std::path::PathBuf;

/// Resolved Node.js toolchain
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Path to the node executable
    pub node: PathBuf,
    /// Path to the npm executable
    pub npm: PathBuf,
    /// Version reported by `node --version`, if it could be read
    pub node_version: Option<Version>,
}

impl Toolchain {
    /// Whether the detected node is older than `min_major`.
    ///
    /// An unknown version is never considered outdated.
    pub fn is_outdated(&self, min_major: u64) -> bool {
        self.outdated_version(min_major).is_some()
    }

    /// The detected version, if it is older than `min_major`
    pub fn outdated_version(&self, min_major: u64) -> Option<&Version> {
        self.node_version
            .as_ref()
            .filter(|v| v.major < min_major)
    }
}
