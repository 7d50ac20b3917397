// Detect module - Node.js toolchain discovery
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod config;
pub mod error;
pub mod locate;
pub mod types;
pub mod version;

pub use config::DetectConfig;
pub use error::{DetectError, Result};
pub use locate::{detect_toolchain, locate_tool, locate_tool_in};
pub use types::Toolchain;
pub use version::{parse_node_version, probe_node_version};

/// Name of the Node.js runtime executable
pub const NODE: &str = "node";

/// Name of the npm executable
pub const NPM: &str = "npm";
