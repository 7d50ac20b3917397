// Executable lookup on the search path

use crate::detect::config::DetectConfig;
use crate::detect::error::{DetectError, Result};
use crate::detect::types::Toolchain;
use crate::detect::version::probe_node_version;
use crate::detect::{NODE, NPM};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locate an executable on the process PATH
pub fn locate_tool(name: &str) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => {
            debug!(tool = name, path = %path.display(), "tool located");
            Some(path)
        }
        Err(e) => {
            debug!(tool = name, error = %e, "tool not found");
            None
        }
    }
}

/// Locate an executable on an explicit search path
pub fn locate_tool_in(name: &str, search_path: &OsStr, cwd: &Path) -> Option<PathBuf> {
    match which::which_in(name, Some(search_path), cwd) {
        Ok(path) => {
            debug!(tool = name, path = %path.display(), "tool located");
            Some(path)
        }
        Err(e) => {
            debug!(tool = name, error = %e, "tool not found");
            None
        }
    }
}

/// Resolve node and npm, then probe the node version.
///
/// Fails with `ToolNotFound` listing every missing tool.
pub async fn detect_toolchain(config: &DetectConfig, cwd: &Path) -> Result<Toolchain> {
    let lookup = |name: &str| match &config.search_path {
        Some(paths) => locate_tool_in(name, paths, cwd),
        None => locate_tool(name),
    };

    let node = lookup(NODE);
    let npm = lookup(NPM);

    let (node, npm) = match (node, npm) {
        (Some(node), Some(npm)) => (node, npm),
        (node, npm) => {
            let missing = [(NODE, node.is_none()), (NPM, npm.is_none())]
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(DetectError::ToolNotFound { missing });
        }
    };

    let node_version = probe_node_version(&node).await;

    info!(
        node = %node.display(),
        npm = %npm.display(),
        node_version = ?node_version.as_ref().map(|v| v.to_string()),
        "toolchain detected"
    );

    Ok(Toolchain {
        node,
        npm,
        node_version,
    })
}
