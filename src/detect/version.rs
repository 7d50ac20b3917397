// Node.js version probing

use semver::Version;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Parse the output of `node --version` (e.g. "v20.11.1")
pub fn parse_node_version(raw: &str) -> Option<Version> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(bare).ok()
}

/// Run `node --version` and parse the result. Any failure yields None.
pub async fn probe_node_version(node: &Path) -> Option<Version> {
    let output = match Command::new(node)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            warn!(node = %node.display(), error = %e, "failed to probe node version");
            return None;
        }
    };

    if !output.status.success() {
        debug!(exit_code = output.status.code().unwrap_or(-1), "node --version exited non-zero");
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = parse_node_version(&stdout);
    if version.is_none() {
        debug!(output = %stdout.trim(), "unrecognized node version output");
    }
    version
}
