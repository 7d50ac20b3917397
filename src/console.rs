//! User-facing console output
//!
//! Everything the user is meant to read goes through [`Console`]; tracing
//! diagnostics go to stderr separately.
#![allow(dead_code)]

use semver::Version;
use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::path::Path;
use tracing::debug;

/// Command the user should run again after fixing a problem
const RERUN_HINT: &str = "portful-setup";

/// Line-oriented writer for progress and error messages
pub struct Console<W: Write> {
    out: W,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the console and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            debug!(error = %e, "failed to write console output");
        }
    }

    pub fn banner(&mut self) {
        self.line("=== Portful Arena setup ===");
    }

    pub fn tool_detected(&mut self, name: &str, path: &Path) {
        // Pad so node and npm paths line up
        let label = format!("{} at:", name);
        self.line(format_args!("Detected {:<8} {}", label, path.display()));
    }

    pub fn missing_tools(&mut self, missing: &[String]) {
        self.line("");
        self.line("[!] Node.js and npm are required but were not detected on this system.");
        self.line(format_args!("    Missing: {}", missing.join(", ")));
        self.line("    Install Node.js (v18 or newer) from https://nodejs.org/ and ensure 'node' and 'npm'");
        self.line(format_args!(
            "    are available on your PATH, then rerun `{}`.",
            RERUN_HINT
        ));
        self.line("");
    }

    pub fn node_outdated(&mut self, version: &Version, min_major: u64) {
        self.line(format_args!(
            "[!] Detected Node.js v{} but v{} or newer is recommended; continuing anyway.",
            version, min_major
        ));
    }

    /// Announce step `index` (1-based)
    pub fn step_started(&mut self, index: usize, label: &str) {
        if index == 1 {
            self.line("");
        }
        self.line(format_args!("{}. {}", index, label));
    }

    pub fn halted(&mut self, error: &dyn Display) {
        self.line("");
        self.line(format_args!("[!] Setup halted: {}", error));
        self.line(format_args!(
            "    Resolve the issue above and rerun `{}`.",
            RERUN_HINT
        ));
    }

    pub fn error(&mut self, error: &dyn Display) {
        self.line(format_args!("[!] {}", error));
    }

    pub fn complete(&mut self) {
        self.line("");
        self.line("Setup complete. You can now run `npm run dev` to start the local server.");
    }
}
