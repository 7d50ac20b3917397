// Integration tests for the setup pipeline

#[path = "../src/console.rs"]
mod console;

#[path = "../src/detect/mod.rs"]
mod detect;

#[path = "../src/executor/mod.rs"]
mod executor;

#[path = "../src/pipeline/mod.rs"]
mod pipeline;

use async_trait::async_trait;
use console::Console;
use executor::{CommandRunner, ExecutorError, StepCommand, StepOutput};
use pipeline::{run_setup, Pipeline, SetupConfig, SetupError};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    });
}

/// Records every command instead of spawning it
#[derive(Default)]
struct RecordingRunner {
    calls: Mutex<Vec<StepCommand>>,
    /// (1-based call number, exit code) to fail with
    fail_on: Option<(usize, i32)>,
}

impl RecordingRunner {
    fn failing_at(call: usize, exit_code: i32) -> Self {
        Self {
            fail_on: Some((call, exit_code)),
            ..Default::default()
        }
    }

    fn args(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.args.clone())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &StepCommand, _cwd: &Path) -> executor::Result<StepOutput> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(command.clone());
            calls.len()
        };

        let exit_code = match self.fail_on {
            Some((n, code)) if n == call => code,
            _ => 0,
        };

        Ok(StepOutput {
            exit_code,
            duration_ms: 1,
        })
    }
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn npm() -> PathBuf {
    PathBuf::from("/opt/node/bin/npm")
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Setup config searching only `dir` and running steps in it
fn config_for(dir: &Path) -> SetupConfig {
    let mut config = SetupConfig::default().with_project_dir(dir);
    config.detect.search_path = Some(dir.as_os_str().to_owned());
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_steps_order() {
        let pipeline = Pipeline::standard(&npm(), ".");
        let steps: Vec<_> = pipeline.steps().iter().map(|s| s.command.args.clone()).collect();

        assert_eq!(
            steps,
            vec![
                args(&["install"]),
                args(&["run", "build"]),
                args(&["run", "lint"]),
            ]
        );
        assert!(pipeline.steps().iter().all(|s| s.command.program == npm()));
    }

    #[tokio::test]
    async fn test_all_steps_succeed() {
        init_tracing();

        let runner = RecordingRunner::default();
        let mut console = Console::new(Vec::new());

        let report = Pipeline::standard(&npm(), ".")
            .run(&runner, &mut console)
            .await
            .unwrap();

        assert_eq!(report.steps.len(), 3);
        assert_eq!(report.total_duration_ms(), 3);
        assert_eq!(runner.args().len(), 3);

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("1. Installing project dependencies..."));
        assert!(out.contains("2. Building the Astro project..."));
        assert!(out.contains("3. Running Astro type/content checks..."));
    }

    #[tokio::test]
    async fn test_failure_stops_later_steps() {
        init_tracing();

        for failing in 1..=3 {
            let runner = RecordingRunner::failing_at(failing, 1);
            let mut console = Console::new(Vec::new());

            let err = Pipeline::standard(&npm(), ".")
                .run(&runner, &mut console)
                .await
                .expect_err("Failing step should stop the pipeline");

            assert_eq!(runner.args().len(), failing, "no step after {failing} may run");
            assert_eq!(err.exit_code(), Some(1));
        }
    }

    #[tokio::test]
    async fn test_build_failure_reports_command() {
        init_tracing();

        let runner = RecordingRunner::failing_at(2, 2);
        let mut console = Console::new(Vec::new());

        let err = Pipeline::standard(&npm(), ".")
            .run(&runner, &mut console)
            .await
            .unwrap_err();

        match err {
            ExecutorError::StepFailed { command, exit_code } => {
                assert_eq!(command, "/opt/node/bin/npm run build");
                assert_eq!(exit_code, 2);
            }
            other => panic!("unexpected error: {other}"),
        }

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("2. Building the Astro project..."));
        assert!(!out.contains("3. Running"));
    }

    #[tokio::test]
    async fn test_setup_missing_tools_runs_nothing() {
        init_tracing();

        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::default();
        let mut console = Console::new(Vec::new());

        let err = run_setup(&config_for(dir.path()), &runner, &mut console)
            .await
            .expect_err("Missing tools should fail");

        assert!(matches!(err, SetupError::Detect(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(runner.args().is_empty());

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.starts_with("=== Portful Arena setup ==="));
        assert!(out.contains("Node.js and npm are required"));
        assert!(!out.contains("Setup complete"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_setup_success() {
        init_tracing();

        let dir = tempfile::tempdir().unwrap();
        write_script(dir.path(), "node", "echo v20.11.1");
        let npm = write_script(dir.path(), "npm", "exit 0");

        let runner = RecordingRunner::default();
        let mut console = Console::new(Vec::new());

        let report = run_setup(&config_for(dir.path()), &runner, &mut console)
            .await
            .unwrap();

        assert_eq!(report.steps.len(), 3);
        assert!(report.steps.iter().all(|s| s.command.program == npm));
        assert_eq!(
            runner.args(),
            vec![
                args(&["install"]),
                args(&["run", "build"]),
                args(&["run", "lint"]),
            ]
        );

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("Detected node at: "));
        assert!(out.contains("Detected npm at:  "));
        assert!(out.contains("Setup complete."));
        assert!(!out.contains("recommended"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_setup_lint_failure() {
        init_tracing();

        let dir = tempfile::tempdir().unwrap();
        write_script(dir.path(), "node", "echo v20.11.1");
        write_script(dir.path(), "npm", "exit 0");

        let runner = RecordingRunner::failing_at(3, 1);
        let mut console = Console::new(Vec::new());

        let err = run_setup(&config_for(dir.path()), &runner, &mut console)
            .await
            .unwrap_err();

        assert!(matches!(err, SetupError::Executor(ExecutorError::StepFailed { .. })));

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("[!] Setup halted: Command "));
        assert!(out.contains("run lint failed with exit code 1"));
        assert!(!out.contains("Setup complete"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_setup_old_node_warns_and_continues() {
        init_tracing();

        let dir = tempfile::tempdir().unwrap();
        write_script(dir.path(), "node", "echo v16.20.2");
        write_script(dir.path(), "npm", "exit 0");

        let runner = RecordingRunner::default();
        let mut console = Console::new(Vec::new());

        let result = run_setup(&config_for(dir.path()), &runner, &mut console).await;
        assert!(result.is_ok());
        assert_eq!(runner.args().len(), 3);

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("Detected Node.js v16.20.2 but v18 or newer is recommended"));
        assert!(out.contains("Setup complete."));
    }

    #[test]
    fn test_validate_missing_project_dir() {
        let config = SetupConfig::default().with_project_dir("/nonexistent/portful/project");
        assert!(config.validate().is_err());

        let dir = tempfile::tempdir().unwrap();
        let config = SetupConfig::default().with_project_dir(dir.path());
        assert!(config.validate().is_ok());
    }
}
