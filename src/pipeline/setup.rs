// Setup orchestration

use crate::console::Console;
use crate::detect::{detect_toolchain, DetectError, NODE, NPM};
use crate::executor::CommandRunner;
use crate::pipeline::config::SetupConfig;
use crate::pipeline::error::SetupError;
use crate::pipeline::sequence::Pipeline;
use crate::pipeline::types::PipelineReport;
use std::io::Write;
use tracing::info;

/// Detect the toolchain, then run the standard pipeline.
///
/// Missing tools end the run before any step starts.
pub async fn run_setup<W: Write>(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    console: &mut Console<W>,
) -> Result<PipelineReport, SetupError> {
    console.banner();

    let working_dir = &config.executor.working_dir;

    let toolchain = match detect_toolchain(&config.detect, working_dir).await {
        Ok(toolchain) => toolchain,
        Err(e) => {
            let DetectError::ToolNotFound { missing } = &e;
            info!(missing = ?missing, "toolchain incomplete");
            console.missing_tools(missing);
            return Err(e.into());
        }
    };

    console.tool_detected(NODE, &toolchain.node);
    console.tool_detected(NPM, &toolchain.npm);

    let min_major = config.detect.min_node_major;
    if let Some(version) = toolchain.outdated_version(min_major) {
        info!(version = %version, min_major = min_major, "node is older than recommended");
        console.node_outdated(version, min_major);
    }

    let pipeline = Pipeline::standard(&toolchain.npm, working_dir.clone());
    info!(steps = pipeline.steps().len(), cwd = %working_dir.display(), "running pipeline");

    match pipeline.run(runner, console).await {
        Ok(report) => {
            console.complete();
            Ok(report)
        }
        Err(e) => {
            console.halted(&e);
            Err(e.into())
        }
    }
}
