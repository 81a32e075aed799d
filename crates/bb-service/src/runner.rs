//! External tool invocation.
//!
//! The wrapped prover/verifier is an opaque executable: interchange is
//! argv- and file-based, and its only failure channel is exit code plus
//! stderr text. One call here is one logical attempt; there are no
//! retries, and no timeout (a hung tool blocks its own request only).

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;

use bb_common::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Captured output of a successful tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run an external executable and resolve only on exit code 0.
///
/// Non-zero exit and spawn failure both map to
/// [`Error::ToolInvocation`] carrying the captured streams, so callers
/// can surface the tool's diagnostics verbatim.
pub async fn run(program: &Path, args: &[&OsStr]) -> Result<ToolOutput> {
    let command = render(program, args);
    debug!("running external tool: {command}");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| Error::ToolInvocation {
            command: command.clone(),
            status: format!("failed to spawn: {e}"),
            stdout: String::new(),
            stderr: String::new(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        let status = match output.status.code() {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        return Err(Error::ToolInvocation {
            command,
            status,
            stdout,
            stderr,
        });
    }

    Ok(ToolOutput { stdout, stderr })
}

fn render(program: &Path, args: &[&OsStr]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}
