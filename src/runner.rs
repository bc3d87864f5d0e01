use std::ffi::OsString;
use std::future::Future;
use std::io::ErrorKind;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::RunError;

/// Exit status and captured streams of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion and hands back what it printed.
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[OsString],
    ) -> impl Future<Output = Result<CommandOutput, RunError>> + Send;
}

/// Spawns real processes, resolving the program on `PATH` first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[OsString],
    ) -> impl Future<Output = Result<CommandOutput, RunError>> + Send {
        let program = program.to_string();
        let args = args.to_vec();

        async move {
            let resolved =
                which::which(&program).map_err(|_| RunError::NotFound(program.clone()))?;
            debug!("Resolved {} to {}", program, resolved.display());

            let output = Command::new(&resolved)
                .args(&args)
                .stdin(Stdio::null())
                .output()
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => RunError::NotFound(program.clone()),
                    _ => RunError::Io(e),
                })?;

            Ok(CommandOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
