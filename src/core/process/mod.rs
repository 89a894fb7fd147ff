// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder and execution.
//!
//! ```text
//! ProcessBuilder
//!  - new/args/cwd/name/allow_failure
//!  - run() / run_with_cancellation(token)
//!        |
//!        v
//!    resolve program (which) --> spawn --> wait
//!        |
//!        v
//!    ProcessOutput { exit_code, interrupted }
//! ```
//!
//! Component builds inherit stdout/stderr so their output streams to the
//! console in order; the pipeline is strictly sequential, so nothing
//! interleaves.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use crate::error::Result;

/// Output from a completed process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    interrupted: bool,
}

impl ProcessOutput {
    /// Returns the process exit code (0 = success).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns whether the process was interrupted.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for configuring and running a child process.
///
/// Uses the builder pattern to configure options before spawning.
#[derive(Debug)]
pub struct ProcessBuilder {
    /// Path or name of the executable
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Working directory
    cwd: Option<PathBuf>,
    /// Display name for logging
    name: Option<String>,
    /// Don't fail if the process exits with a non-zero status
    allow_failure: bool,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the
    /// executable name. A bare name is resolved via PATH when `run()` is
    /// called.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            name: None,
            allow_failure: false,
        }
    }

    /// Appends command-line arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the working directory.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the display name used in log messages.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Don't treat a non-zero exit status as an error; the caller inspects
    /// the exit code itself.
    #[must_use]
    pub const fn allow_failure(mut self) -> Self {
        self.allow_failure = true;
        self
    }

    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.program.file_stem().map_or_else(
                || "process".to_string(),
                |s| s.to_string_lossy().into_owned(),
            )
        })
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program.display());
        for arg in &self.args {
            use std::fmt::Write as _;
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Resolves a bare program name through PATH.
    fn resolve_program(&self) -> Result<PathBuf> {
        if self.program.components().count() > 1 || self.program.is_absolute() {
            return Ok(self.program.clone());
        }
        which::which(&self.program)
            .with_context(|| format!("executable not found: {}", self.program.display()))
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns an error if spawning fails, or if the process exits with a
    /// non-zero status and `allow_failure` is not set.
    pub async fn run(self) -> Result<ProcessOutput> {
        self.run_with_cancellation(&CancellationToken::new()).await
    }

    /// Spawns and runs the process with cancellation support.
    ///
    /// When the token is cancelled the child is killed and the returned
    /// output has `interrupted = true`; the exit status is not validated in
    /// that case.
    ///
    /// # Errors
    ///
    /// Returns an error if spawning fails, or if the process exits with a
    /// non-zero status while `allow_failure` is not set.
    pub async fn run_with_cancellation(self, token: &CancellationToken) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();
        let program = self.resolve_program()?;

        if let Some(cwd) = &self.cwd {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = Command::new(&program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to spawn: {cmd_line}"))?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let status = tokio::select! {
            status = child.wait() => {
                status.with_context(|| format!("Failed to wait for: {cmd_line}"))?
            }
            () = token.cancelled() => {
                debug!(process = %name, "killing on cancellation");
                let _ = child.kill().await;
                return Ok(ProcessOutput {
                    exit_code: -1,
                    interrupted: true,
                });
            }
        };

        // A signal-terminated child has no exit code; report -1 like the
        // shell reports 128+n, distinct from every normal status.
        let exit_code = status.code().unwrap_or(-1);

        if !self.allow_failure && exit_code != 0 {
            error!(process = %name, exit_code, "process failed");
            anyhow::bail!("{name} exited with code {exit_code}");
        }

        trace!(process = %name, exit_code, "completed");
        Ok(ProcessOutput {
            exit_code,
            interrupted: false,
        })
    }
}

#[cfg(test)]
mod tests;
