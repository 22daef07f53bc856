//! Tool execution engine for running the external formatter.
//!
//! Each invocation formats exactly one file in place. The child inherits
//! stdout/stderr, so whatever the formatter prints goes straight to the
//! terminal.

use super::config::ToolDefinition;
use std::io;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Result of executing the formatter on one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Whether the tool exited with status 0.
    pub success: bool,
}

impl From<ExitStatus> for ToolOutput {
    fn from(status: ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
            success: status.success(),
        }
    }
}

/// Error during tool execution.
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("Formatter command is empty")]
    EmptyCommand,

    #[error("Tool '{tool}' not found in PATH")]
    ToolNotFound { tool: String },

    #[error("Failed to spawn '{tool}': {source}")]
    Spawn { tool: String, source: io::Error },

    #[error("Failed to wait for '{tool}': {source}")]
    Wait { tool: String, source: io::Error },

    #[error("Tool '{tool}' timed out after {timeout_ms}ms")]
    Timeout { tool: String, timeout_ms: u64 },
}

/// Something that can format a single file in place.
pub trait Formatter {
    fn format_file(&self, path: &Path) -> Result<ToolOutput, ExecutorError>;
}

/// Runs a [`ToolDefinition`] as a child process, one file at a time.
#[derive(Debug, Clone)]
pub struct ToolExecutor {
    tool: ToolDefinition,
    /// Timeout in milliseconds, 0 waits forever.
    timeout_ms: u64,
}

impl ToolExecutor {
    pub fn new(tool: ToolDefinition, timeout_ms: u64) -> Self {
        Self { tool, timeout_ms }
    }

    pub fn tool(&self) -> &ToolDefinition {
        &self.tool
    }

    fn command_for(&self, program: &str, path: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(self.tool.args())
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    fn wait(&self, program: &str, mut child: Child) -> Result<ExitStatus, ExecutorError> {
        let wait_err = |source| ExecutorError::Wait {
            tool: program.to_string(),
            source,
        };

        let timeout = Duration::from_millis(self.timeout_ms);
        if timeout.is_zero() {
            return child.wait().map_err(wait_err);
        }

        let start = Instant::now();
        loop {
            if let Some(status) = child.try_wait().map_err(wait_err)? {
                return Ok(status);
            }
            if start.elapsed() >= timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExecutorError::Timeout {
                    tool: program.to_string(),
                    timeout_ms: self.timeout_ms,
                });
            }
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new(ToolDefinition::default(), 0)
    }
}

impl Formatter for ToolExecutor {
    fn format_file(&self, path: &Path) -> Result<ToolOutput, ExecutorError> {
        let program = self.tool.program().ok_or(ExecutorError::EmptyCommand)?;

        let child = self.command_for(program, path).spawn().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ExecutorError::ToolNotFound {
                    tool: program.to_string(),
                }
            } else {
                ExecutorError::Spawn {
                    tool: program.to_string(),
                    source,
                }
            }
        })?;

        let status = self.wait(program, child)?;
        Ok(status.into())
    }
}
