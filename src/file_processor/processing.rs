//! The traversal-and-dispatch loop.

use super::discovery::{WalkError, find_source_files};
use crate::config::{Config, ConfigError};
use crate::tool::{ExecutorError, Formatter, OnError, ToolOutput};
use std::path::{Path, PathBuf};

/// Fatal errors that end a run early.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Only produced under [`OnError::Fail`].
    #[error("Formatting {} failed: {reason}", path.display())]
    Tool { path: PathBuf, reason: String },
}

/// Why a single formatter invocation counts as failed.
fn failure_reason(result: &Result<ToolOutput, ExecutorError>) -> Option<String> {
    match result {
        Ok(output) if output.success => None,
        Ok(output) => Some(match output.exit_code {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        }),
        Err(e) => Some(e.to_string()),
    }
}

/// Walks every configured root and hands each matching file to a [`Formatter`].
pub struct Runner<'a, F: Formatter> {
    config: &'a Config,
    formatter: F,
}

impl<'a, F: Formatter> Runner<'a, F> {
    pub fn new(config: &'a Config, formatter: F) -> Self {
        Self { config, formatter }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Format every matching file under every root, in order.
    ///
    /// Roots are processed one after another; a root that reaches the same
    /// files as an earlier one submits them again.
    pub fn run(&self) -> Result<(), RunError> {
        let mut dispatched = 0usize;

        for root in &self.config.roots {
            log::debug!("Scanning {}", root.display());
            for path in find_source_files(root, &self.config.extensions)? {
                self.dispatch(&path)?;
                dispatched += 1;
            }
        }

        log::info!("Dispatched formatter on {dispatched} files");
        Ok(())
    }

    fn dispatch(&self, path: &Path) -> Result<(), RunError> {
        log::debug!("Formatting {}", path.display());
        let result = self.formatter.format_file(path);

        let Some(reason) = failure_reason(&result) else {
            return Ok(());
        };

        match self.config.on_error {
            OnError::Ignore => {
                log::debug!("Ignoring formatter failure on {}: {reason}", path.display());
                Ok(())
            }
            OnError::Warn => {
                log::warn!("Formatting {} failed: {reason}", path.display());
                Ok(())
            }
            OnError::Fail => Err(RunError::Tool {
                path: path.to_path_buf(),
                reason,
            }),
        }
    }
}
