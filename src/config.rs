//! Runner configuration.
//!
//! The configuration is a single immutable value built once at startup and
//! handed to the runner. There is no configuration file and no environment
//! override: the defaults below describe the kernel source tree this tool was
//! written for, and library users build their own value with the `with_*`
//! methods.

use crate::file_processor::ExtensionFilter;
use crate::tool::{OnError, ToolDefinition};
use std::path::PathBuf;

/// Directories scanned by default, relative to the working directory.
pub const DEFAULT_ROOTS: &[&str] = &["src/devices/", "src/examples/", "src/kernel/", "src/filesys/"];

/// File name suffixes formatted by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".c", ".h"];

/// Everything the runner needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directories, scanned in this order
    pub roots: Vec<PathBuf>,
    /// Suffix filter applied to file names
    pub extensions: ExtensionFilter,
    /// Formatter invoked once per matching file
    pub tool: ToolDefinition,
    /// What to do when one formatter invocation fails
    pub on_error: OnError,
    /// Per-file timeout in milliseconds (0 = wait forever)
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
            extensions: ExtensionFilter::new(DEFAULT_EXTENSIONS.iter().copied()),
            tool: ToolDefinition::default(),
            on_error: OnError::default(),
            timeout_ms: 0,
        }
    }
}

impl Config {
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = ExtensionFilter::new(extensions);
        self
    }

    pub fn with_tool(mut self, tool: ToolDefinition) -> Self {
        self.tool = tool;
        self
    }

    pub fn with_on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Check the configuration before anything is spawned.
    ///
    /// An empty extension set is accepted (it simply matches nothing), but a
    /// formatter without a program cannot be run at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tool.program().is_none_or(str::is_empty) {
            return Err(ConfigError::EmptyCommand);
        }
        if self.extensions.is_empty() {
            log::debug!("No file extensions configured; nothing will be formatted");
        }
        Ok(())
    }
}

/// Errors that make a configuration unusable
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Formatter command is empty")]
    EmptyCommand,
}
