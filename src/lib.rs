//! Batch source formatting.
//!
//! Walks a fixed list of root directories, picks out files by name suffix and
//! runs an external formatter on each of them in place:
//!
//! ```no_run
//! use fmtsweep_lib::{Config, run};
//!
//! let config = Config::default().with_roots(["src/kernel/"]);
//! run(&config).unwrap();
//! ```

pub mod config;
pub mod exit_codes;
pub mod file_processor;
pub mod tool;

pub use config::{Config, ConfigError};
pub use file_processor::{ExtensionFilter, RunError, Runner, WalkError, find_source_files};
pub use tool::{ExecutorError, Formatter, OnError, ToolDefinition, ToolExecutor, ToolOutput};

/// Format every matching file described by `config` using the configured tool.
pub fn run(config: &Config) -> Result<(), RunError> {
    config.validate()?;
    let executor = ToolExecutor::new(config.tool.clone(), config.timeout_ms);
    Runner::new(config, executor).run()
}
