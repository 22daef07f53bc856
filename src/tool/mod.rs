//! External formatter invocation.
//!
//! The formatter is treated as an opaque collaborator: it gets a fixed set of
//! arguments plus one file path and rewrites that file in place. By default
//! nothing about the result is inspected (see [`OnError`]).
//!
//! The default tool is:
//!
//! ```text
//! clang-format -i -style=file <path>
//! ```

pub mod config;
pub mod executor;

pub use config::{OnError, ToolDefinition};
pub use executor::{ExecutorError, Formatter, ToolExecutor, ToolOutput};
