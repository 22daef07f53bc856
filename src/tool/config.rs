//! Configuration types for the external formatter.
//!
//! A [`ToolDefinition`] describes how the formatter binary is invoked and
//! [`OnError`] decides what happens when one invocation fails.

/// Error handling strategy for formatter failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnError {
    /// Ignore the failure and move on to the next file
    #[default]
    Ignore,
    /// Log a warning but continue processing
    Warn,
    /// Stop the run at the first failing file
    Fail,
}

/// Definition of an external formatter.
///
/// The target path is appended after `command`, so the tool always receives
/// exactly one file argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    /// Command to run (first element is the binary, rest are arguments)
    pub command: Vec<String>,
}

impl ToolDefinition {
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the binary, if the command is not empty.
    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    /// Fixed arguments passed before the file path.
    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }

    /// `clang-format -i -style=file`: format in place using the nearest `.clang-format`.
    pub fn clang_format() -> Self {
        Self::new(["clang-format", "-i", "-style=file"])
    }
}

impl Default for ToolDefinition {
    fn default() -> Self {
        Self::clang_format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_clang_format_in_place() {
        let tool = ToolDefinition::default();
        assert_eq!(tool.program(), Some("clang-format"));
        assert_eq!(tool.args(), ["-i", "-style=file"]);
    }

    #[test]
    fn test_default_policy_is_ignore() {
        assert_eq!(OnError::default(), OnError::Ignore);
    }

    #[test]
    fn test_empty_command() {
        let tool = ToolDefinition::new(Vec::<String>::new());
        assert_eq!(tool.program(), None);
        assert!(tool.args().is_empty());
    }

    #[test]
    fn test_program_without_args() {
        let tool = ToolDefinition::new(["indent"]);
        assert_eq!(tool.program(), Some("indent"));
        assert!(tool.args().is_empty());
    }
}
