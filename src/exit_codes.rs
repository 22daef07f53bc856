/// Exit codes for fmtsweep
///
/// Per-file formatter failures never change the exit code unless the runner
/// was configured to stop on them.
/// Success - Every root was scanned and every matching file was dispatched
pub const SUCCESS: i32 = 0;

/// Tool error - Traversal failed, or a formatter failure stopped the run
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
