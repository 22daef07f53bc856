//! File discovery and formatter dispatch.
//!
//! Discovery walks one root at a time and filters by file name suffix; the
//! runner feeds every match to the formatter, one file after another.

mod discovery;
mod processing;

pub use discovery::*;
pub use processing::*;
