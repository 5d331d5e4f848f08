//! Reporting utilities: formatted terminal output for scores and artifacts.
//!
//! Formatting lives here so scoring stays free of presentation concerns.

pub mod format;

pub use format::*;
