//! Utility functions for console output formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{render_kv, render_table, truncate, yes_no};
