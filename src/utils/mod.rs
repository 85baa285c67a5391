//! Utility modules for the scales library
//!
//! Helpers that adapt notes and scales for tabular display.

pub mod table;

// Re-export commonly used types
pub use table::*;
