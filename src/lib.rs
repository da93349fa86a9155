//! clippeek library - cliphist entry preview
//!
//! This library exposes the core functionality of clippeek for testing purposes.

pub mod error;
pub mod history;
pub mod preview;

// Re-export commonly used types for convenience
pub use error::PeekError;
