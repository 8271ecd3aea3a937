//! Input handling module

pub mod glob_resolver;
pub mod open_inputs;

pub use glob_resolver::{resolve_patterns, STDIN_MARKER};
pub use open_inputs::{InputSet, OpenInput};
