//! Linestash CLI library
//!
//! This library provides the command-line interface for reading many files
//! line by line through a single incremental line reader.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
