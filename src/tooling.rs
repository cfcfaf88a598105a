//! Tooling & Integration Layer
//!
//! Command-line surface over the extractor.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
