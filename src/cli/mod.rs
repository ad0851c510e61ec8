//! Command-line interface for content-forge.
//!
//! Provides listing of metadata categories and items, and content generation
//! from a metadata item or a bare topic.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli, GenerationOutput};
