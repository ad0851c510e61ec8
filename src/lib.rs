//! content-forge: course content generation with LLMs.
//!
//! This library assembles lesson, lab and landing-page prompts from content
//! metadata (or a bare topic), sends them to the Anthropic API and saves the
//! generated markdown.

// Core modules
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod metadata;
pub mod prompts;
pub mod storage;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use error::{LlmError, MetadataError, StorageError};
pub use generator::{ContentGenerator, GeneratedContent};
