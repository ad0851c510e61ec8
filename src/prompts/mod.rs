//! Prompt assembly for lesson, lab and landing-page generation.
//!
//! # Architecture
//!
//! - [`format`] - Fixed instruction blocks (format structure, standards, guidance)
//! - [`reference`] - Example reference files, truncated for embedding
//! - [`builder`] - Composition of the full prompt from an item or a topic
//!
//! # Usage
//!
//! ```no_run
//! use content_forge::prompts::{PromptBuilder, DEFAULT_TOPIC_FILE_TYPE};
//!
//! let builder = PromptBuilder::default();
//! let prompt = builder.prompt_from_topic("Recursion", DEFAULT_TOPIC_FILE_TYPE, None);
//! assert!(prompt.starts_with("Generate a lesson on Recursion."));
//! ```

pub mod builder;
pub mod format;
pub mod reference;

pub use builder::{
    basic_prompt, default_objectives, metrics_prompt, topic_item, topic_metrics, PromptBuilder,
    CLOSING_INSTRUCTION, DEFAULT_TOPIC_FILE_TYPE,
};
pub use format::{content_standards, format_instructions, step_by_step_guidance};
pub use reference::{truncate_example, ExampleProvider, EXAMPLE_UNAVAILABLE, TRUNCATION_MARKER};
