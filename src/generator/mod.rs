//! Content generation pipeline for content-forge.
//!
//! This module ties the pipeline stages together:
//!
//! 1. **Item Selection** - Look up an item by category and index, or synthesize one from a topic
//! 2. **Prompt Assembly** - Build the full prompt for the item
//! 3. **Generation** - Send the prompt to the LLM
//! 4. **Persistence** - Optionally write the result to `{file_type}_{name}.md`
//!
//! # Example
//!
//! ```ignore
//! use content_forge::config::GeneratorConfig;
//! use content_forge::generator::ContentGenerator;
//!
//! let generator = ContentGenerator::from_config(GeneratorConfig::default());
//!
//! for category in generator.categories() {
//!     println!("{category}");
//! }
//!
//! if let Some(generated) = generator.generate_from_metadata("GA_Lab_Examples", 0, true, true).await {
//!     println!("saved to {:?}", generated.saved_path);
//! }
//! ```

pub mod orchestrator;

pub use orchestrator::{output_filename, ContentGenerator, GeneratedContent};
