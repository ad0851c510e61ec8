//! LLM integration for content-forge.
//!
//! This module wraps the remote text-generation call behind the [`LlmProvider`]
//! trait and converts every failure into a descriptive error string, so callers
//! always receive some text to display or persist.
//!
//! ```ignore
//! use content_forge::llm::{generate_content, GenerationClient};
//! use content_forge::config::GeneratorConfig;
//!
//! // One-shot call with the default key lookup (ANTHROPIC_API_KEY)
//! let text = generate_content(&prompt, "claude-3-sonnet-20240229", 4000, None).await;
//!
//! // Or bound to a configuration
//! let client = GenerationClient::from_config(&GeneratorConfig::default());
//! let text = client.generate(&prompt).await;
//! ```

pub mod generation;
pub mod provider;
pub mod providers;

pub use generation::{
    complete, generate_content, key_from_env_file, mask_api_key, resolve_api_key, GenerationClient,
    CLIENT_INIT_ERROR, GENERATION_ERROR_PREFIX,
};
pub use provider::{ContentBlock, GenerationRequest, GenerationResponse, LlmProvider, Message, Usage};
pub use providers::AnthropicProvider;
