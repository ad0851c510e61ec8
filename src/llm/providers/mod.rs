//! LLM provider implementations.
//!
//! This module provides the concrete providers behind the [`LlmProvider`] trait.

pub mod anthropic;

pub use anthropic::AnthropicProvider;

// Re-export the main LlmProvider trait for convenience
pub use super::provider::LlmProvider;
