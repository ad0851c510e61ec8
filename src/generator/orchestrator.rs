//! Orchestrates metadata lookup, prompt assembly, generation and persistence.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::MetadataError;
use crate::llm::{GenerationClient, LlmProvider};
use crate::metadata::{Item, MetadataDocument};
use crate::prompts::PromptBuilder;
use crate::storage;

/// Output of a single generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedContent {
    /// Generated text, or the error text that stands in for it.
    pub content: String,
    /// File type the content was generated as.
    pub file_type: String,
    /// Display name (item name or topic).
    pub name: String,
    /// Where the content was written, when saving was requested and succeeded.
    pub saved_path: Option<PathBuf>,
}

/// File name for generated content: `{file_type}_{name}.md` with spaces as underscores.
pub fn output_filename(file_type: &str, name: &str) -> String {
    format!("{}_{}.md", file_type, name.replace(' ', "_"))
}

/// Generates lessons, labs and landing pages from metadata items or topics.
pub struct ContentGenerator {
    config: GeneratorConfig,
    metadata: Option<MetadataDocument>,
    prompts: PromptBuilder,
    client: GenerationClient,
}

impl ContentGenerator {
    /// Creates a generator without loading any metadata.
    pub fn new(config: GeneratorConfig) -> Self {
        let prompts = PromptBuilder::from_config(&config);
        let client = GenerationClient::from_config(&config);
        Self {
            config,
            metadata: None,
            prompts,
            client,
        }
    }

    /// Creates a generator and loads metadata from the configured path.
    pub fn from_config(config: GeneratorConfig) -> Self {
        let path = config.metadata_path.clone();
        let mut generator = Self::new(config);
        generator.load_metadata(&path);
        generator
    }

    /// Routes generation through a fixed provider instead of the configured API.
    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.client = self.client.with_provider(provider);
        self
    }

    /// Replaces the loaded metadata.
    pub fn with_metadata(mut self, metadata: MetadataDocument) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Loads metadata from `path`. Returns false when nothing usable was loaded.
    pub fn load_metadata(&mut self, path: impl AsRef<Path>) -> bool {
        let doc = MetadataDocument::load(path);
        let loaded = !doc.is_empty();
        self.metadata = Some(doc);
        loaded
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The loaded metadata, if any.
    pub fn metadata(&self) -> Option<&MetadataDocument> {
        self.metadata.as_ref()
    }

    /// The prompt builder used for generation.
    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    /// Category names of the loaded metadata; empty when none is loaded.
    pub fn categories(&self) -> Vec<&str> {
        self.metadata
            .as_ref()
            .map(MetadataDocument::categories)
            .unwrap_or_default()
    }

    /// Items of a category; empty when none is loaded or the category is missing.
    pub fn items_in(&self, category: &str) -> &[Item] {
        self.metadata
            .as_ref()
            .map(|doc| doc.items_in(category))
            .unwrap_or(&[])
    }

    fn lookup(&self, category: &str, index: i64) -> Result<&Item, MetadataError> {
        let doc = self
            .metadata
            .as_ref()
            .filter(|doc| !doc.is_empty())
            .ok_or(MetadataError::NotLoaded)?;
        doc.try_item_at(category, index)
    }

    /// Generates content for the item at `index` in `category`.
    ///
    /// Returns `None`, with the reason logged, when no metadata is loaded or the
    /// item does not exist. API failures still produce content (the error text).
    pub async fn generate_from_metadata(
        &self,
        category: &str,
        index: i64,
        include_examples: bool,
        save: bool,
    ) -> Option<GeneratedContent> {
        let item = match self.lookup(category, index) {
            Ok(item) => item,
            Err(e) => {
                warn!(category, index, error = %e, "Cannot generate from metadata");
                return None;
            }
        };

        let file_type = item.file_type();
        info!(category, index, file_type = %file_type, name = item.name(), "Generating content from metadata");

        let prompt = self.prompts.full_prompt(item, include_examples);
        let content = self.client.generate(&prompt).await;

        Some(self.finish(content, file_type, item.name().to_string(), save))
    }

    /// Generates content for a bare topic.
    ///
    /// The saved file name uses `file_type` exactly as given.
    pub async fn generate_from_topic(
        &self,
        topic: &str,
        file_type: &str,
        objectives: Option<Vec<String>>,
        save: bool,
    ) -> GeneratedContent {
        info!(topic, file_type, "Generating content from topic");

        let prompt = self.prompts.prompt_from_topic(topic, file_type, objectives);
        let content = self.client.generate(&prompt).await;

        self.finish(content, file_type.to_string(), topic.to_string(), save)
    }

    fn finish(&self, content: String, file_type: String, name: String, save: bool) -> GeneratedContent {
        let saved_path = if save {
            storage::write_text(
                &content,
                output_filename(&file_type, &name),
                Some(&self.config.output_dir),
            )
        } else {
            None
        };

        GeneratedContent {
            content,
            file_type,
            name,
            saved_path,
        }
    }
}
