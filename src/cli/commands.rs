//! CLI definition and dispatch for content-forge.
//!
//! The command surface is flag driven: list categories, list the items of a
//! category, generate from a metadata item, or generate from a bare topic.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::generator::{ContentGenerator, GeneratedContent};
use crate::llm::{CLIENT_INIT_ERROR, GENERATION_ERROR_PREFIX};
use crate::metadata::Item;
use crate::prompts::DEFAULT_TOPIC_FILE_TYPE;

/// Course content generator backed by the Anthropic API.
#[derive(Parser, Debug)]
#[command(name = "content-forge")]
#[command(about = "Generate course content using the Anthropic API")]
#[command(version)]
#[command(
    long_about = "content-forge builds lesson, lab and landing-page prompts from content metadata or a bare topic,\nsends them to the Anthropic API and saves the result as markdown.\n\nExample usage:\n  content-forge --list-categories\n  content-forge --category GA_Lab_Examples --item 0\n  content-forge --topic \"Python List Comprehensions\" --type lesson --objectives \"Use filters\" \"Nest loops\""
)]
pub struct Cli {
    /// Topic to generate content for.
    #[arg(long)]
    pub topic: Option<String>,

    /// Type of content for topic generation (lesson, lab, etc.).
    #[arg(long = "type", default_value = DEFAULT_TOPIC_FILE_TYPE)]
    pub file_type: String,

    /// Output directory for generated files.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Path to the metadata JSON file.
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Category in the metadata.
    #[arg(long)]
    pub category: Option<String>,

    /// Item index within the category.
    #[arg(long, allow_negative_numbers = true)]
    pub item: Option<i64>,

    /// List the categories in the metadata.
    #[arg(long)]
    pub list_categories: bool,

    /// List the items in a category.
    #[arg(long, value_name = "CATEGORY")]
    pub list_items: Option<String>,

    /// Do not include example content in the prompt.
    #[arg(long)]
    pub no_examples: bool,

    /// Print the generated content instead of saving it.
    #[arg(long)]
    pub no_save: bool,

    /// Learning objectives for topic generation.
    #[arg(long, num_args = 1..)]
    pub objectives: Option<Vec<String>>,

    /// Model to use for generation.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Maximum number of tokens to generate.
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Anthropic API key (can also be set via ANTHROPIC_API_KEY env var).
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// YAML configuration file. Flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output a JSON summary of the generation.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Builds the generator configuration: file (or defaults), then flag overrides.
    pub fn to_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(path) = &self.metadata {
            config.metadata_path = path.clone();
        }
        if let Some(dir) = &self.output {
            config.output_dir = dir.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }

        Ok(config)
    }
}

/// JSON output structure for generation results.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    pub status: String,
    pub mode: String,
    pub model: String,
    pub file_type: String,
    pub name: String,
    pub saved_path: Option<String>,
    pub content: String,
}

impl GenerationOutput {
    fn new(mode: &str, model: &str, generated: &GeneratedContent) -> Self {
        let failed = generated.content == CLIENT_INIT_ERROR
            || generated.content.starts_with(GENERATION_ERROR_PREFIX);
        Self {
            status: if failed { "error" } else { "success" }.to_string(),
            mode: mode.to_string(),
            model: model.to_string(),
            file_type: generated.file_type.clone(),
            name: generated.name.clone(),
            saved_path: generated
                .saved_path
                .as_ref()
                .map(|p| p.display().to_string()),
            content: generated.content.clone(),
        }
    }
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI with the parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let config = cli.to_config()?;
    let model = config.model.clone();
    let generator = ContentGenerator::from_config(config);

    if cli.list_categories {
        print!("{}", render_categories(&generator.categories()));
        return Ok(());
    }

    if let Some(category) = &cli.list_items {
        print!("{}", render_items(category, generator.items_in(category)));
        return Ok(());
    }

    if let (Some(category), Some(index)) = (&cli.category, cli.item) {
        info!(category = %category, index, "Generating content from metadata");
        let generated = generator
            .generate_from_metadata(category, index, !cli.no_examples, !cli.no_save)
            .await
            .context("Failed to generate content.")?;
        report(&cli, "metadata", &model, &generated)?;
        return Ok(());
    }

    if let Some(topic) = &cli.topic {
        info!(topic = %topic, file_type = %cli.file_type, "Generating content from topic");
        let generated = generator
            .generate_from_topic(topic, &cli.file_type, cli.objectives.clone(), !cli.no_save)
            .await;
        report(&cli, "topic", &model, &generated)?;
        return Ok(());
    }

    println!("No generation options provided. Use --topic or --category and --item to generate content.");
    println!("Use --help for more information.");
    Ok(())
}

fn report(cli: &Cli, mode: &str, model: &str, generated: &GeneratedContent) -> anyhow::Result<()> {
    if cli.json {
        let output = GenerationOutput::new(mode, model, generated);
        let json_output = serde_json::to_string_pretty(&output)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    if let Some(path) = &generated.saved_path {
        println!("Content saved to {}", path.display());
    }
    if cli.no_save {
        println!("\n=== Generated Content ===\n");
        println!("{}", generated.content);
        println!("\n=== End of Generated Content ===\n");
    }
    println!("Content generation complete!");
    Ok(())
}

/// Category listing, numbered from 1.
fn render_categories(categories: &[&str]) -> String {
    if categories.is_empty() {
        return "No categories found in metadata.\n".to_string();
    }

    let mut out = String::from("Available categories:\n");
    for (i, category) in categories.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, category));
    }
    out
}

/// Item listing, numbered from 0 to match `--item`.
fn render_items(category: &str, items: &[Item]) -> String {
    if items.is_empty() {
        return format!("No items found in category '{}'.\n", category);
    }

    let mut out = format!("Items in category '{}':\n", category);
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i, item.name()));
    }
    out
}
