//! Prompt assembly for content generation.
//!
//! A full prompt is the concatenation, separated by blank lines, of:
//! basic request, metrics, format structure, content standards, step-by-step
//! guidance, optional example and a closing instruction.

use super::format::{content_standards, format_instructions, step_by_step_guidance};
use super::reference::ExampleProvider;
use crate::config::GeneratorConfig;
use crate::metadata::{
    ContentMetrics, Item, COURSE_LANDING, NUMBER_OF_DIAGRAMS, NUMBER_OF_IMAGES,
    TEXT_TO_CODE_RATIO, WORD_COUNT,
};

/// Final sentence of every prompt.
pub const CLOSING_INSTRUCTION: &str =
    "Please generate complete, well-structured content that follows all the guidelines above.";

/// File type used by topic-based generation when none is given.
pub const DEFAULT_TOPIC_FILE_TYPE: &str = "lesson";

/// Metrics attached to items synthesized from a bare topic.
pub fn topic_metrics() -> ContentMetrics {
    ContentMetrics::new()
        .with(WORD_COUNT, 1000)
        .with(TEXT_TO_CODE_RATIO, 0.7)
        .with(NUMBER_OF_IMAGES, 2)
        .with(NUMBER_OF_DIAGRAMS, 1)
}

/// Builds the opening request line for an item.
pub fn basic_prompt(item: &Item) -> String {
    let file_type = item.file_type();

    if file_type == COURSE_LANDING {
        let title = item.course_title.as_deref().unwrap_or_else(|| item.name());
        let description = item.course_description.as_deref().unwrap_or_default();
        let mut prompt =
            format!("Generate a {file_type} for {title}. Course description: {description}");
        if let Some(path) = &item.learning_path {
            prompt.push_str(&format!(". Learning path: {}", path.join(", ")));
        }
        prompt
    } else {
        format!(
            "Generate a {} on {}. Learning objectives: {}",
            file_type,
            item.name(),
            item.objectives().join(", ")
        )
    }
}

/// Builds the metrics sentence, or an empty string when the item has no metrics.
pub fn metrics_prompt(item: &Item) -> String {
    let Some(metrics) = item.metrics() else {
        return String::new();
    };

    format!(
        "The content should be approximately {} words with a text-to-code ratio of {}. Include {} images and {} diagrams.",
        metrics.word_count,
        metrics.text_to_code_ratio,
        metrics.number_of_images,
        metrics.number_of_diagrams,
    )
}

/// Default objectives for a topic without explicit ones.
pub fn default_objectives(topic: &str) -> Vec<String> {
    vec![
        format!("Understand the core concepts of {topic}"),
        format!("Implement basic {topic} functionality"),
        format!("Debug common issues with {topic}"),
    ]
}

/// Assembles full prompts, pulling example text from an [`ExampleProvider`].
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    examples: ExampleProvider,
}

impl PromptBuilder {
    /// Creates a builder using the given example provider.
    pub fn new(examples: ExampleProvider) -> Self {
        Self { examples }
    }

    /// Creates a builder from the generator configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(ExampleProvider::from_config(config))
    }

    /// The example provider backing this builder.
    pub fn examples(&self) -> &ExampleProvider {
        &self.examples
    }

    /// Wraps the example for `file_type` in the example-structure template.
    pub fn example_section(&self, file_type: &str) -> String {
        let example = self.examples.extract(Some(file_type), None);
        format!(
            "\nEXAMPLE STRUCTURE:\nThe following is an example of how the content should be structured and formatted:\n\n{example}\n\nYour generated content should follow a similar structure and formatting style.\n"
        )
    }

    /// Builds the complete prompt for an item.
    pub fn full_prompt(&self, item: &Item, include_examples: bool) -> String {
        let file_type = item.file_type();
        let example = if include_examples {
            self.example_section(&file_type)
        } else {
            String::new()
        };

        let prompt = format!(
            "\n{}\n\n{}\n\n{}\n\n{}\n\n{}\n\n{}\n\n{}\n",
            basic_prompt(item),
            metrics_prompt(item),
            format_instructions(&file_type),
            content_standards(),
            step_by_step_guidance(),
            example,
            CLOSING_INSTRUCTION,
        );

        prompt.trim().to_string()
    }

    /// Builds a prompt from a bare topic.
    ///
    /// `objectives` of `None` yields three defaults mentioning the topic; an
    /// explicit empty list is kept empty. Examples are always included.
    pub fn prompt_from_topic(
        &self,
        topic: &str,
        file_type: &str,
        objectives: Option<Vec<String>>,
    ) -> String {
        let item = topic_item(topic, file_type, objectives);
        self.full_prompt(&item, true)
    }
}

/// Synthesizes the item used for topic-based generation.
pub fn topic_item(topic: &str, file_type: &str, objectives: Option<Vec<String>>) -> Item {
    Item::for_topic(topic, file_type)
        .with_objectives(objectives.unwrap_or_else(|| default_objectives(topic)))
        .with_metrics(topic_metrics())
}
