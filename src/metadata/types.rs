//! Item records and their defaulting rules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// File type assumed when an item does not declare one.
pub const DEFAULT_FILE_TYPE: &str = "content";

/// File type of course landing pages, which use a dedicated prompt shape.
pub const COURSE_LANDING: &str = "course_landing";

/// Display name used when an item has neither `topic` nor `course_title`.
pub const UNNAMED: &str = "unnamed";

/// One metadata record describing a piece of content to generate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_objectives: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_metrics: Option<ContentMetrics>,
    /// Only meaningful for `course_landing` items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_description: Option<String>,
    /// Only meaningful for `course_landing` items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<Vec<String>>,
}

impl Item {
    /// Creates an item for a topic.
    pub fn for_topic(topic: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            file_type: Some(file_type.into()),
            ..Self::default()
        }
    }

    /// Sets the learning objectives.
    pub fn with_objectives(mut self, objectives: Vec<String>) -> Self {
        self.learning_objectives = Some(objectives);
        self
    }

    /// Sets the content metrics.
    pub fn with_metrics(mut self, metrics: ContentMetrics) -> Self {
        self.content_metrics = Some(metrics);
        self
    }

    /// Display name: `topic`, else `course_title`, else `"unnamed"`.
    pub fn name(&self) -> &str {
        self.topic
            .as_deref()
            .or(self.course_title.as_deref())
            .unwrap_or(UNNAMED)
    }

    /// Lowercased file type, `"content"` when absent.
    pub fn file_type(&self) -> String {
        self.file_type
            .as_deref()
            .unwrap_or(DEFAULT_FILE_TYPE)
            .to_lowercase()
    }

    /// Learning objectives, empty when absent.
    pub fn objectives(&self) -> &[String] {
        self.learning_objectives.as_deref().unwrap_or(&[])
    }

    /// Resolved content metrics, or `None` when the item declares none.
    ///
    /// Any non-empty `content_metrics` object counts as declared, even when it
    /// names none of the known metrics.
    pub fn metrics(&self) -> Option<Metrics> {
        self.content_metrics
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(ContentMetrics::resolve)
    }
}

/// Metric key for the target word count.
pub const WORD_COUNT: &str = "word_count";
/// Metric key for the text-to-code ratio.
pub const TEXT_TO_CODE_RATIO: &str = "text_to_code_ratio";
/// Metric key for the image count.
pub const NUMBER_OF_IMAGES: &str = "number_of_images";
/// Metric key for the diagram count.
pub const NUMBER_OF_DIAGRAMS: &str = "number_of_diagrams";

/// Content metrics as written in the metadata.
///
/// Values are kept untyped: whatever the metadata holds is interpolated into
/// the prompt as written, so `1200`, `1200.0` and `"1200"` are all accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentMetrics(Map<String, Value>);

impl ContentMetrics {
    /// Creates an empty metrics object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one metric.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// True when the object has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw value of a metric. `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Renders each metric, falling back to the defaults for missing ones.
    pub fn resolve(&self) -> Metrics {
        let defaults = Metrics::default();
        let field = |key: &str, default: String| self.get(key).map(metric_text).unwrap_or(default);
        Metrics {
            word_count: field(WORD_COUNT, defaults.word_count),
            text_to_code_ratio: field(TEXT_TO_CODE_RATIO, defaults.text_to_code_ratio),
            number_of_images: field(NUMBER_OF_IMAGES, defaults.number_of_images),
            number_of_diagrams: field(NUMBER_OF_DIAGRAMS, defaults.number_of_diagrams),
        }
    }
}

/// Text of a metric value as it appears in a prompt: strings unquoted,
/// numbers in their JSON form.
fn metric_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Content metrics with defaults applied, rendered for the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub word_count: String,
    pub text_to_code_ratio: String,
    pub number_of_images: String,
    pub number_of_diagrams: String,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            word_count: "500".to_string(),
            text_to_code_ratio: "0.7".to_string(),
            number_of_images: "1".to_string(),
            number_of_diagrams: "1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Item {
        serde_json::from_str(json).expect("item should parse")
    }

    #[test]
    fn test_name_prefers_topic_then_course_title() {
        assert_eq!(parse(r#"{"topic": "Git", "course_title": "Dev"}"#).name(), "Git");
        assert_eq!(parse(r#"{"course_title": "Software Engineering"}"#).name(), "Software Engineering");
        assert_eq!(parse("{}").name(), "unnamed");
    }

    #[test]
    fn test_file_type_defaults_and_lowercases() {
        assert_eq!(parse("{}").file_type(), "content");
        assert_eq!(parse(r#"{"file_type": "Lab"}"#).file_type(), "lab");
        assert_eq!(parse(r#"{"file_type": "course_landing"}"#).file_type(), COURSE_LANDING);
    }

    #[test]
    fn test_objectives_default_empty() {
        assert!(parse("{}").objectives().is_empty());
        let item = parse(r#"{"learning_objectives": ["a", "b"]}"#);
        assert_eq!(item.objectives(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_metrics_resolution() {
        assert!(parse("{}").metrics().is_none());
        assert!(parse(r#"{"content_metrics": {}}"#).metrics().is_none());
        assert!(parse(r#"{"content_metrics": null}"#).metrics().is_none());

        let metrics = parse(r#"{"content_metrics": {"word_count": 1200}}"#)
            .metrics()
            .expect("metrics present");
        assert_eq!(metrics.word_count, "1200");
        assert_eq!(metrics.text_to_code_ratio, "0.7");
        assert_eq!(metrics.number_of_images, "1");
        assert_eq!(metrics.number_of_diagrams, "1");
    }

    #[test]
    fn test_metrics_keep_values_as_written() {
        let metrics = parse(
            r#"{"content_metrics": {"word_count": 1200.0, "text_to_code_ratio": 1,
                "number_of_images": "2", "number_of_diagrams": -1}}"#,
        )
        .metrics()
        .expect("metrics present");
        assert_eq!(metrics.word_count, "1200.0");
        assert_eq!(metrics.text_to_code_ratio, "1");
        assert_eq!(metrics.number_of_images, "2");
        assert_eq!(metrics.number_of_diagrams, "-1");
    }

    #[test]
    fn test_unrelated_metric_keys_still_count_as_declared() {
        let metrics = parse(r#"{"content_metrics": {"other": 1, "word_count": null}}"#)
            .metrics()
            .expect("non-empty object is declared");
        assert_eq!(metrics, Metrics::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let item = parse(r#"{"topic": "Docker", "duration": "3h", "author": "GA"}"#);
        assert_eq!(item.name(), "Docker");
    }
}
