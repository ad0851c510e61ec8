//! Configuration for content generation runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Default path of the metadata JSON document.
pub const DEFAULT_METADATA_PATH: &str = "sample_content/content_metadata";

/// Default directory generated content is written to.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_content";

/// Reference file used as the example for lessons (and unknown types).
pub const DEFAULT_LESSON_EXAMPLE_PATH: &str =
    "sample_content/GA Lesson Examples/ikea-app-and-gcp-deploy-content-main/build-express-app.md";

/// Reference file used as the example for labs.
pub const DEFAULT_LAB_EXAMPLE_PATH: &str =
    "sample_content/GA Lab Examples/lifting-state-in-react-lab-main/exercise/README.md";

/// Default model used for generation.
pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";

/// Default output token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Maximum number of characters of example text embedded in a prompt.
pub const DEFAULT_EXAMPLE_MAX_CHARS: usize = 2000;

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Default Anthropic API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com/v1";

/// Settings shared by the orchestrator, prompt builder and generation client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path to the metadata JSON document.
    pub metadata_path: PathBuf,
    /// Directory generated files are saved under.
    pub output_dir: PathBuf,
    /// Example reference file for `lesson` (and any unknown type).
    pub lesson_example_path: PathBuf,
    /// Example reference file for `lab`.
    pub lab_example_path: PathBuf,
    /// Model identifier sent with each request.
    pub model: String,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Example text longer than this many characters is truncated.
    pub example_max_chars: usize,
    /// Explicit API key. Takes precedence over `api_key_env`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Name of the environment variable consulted when `api_key` is unset.
    pub api_key_env: String,
    /// Base URL of the messages API.
    pub api_base: String,
}

impl GeneratorConfig {
    /// Creates a configuration with all defaults.
    pub fn new() -> Self {
        Self {
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            lesson_example_path: PathBuf::from(DEFAULT_LESSON_EXAMPLE_PATH),
            lab_example_path: PathBuf::from(DEFAULT_LAB_EXAMPLE_PATH),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            example_max_chars: DEFAULT_EXAMPLE_MAX_CHARS,
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Loads a configuration from a YAML file. Missing fields keep their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| StorageError::io(display.clone(), e))?;
        serde_yaml::from_str(&content).map_err(|source| StorageError::Yaml {
            path: display,
            source,
        })
    }

    /// Sets the metadata path.
    pub fn with_metadata_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata_path = path.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the lesson example path.
    pub fn with_lesson_example(mut self, path: impl Into<PathBuf>) -> Self {
        self.lesson_example_path = path.into();
        self
    }

    /// Sets the lab example path.
    pub fn with_lab_example(mut self, path: impl Into<PathBuf>) -> Self {
        self.lab_example_path = path.into();
        self
    }

    /// Sets the output token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets an explicit API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the environment variable the API key is read from.
    pub fn with_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.metadata_path, PathBuf::from("sample_content/content_metadata"));
        assert_eq!(config.output_dir, PathBuf::from("generated_content"));
        assert_eq!(config.model, "claude-3-sonnet-20240229");
        assert_eq!(config.max_tokens, 4000);
        assert_eq!(config.example_max_chars, 2000);
        assert_eq!(config.api_key_env, "ANTHROPIC_API_KEY");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::new()
            .with_output_dir("./out")
            .with_max_tokens(256)
            .with_api_key("sk-test");

        assert_eq!(config.output_dir, PathBuf::from("./out"));
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_from_yaml_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("forge.yaml");
        std::fs::write(&path, "model: claude-3-opus-20240229\noutput_dir: build/content\n")
            .expect("write config");

        let config = GeneratorConfig::from_yaml_file(&path).expect("config should load");
        assert_eq!(config.model, "claude-3-opus-20240229");
        assert_eq!(config.output_dir, PathBuf::from("build/content"));
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.metadata_path, PathBuf::from(DEFAULT_METADATA_PATH));
    }

    #[test]
    fn test_from_yaml_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");

        let missing = GeneratorConfig::from_yaml_file(dir.path().join("nope.yaml"));
        assert!(matches!(missing, Err(StorageError::NotFound(_))));

        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "max_tokens: [not, a, number]\n").expect("write config");
        let bad = GeneratorConfig::from_yaml_file(&path);
        assert!(matches!(bad, Err(StorageError::Yaml { .. })));
    }
}
