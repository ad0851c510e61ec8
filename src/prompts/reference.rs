//! Reference examples embedded in prompts to show the expected structure.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::{
    GeneratorConfig, DEFAULT_EXAMPLE_MAX_CHARS, DEFAULT_LAB_EXAMPLE_PATH,
    DEFAULT_LESSON_EXAMPLE_PATH,
};
use crate::storage;

/// Text returned when no example can be read.
pub const EXAMPLE_UNAVAILABLE: &str = "Example content not available.";

/// Appended to example text cut at the character limit.
pub const TRUNCATION_MARKER: &str = "\n...\n[Example truncated for brevity]";

/// Resolves and reads example reference files by file type.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleProvider {
    lesson_path: PathBuf,
    lab_path: PathBuf,
    max_chars: usize,
}

impl ExampleProvider {
    /// Creates a provider with explicit paths and character limit.
    pub fn new(lesson_path: impl Into<PathBuf>, lab_path: impl Into<PathBuf>, max_chars: usize) -> Self {
        Self {
            lesson_path: lesson_path.into(),
            lab_path: lab_path.into(),
            max_chars,
        }
    }

    /// Creates a provider from the generator configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            &config.lesson_example_path,
            &config.lab_example_path,
            config.example_max_chars,
        )
    }

    /// Maximum number of characters kept from an example.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Path of the reference file for a file type. Unknown types use the lesson example.
    pub fn resolve_path(&self, file_type: &str) -> &Path {
        match file_type.to_lowercase().as_str() {
            "lab" => &self.lab_path,
            _ => &self.lesson_path,
        }
    }

    /// Reads the example for `file_type`, or from `explicit_path` when given.
    ///
    /// Never fails: unreadable or empty files yield [`EXAMPLE_UNAVAILABLE`].
    pub fn extract(&self, file_type: Option<&str>, explicit_path: Option<&Path>) -> String {
        let path = explicit_path.unwrap_or_else(|| self.resolve_path(file_type.unwrap_or("lesson")));

        match storage::read_text(path) {
            Some(content) if !content.is_empty() => truncate_example(content, self.max_chars),
            Some(_) => EXAMPLE_UNAVAILABLE.to_string(),
            None => {
                warn!(path = %path.display(), "Error extracting example content");
                EXAMPLE_UNAVAILABLE.to_string()
            }
        }
    }
}

impl Default for ExampleProvider {
    fn default() -> Self {
        Self::new(
            DEFAULT_LESSON_EXAMPLE_PATH,
            DEFAULT_LAB_EXAMPLE_PATH,
            DEFAULT_EXAMPLE_MAX_CHARS,
        )
    }
}

/// Cuts `content` to `max_chars` characters and appends [`TRUNCATION_MARKER`].
/// Content within the limit is returned unchanged.
pub fn truncate_example(content: String, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_index, _)) => {
            let mut truncated = content;
            truncated.truncate(byte_index);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn provider_in(dir: &Path) -> ExampleProvider {
        ExampleProvider::new(dir.join("lesson.md"), dir.join("lab.md"), 2000)
    }

    #[test]
    fn test_resolve_path() {
        let provider = ExampleProvider::default();
        assert_eq!(provider.resolve_path("lesson"), Path::new(DEFAULT_LESSON_EXAMPLE_PATH));
        assert_eq!(provider.resolve_path("lab"), Path::new(DEFAULT_LAB_EXAMPLE_PATH));
        assert_eq!(provider.resolve_path("LAB"), Path::new(DEFAULT_LAB_EXAMPLE_PATH));
        assert_eq!(provider.resolve_path("quiz"), Path::new(DEFAULT_LESSON_EXAMPLE_PATH));
        assert_eq!(provider.max_chars(), 2000);
    }

    #[test]
    fn test_extract_short_example_unchanged() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("lab.md"), "# Lab\nDay 1").expect("write");

        let provider = provider_in(dir.path());
        assert_eq!(provider.extract(Some("lab"), None), "# Lab\nDay 1");
    }

    #[test]
    fn test_extract_truncates_long_example() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source: String = "\u{e9}abcdefghij".repeat(300);
        fs::write(dir.path().join("lesson.md"), &source).expect("write");

        let text = provider_in(dir.path()).extract(Some("lesson"), None);

        assert_eq!(
            text.chars().count(),
            2000 + TRUNCATION_MARKER.chars().count()
        );
        let head: String = text.chars().take(2000).collect();
        let source_head: String = source.chars().take(2000).collect();
        assert_eq!(head, source_head);
        assert!(text.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_extract_exactly_at_limit_is_not_truncated() {
        let source = "x".repeat(2000);
        assert_eq!(truncate_example(source.clone(), 2000), source);
    }

    #[test]
    fn test_extract_explicit_path_overrides_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("lab.md"), "lab example").expect("write");
        let custom = dir.path().join("custom.md");
        fs::write(&custom, "custom example").expect("write");

        let provider = provider_in(dir.path());
        assert_eq!(provider.extract(Some("lab"), Some(&custom)), "custom example");
    }

    #[test]
    fn test_extract_fallbacks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = provider_in(dir.path());

        assert_eq!(provider.extract(Some("lesson"), None), EXAMPLE_UNAVAILABLE);
        assert_eq!(provider.extract(None, None), EXAMPLE_UNAVAILABLE);

        fs::write(dir.path().join("lab.md"), "").expect("write");
        assert_eq!(provider.extract(Some("lab"), None), EXAMPLE_UNAVAILABLE);

        // A directory cannot be read as text.
        assert_eq!(provider.extract(None, Some(dir.path())), EXAMPLE_UNAVAILABLE);
    }
}
