//! Integration tests for the Anthropic client.
//!
//! These tests make real API calls.
//! Run with: ANTHROPIC_API_KEY=your_key cargo test --test llm_integration -- --ignored

use content_forge::config::{GeneratorConfig, DEFAULT_MODEL};
use content_forge::error::LlmError;
use content_forge::generator::ContentGenerator;
use content_forge::llm::{
    generate_content, AnthropicProvider, GenerationRequest, LlmProvider, Message,
    GENERATION_ERROR_PREFIX,
};

fn get_test_api_key() -> String {
    std::env::var("ANTHROPIC_API_KEY")
        .expect("ANTHROPIC_API_KEY environment variable must be set for integration tests")
}

fn create_test_client() -> AnthropicProvider {
    AnthropicProvider::new(get_test_api_key()).expect("client should build")
}

#[tokio::test]
#[ignore] // Run with: cargo test --test llm_integration -- --ignored
async fn test_simple_generation() {
    let client = create_test_client();

    let request = GenerationRequest::new(
        DEFAULT_MODEL,
        vec![Message::user("What is 2 + 2? Reply with just the number.")],
    )
    .with_max_tokens(10);

    let response = client.generate(request).await;
    assert!(response.is_ok(), "Generation failed: {:?}", response.err());

    let response = response.expect("Should have response");
    let content = response.first_text().expect("Should have content");
    assert!(
        content.contains('4'),
        "Response should contain '4', got: {}",
        content
    );

    // Verify usage was tracked
    assert!(response.usage.total_tokens() > 0, "Should have token usage");
}

#[tokio::test]
#[ignore]
async fn test_invalid_key_is_rejected() {
    let client = AnthropicProvider::new("sk-ant-invalid-key".to_string()).expect("client should build");

    let result = client
        .generate(GenerationRequest::new(DEFAULT_MODEL, vec![Message::user("Hello")]).with_max_tokens(5))
        .await;

    assert!(
        matches!(result, Err(LlmError::ApiError { code: 401, .. })),
        "Expected 401, got: {:?}",
        result
    );
}

#[tokio::test]
#[ignore]
async fn test_generate_content_with_explicit_key() {
    let key = get_test_api_key();

    let text = generate_content(
        "Write one sentence describing recursion.",
        DEFAULT_MODEL,
        100,
        Some(&key),
    )
    .await;

    assert!(!text.starts_with(GENERATION_ERROR_PREFIX), "Got error text: {}", text);
    assert!(!text.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_topic_generation_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = GeneratorConfig::new()
        .with_output_dir(dir.path())
        .with_max_tokens(300)
        .with_api_key(get_test_api_key());
    let generator = ContentGenerator::new(config);

    let generated = generator
        .generate_from_topic("Binary Search", "lesson", None, true)
        .await;

    assert!(
        !generated.content.starts_with(GENERATION_ERROR_PREFIX),
        "Got error text: {}",
        generated.content
    );
    let saved = generated.saved_path.expect("should be saved");
    assert!(saved.ends_with("lesson_Binary_Search.md"));
}
