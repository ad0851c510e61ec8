//! Generation client: one prompt in, generated text (or an error string) out.

use std::env;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::provider::{GenerationRequest, LlmProvider, Message};
use super::providers::AnthropicProvider;
use crate::config::{GeneratorConfig, DEFAULT_API_BASE, DEFAULT_API_KEY_ENV};
use crate::error::LlmError;

/// Returned when no API key is available or the client cannot be built.
pub const CLIENT_INIT_ERROR: &str = "Error: Could not initialize Anthropic client.";

/// Prefix of the text returned when a request fails.
pub const GENERATION_ERROR_PREFIX: &str = "Error generating content: ";

/// Resolves the API key: the explicit value, else the named environment
/// variable, else that variable in a `.env` file found from the working
/// directory upwards. Empty values count as unset.
pub fn resolve_api_key(explicit: Option<&str>, env_var: &str) -> Option<String> {
    explicit
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| env::var(env_var).ok().filter(|key| !key.is_empty()))
        .or_else(|| {
            dotenvy::dotenv_iter()
                .ok()
                .and_then(|entries| find_env_entry(entries, env_var))
        })
}

/// Reads `name` from a dotenv-format file. Missing files and empty values yield `None`.
pub fn key_from_env_file(path: impl AsRef<Path>, name: &str) -> Option<String> {
    dotenvy::from_path_iter(path.as_ref())
        .ok()
        .and_then(|entries| find_env_entry(entries, name))
}

fn find_env_entry<I>(entries: I, name: &str) -> Option<String>
where
    I: Iterator<Item = dotenvy::Result<(String, String)>>,
{
    entries
        .filter_map(Result::ok)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Masks an API key for logging: first 8 and last 4 characters.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() < 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Sends `prompt` as the only user message and returns the first text block.
///
/// Failures are converted to `"Error generating content: {detail}"`.
pub async fn complete(
    provider: &dyn LlmProvider,
    prompt: &str,
    model: &str,
    max_tokens: u32,
) -> String {
    let request =
        GenerationRequest::new(model, vec![Message::user(prompt)]).with_max_tokens(max_tokens);

    let result = provider.generate(request).await.and_then(|response| {
        info!(
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
            "Generation complete"
        );
        response
            .first_text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyResponse)
    });

    match result {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, model, "Content generation failed");
            format!("{GENERATION_ERROR_PREFIX}{e}")
        }
    }
}

/// Generates content against the public API.
///
/// The key is `api_key` when given, else `ANTHROPIC_API_KEY`. Never fails:
/// every problem is reported in the returned text.
pub async fn generate_content(
    prompt: &str,
    model: &str,
    max_tokens: u32,
    api_key: Option<&str>,
) -> String {
    GenerationClient::new(model, max_tokens)
        .with_api_key(api_key.map(str::to_string))
        .generate(prompt)
        .await
}

/// Generation settings bound to a model, token budget and key source.
#[derive(Clone)]
pub struct GenerationClient {
    model: String,
    max_tokens: u32,
    api_key: Option<String>,
    api_key_env: String,
    api_base: String,
    provider: Option<Arc<dyn LlmProvider>>,
}

impl GenerationClient {
    /// Creates a client for the public API using `ANTHROPIC_API_KEY`.
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            provider: None,
        }
    }

    /// Creates a client from the generator configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            api_key: config.api_key.clone(),
            api_key_env: config.api_key_env.clone(),
            api_base: config.api_base.clone(),
            provider: None,
        }
    }

    /// Sets (or clears) the explicit API key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Sets the environment variable consulted for the key.
    pub fn with_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }

    /// Sets the API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Uses a fixed provider instead of building one per call from the key.
    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Output token budget.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Generates text for `prompt`, returning an error string on any failure.
    pub async fn generate(&self, prompt: &str) -> String {
        if let Some(provider) = &self.provider {
            return complete(provider.as_ref(), prompt, &self.model, self.max_tokens).await;
        }

        let provider = match self.build_provider() {
            Ok(provider) => provider,
            Err(e) => {
                warn!(error = %e, "Could not initialize Anthropic client");
                return CLIENT_INIT_ERROR.to_string();
            }
        };

        complete(&provider, prompt, &self.model, self.max_tokens).await
    }

    fn build_provider(&self) -> Result<AnthropicProvider, LlmError> {
        let key = resolve_api_key(self.api_key.as_deref(), &self.api_key_env)
            .ok_or_else(|| LlmError::MissingApiKey(self.api_key_env.clone()))?;
        info!(api_key = %mask_api_key(&key), "Using API key");

        Ok(AnthropicProvider::with_base_url(key, self.api_base.clone())?
            .with_default_model(self.model.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::providers::anthropic::tests::serve_once;
    use crate::llm::{ContentBlock, GenerationResponse, Usage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    const UNSET_ENV: &str = "CONTENT_FORGE_TEST_KEY_THAT_IS_NEVER_SET";

    struct ScriptedProvider {
        reply: Result<Vec<ContentBlock>, fn() -> LlmError>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, LlmError> {
            self.seen.lock().expect("lock").push(request);
            match &self.reply {
                Ok(content) => Ok(GenerationResponse {
                    id: "msg_test".to_string(),
                    model: "claude-test".to_string(),
                    content: content.clone(),
                    stop_reason: Some("end_turn".to_string()),
                    usage: Usage::default(),
                }),
                Err(make) => Err(make()),
            }
        }
    }

    #[test]
    fn test_resolve_api_key() {
        assert_eq!(resolve_api_key(Some("sk-explicit"), UNSET_ENV).as_deref(), Some("sk-explicit"));
        assert_eq!(resolve_api_key(Some(""), UNSET_ENV), None);
        assert_eq!(resolve_api_key(None, UNSET_ENV), None);
    }

    #[test]
    fn test_key_from_env_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# local settings\nOTHER=1\nANTHROPIC_API_KEY=\"sk-ant-from-dotenv\"\nEMPTY_KEY=\n",
        )
        .expect("write .env");

        assert_eq!(
            key_from_env_file(&path, "ANTHROPIC_API_KEY").as_deref(),
            Some("sk-ant-from-dotenv")
        );
        assert_eq!(key_from_env_file(&path, "EMPTY_KEY"), None);
        assert_eq!(key_from_env_file(&path, UNSET_ENV), None);
        assert_eq!(key_from_env_file(dir.path().join("missing.env"), "ANTHROPIC_API_KEY"), None);
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("sk-ant-api03-abcdefWXYZ"), "sk-ant-a...WXYZ");
        assert_eq!(mask_api_key("short"), "*****");
    }

    #[tokio::test]
    async fn test_complete_returns_first_text() {
        let provider = ScriptedProvider {
            reply: Ok(vec![ContentBlock::text("# Generated"), ContentBlock::text("second")]),
            seen: Mutex::new(Vec::new()),
        };

        let text = complete(&provider, "the prompt", "claude-3-sonnet-20240229", 4000).await;
        assert_eq!(text, "# Generated");

        let seen = provider.seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].messages, vec![Message::user("the prompt")]);
        assert_eq!(seen[0].model, "claude-3-sonnet-20240229");
        assert_eq!(seen[0].max_tokens, Some(4000));
    }

    #[tokio::test]
    async fn test_complete_converts_errors() {
        let failing = ScriptedProvider {
            reply: Err(|| LlmError::RequestFailed("connection refused".to_string())),
            seen: Mutex::new(Vec::new()),
        };
        assert_eq!(
            complete(&failing, "p", "m", 10).await,
            "Error generating content: HTTP request failed: connection refused"
        );

        let empty = ScriptedProvider {
            reply: Ok(Vec::new()),
            seen: Mutex::new(Vec::new()),
        };
        assert_eq!(
            complete(&empty, "p", "m", 10).await,
            "Error generating content: LLM response contained no text content"
        );
    }

    #[tokio::test]
    async fn test_generate_without_key_reports_init_error() {
        let client = GenerationClient::new("claude-3-sonnet-20240229", 4000).with_api_key_env(UNSET_ENV);
        assert_eq!(client.generate("prompt").await, CLIENT_INIT_ERROR);
    }

    #[tokio::test]
    async fn test_generate_uses_injected_provider() {
        let provider = Arc::new(ScriptedProvider {
            reply: Ok(vec![ContentBlock::text("injected")]),
            seen: Mutex::new(Vec::new()),
        });
        let client = GenerationClient::new("claude-3-haiku-20240307", 128)
            .with_api_key_env(UNSET_ENV)
            .with_provider(provider.clone());

        assert_eq!(client.generate("prompt").await, "injected");
        assert_eq!(provider.seen.lock().expect("lock")[0].model, "claude-3-haiku-20240307");
    }

    #[tokio::test]
    async fn test_generate_against_local_server() {
        let body = r#"{"id":"msg_1","model":"claude-3-sonnet-20240229","content":[{"type":"text","text":"hello"}],
            "stop_reason":"end_turn","usage":{"input_tokens":3,"output_tokens":1}}"#;
        let (base_url, server) = serve_once("200 OK", body).await;

        let client = GenerationClient::new("claude-3-sonnet-20240229", 50)
            .with_api_key(Some("sk-ant-local-test-key".to_string()))
            .with_api_base(base_url);

        assert_eq!(client.generate("say hello").await, "hello");
        let raw = server.await.expect("server task");
        assert!(raw.contains("say hello"));
    }

    #[tokio::test]
    async fn test_generate_connection_failure_is_error_text() {
        let client = GenerationClient::new("m", 10)
            .with_api_key(Some("sk-ant-unreachable".to_string()))
            .with_api_base("http://localhost:65535/v1");

        let text = client.generate("p").await;
        assert!(text.starts_with("Error generating content: HTTP request failed:"), "{text}");
    }
}
