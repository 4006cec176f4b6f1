/// LLM Gateway: the single boundary to the external model.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Generation code talks to `dyn LlmGateway`; `LlmClient` is the production backend.
///
/// Calls are single-shot. A transport or API failure is returned to the caller as-is;
/// nothing here retries.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// True when the call went through but the model gave nothing usable.
    /// Transport and API failures return false.
    pub fn is_unusable_output(&self) -> bool {
        matches!(self, LlmError::Parse(_) | LlmError::EmptyContent)
    }
}

/// One prompt sent through the gateway.
#[derive(Debug, Clone)]
pub struct PromptRequest<'a> {
    /// Template name, used for logging and by test doubles.
    pub template: &'a str,
    pub system: &'a str,
    pub prompt: String,
}

/// Schema-in / text-out boundary to the LLM.
///
/// `Ok(None)` means the model answered with no text at all.
/// Carried in `AppState` as `Arc<dyn LlmGateway>`.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(&self, request: &PromptRequest<'_>) -> Result<Option<String>, LlmError>;
}

/// Calls the gateway and deserializes the text response as JSON.
/// The prompt must instruct the model to return valid JSON.
pub async fn call_json<T: DeserializeOwned>(
    gateway: &dyn LlmGateway,
    request: &PromptRequest<'_>,
) -> Result<T, LlmError> {
    let text = gateway
        .complete(request)
        .await?
        .filter(|t| !t.trim().is_empty())
        .ok_or(LlmError::EmptyContent)?;

    // Strip markdown code fences if the model wraps JSON in them
    let text = strip_json_fences(&text);

    serde_json::from_str(text).map_err(LlmError::Parse)
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic Messages API backend.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build HTTP client")?,
            api_key,
        })
    }

    /// Makes a raw call to the Messages API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl LlmGateway for LlmClient {
    async fn complete(&self, request: &PromptRequest<'_>) -> Result<Option<String>, LlmError> {
        debug!("Sending prompt '{}' to {}", request.template, MODEL);
        let system = format!("{} {}", request.system, prompts::JSON_ONLY_SYSTEM);
        let response = self.call(&request.prompt, &system).await?;
        Ok(response.text().map(str::to_string))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Option<&'static str>);

    #[async_trait]
    impl LlmGateway for Canned {
        async fn complete(&self, _request: &PromptRequest<'_>) -> Result<Option<String>, LlmError> {
            Ok(self.0.map(str::to_string))
        }
    }

    #[derive(Debug, Deserialize)]
    struct Reply {
        key: String,
    }

    fn request() -> PromptRequest<'static> {
        PromptRequest {
            template: "test",
            system: "",
            prompt: "say hi".to_string(),
        }
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[tokio::test]
    async fn test_call_json_parses_fenced_reply() {
        let gateway = Canned(Some("```json\n{\"key\": \"value\"}\n```"));
        let reply: Reply = call_json(&gateway, &request()).await.unwrap();
        assert_eq!(reply.key, "value");
    }

    #[tokio::test]
    async fn test_call_json_missing_or_blank_text_is_empty_content() {
        for text in [None, Some("  \n")] {
            let err = call_json::<Reply>(&Canned(text), &request()).await.unwrap_err();
            assert!(matches!(err, LlmError::EmptyContent));
            assert!(err.is_unusable_output());
        }
    }

    #[tokio::test]
    async fn test_call_json_malformed_reply_is_unusable() {
        let err = call_json::<Reply>(&Canned(Some("Sure! Here you go")), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
        assert!(err.is_unusable_output());
    }

    #[test]
    fn test_api_error_is_not_unusable_output() {
        let err = LlmError::Api {
            status: 529,
            message: "overloaded".to_string(),
        };
        assert!(!err.is_unusable_output());
    }

    #[test]
    fn test_response_text_picks_first_text_block() {
        let response: LlmResponse = serde_json::from_value(serde_json::json!({
            "content": [
                {"type": "tool_use"},
                {"type": "text", "text": "hello"}
            ],
            "usage": {"input_tokens": 3, "output_tokens": 1}
        }))
        .unwrap();
        assert_eq!(response.text(), Some("hello"));
    }
}
