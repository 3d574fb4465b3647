//! OpenRouter-compatible completion client
//!
//! This module implements the CompletionClient trait against any service
//! exposing the OpenAI `/chat/completions` endpoint, OpenRouter included.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{OrcaError, Result};
use crate::llm::types::{ChatMessage, ToolDescriptor};

/// Stateless completion client; the caller owns the conversation
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the full conversation and tool descriptors, returning the
    /// assistant message from the first choice
    async fn complete(&self, messages: &[ChatMessage], tools: &[ToolDescriptor]) -> Result<ChatMessage>;
}

/// Client for an OpenRouter-compatible completions endpoint
///
/// Requests carry no client-side timeout; a stalled service stalls the
/// agent with it.
pub struct OpenRouterClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Top-level response body from `/chat/completions`
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

impl OpenRouterClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request body for the completions endpoint
    fn build_request(&self, messages: &[ChatMessage], tools: &[ToolDescriptor]) -> Value {
        json!({
            "model": self.model,
            "messages": messages,
            "tools": tools,
            "tool_choice": "auto"
        })
    }

    /// Extract the assistant message from the first choice
    fn parse_response(&self, body: Value) -> Result<ChatMessage> {
        let completion: ChatCompletion = serde_json::from_value(body)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| OrcaError::Protocol("completion response contained no choices".to_string()))
    }

    /// Send a request body to the completions endpoint
    async fn send_request(&self, body: Value) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OrcaError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| OrcaError::Protocol(format!("response body was not valid JSON: {e}")))
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, messages: &[ChatMessage], tools: &[ToolDescriptor]) -> Result<ChatMessage> {
        let body = self.build_request(messages, tools);
        let response = self.send_request(body).await?;
        self.parse_response(response)
    }
}

impl std::fmt::Debug for OpenRouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::Role;

    fn test_client() -> OpenRouterClient {
        OpenRouterClient::new("https://openrouter.ai/api/v1", "test-key", "anthropic/claude-haiku-4.5").unwrap()
    }

    #[test]
    fn test_new_client() {
        let client = test_client();
        assert_eq!(client.model(), "anthropic/claude-haiku-4.5");
    }

    #[test]
    fn test_build_request_shape() {
        let client = test_client();
        let messages = vec![ChatMessage::user("List the files")];
        let tools = vec![ToolDescriptor::function(
            "read_file",
            "Read a file",
            json!({ "type": "object", "properties": {}, "required": [] }),
        )];

        let body = client.build_request(&messages, &tools);

        assert_eq!(body["model"], "anthropic/claude-haiku-4.5");
        assert_eq!(body["tool_choice"], "auto");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "List the files");
        assert_eq!(body["tools"][0]["type"], "function");
        assert_eq!(body["tools"][0]["function"]["name"], "read_file");
    }

    #[test]
    fn test_build_request_serializes_tool_results() {
        let client = test_client();
        let messages = vec![ChatMessage::tool("call_1", "EXIT_CODE: 0\nOUTPUT:\nok")];

        let body = client.build_request(&messages, &[]);

        assert_eq!(body["messages"][0]["role"], "tool");
        assert_eq!(body["messages"][0]["tool_call_id"], "call_1");
    }

    #[test]
    fn test_parse_response_content_only() {
        let client = test_client();
        let body = json!({
            "id": "gen-123",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "All done." },
                "finish_reason": "stop"
            }]
        });

        let message = client.parse_response(body).unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content.as_deref(), Some("All done."));
        assert!(!message.has_tool_calls());
    }

    #[test]
    fn test_parse_response_with_tool_calls() {
        let client = test_client();
        let body = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "bash",
                            "arguments": "{\"command\": \"ls -la\"}"
                        }
                    }]
                }
            }]
        });

        let message = client.parse_response(body).unwrap();
        assert!(message.has_tool_calls());
        let calls = message.tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].id, "call_abc");
        assert_eq!(calls[0].function.name, "bash");
        assert_eq!(calls[0].function.arguments, "{\"command\": \"ls -la\"}");
    }

    #[test]
    fn test_parse_response_missing_role() {
        let client = test_client();
        let body = json!({
            "choices": [{
                "message": { "content": "No role on this one" }
            }]
        });

        let message = client.parse_response(body).unwrap();
        assert_eq!(message.role, Role::Assistant);
    }

    #[test]
    fn test_parse_response_no_choices() {
        let client = test_client();
        let result = client.parse_response(json!({ "choices": [] }));
        assert!(matches!(result, Err(OrcaError::Protocol(_))));

        let result = client.parse_response(json!({ "id": "gen-1" }));
        assert!(matches!(result, Err(OrcaError::Protocol(_))));
    }

    #[test]
    fn test_parse_response_malformed_choice() {
        let client = test_client();
        let result = client.parse_response(json!({ "choices": [{ "message": 42 }] }));
        assert!(matches!(result, Err(OrcaError::Json(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = test_client();
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("OpenRouterClient"));
        assert!(!debug_str.contains("test-key"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenRouterClient>();
    }
}
