//! Wire types for OpenAI-compatible chat completions
//!
//! This module defines the message types exchanged with the completion
//! service. Messages round-trip: an assistant message parsed out of a
//! response is appended to the conversation and re-serialized verbatim
//! into the next request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role in a conversation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    /// Default so a response message lacking a role normalizes to assistant
    #[default]
    Assistant,
    Tool,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Create a tool-result message answering the given call id
    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    /// Check whether the message requests at least one tool call
    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls.as_ref().is_some_and(|calls| !calls.is_empty())
    }
}

/// A tool call requested by the completion service
///
/// Wire shape: `{"id": "...", "type": "function", "function": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub kind: String,
    pub function: FunctionCall,
}

impl ToolCall {
    /// Create a function call, the only kind the service emits
    pub fn function(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: function_type(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// Name and raw argument payload of a tool call
///
/// `arguments` is a string of JSON rather than a JSON object; the service
/// encodes it that way and the agent parses it before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

fn function_type() -> String {
    "function".to_string()
}

/// Static descriptor advertising one tool to the completion service
///
/// Wire shape: `{"type": "function", "function": {name, description,
/// parameters}}`. Built once from the registry and sent with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionSpec,
}

/// The function half of a tool descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDescriptor {
    /// Create a function descriptor with a JSON Schema parameter object
    pub fn function(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            kind: function_type(),
            function: FunctionSpec {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}
