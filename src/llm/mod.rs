//! Completion service layer
//!
//! This module provides:
//! - Wire types for OpenAI-compatible chat completions
//! - CompletionClient trait for service abstraction
//! - OpenRouterClient implementation

pub mod client;
pub mod types;

pub use client::{CompletionClient, OpenRouterClient};
pub use types::{ChatMessage, FunctionCall, FunctionSpec, Role, ToolCall, ToolDescriptor};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _role = Role::Assistant;
        let msg = ChatMessage::user("hello");
        assert!(!msg.has_tool_calls());
    }
}
