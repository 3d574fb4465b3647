//! Tool system for the agent loop
//!
//! Three built-in tools: read_file, write_file, and bash. Tool failures
//! never abort the loop; the registry renders them into `ERROR: ...`
//! strings that flow back to the completion service as ordinary content.

mod read_file;
mod registry;
mod shell;
mod write_file;

pub use read_file::ReadFileTool;
pub use registry::ToolRegistry;
pub use shell::ShellTool;
pub use write_file::WriteFileTool;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm::ToolDescriptor;

/// Byte cap shared by file reads, write payloads, and captured command
/// output
pub const PAYLOAD_LIMIT: usize = 1_000_000;

/// A tool the completion service may call
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches the function name on the wire)
    fn name(&self) -> &'static str;

    /// Human-readable description sent to the service
    fn description(&self) -> &'static str;

    /// JSON Schema for the argument object
    fn parameters(&self) -> Value;

    /// Run the tool against already-parsed arguments
    async fn execute(&self, args: Value) -> Result<String, ToolError>;
}

/// Build the wire descriptor for a tool
pub fn descriptor_for(tool: &dyn Tool) -> ToolDescriptor {
    ToolDescriptor::function(tool.name(), tool.description(), tool.parameters())
}

/// Errors that can occur during tool execution
///
/// These are recoverable by design: the registry formats them as
/// `ERROR: ...` result strings and the conversation continues.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("path traversal detected in {path:?}")]
    Traversal { path: String },

    #[error("{what} exceeds {limit} byte limit")]
    TooLarge { what: &'static str, limit: usize },

    #[error("command not allowed: {0}")]
    Forbidden(String),

    #[error("failed to {op} {path:?}: {source}")]
    Io {
        op: &'static str,
        path: String,
        source: std::io::Error,
    },
}
