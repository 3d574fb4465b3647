//! Tool registry - maps tool names to implementations

use std::collections::HashMap;

use serde_json::Value;

use super::{ReadFileTool, ShellTool, Tool, WriteFileTool, descriptor_for};
use crate::llm::ToolDescriptor;

/// Fixed mapping from tool name to implementation, populated before the
/// loop starts
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a registry with the standard tools
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ReadFileTool));
        registry.register(Box::new(WriteFileTool));
        registry.register(Box::new(ShellTool));
        registry
    }

    /// Create an empty registry
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool under its own name
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Wire descriptors for every registered tool
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.values().map(|tool| descriptor_for(tool.as_ref())).collect()
    }

    /// Run one tool call and render the outcome as result content
    ///
    /// Tool failures are data here: an unknown name yields the fixed
    /// `ERROR: TOOL NOT FOUND` string and execution errors are rendered
    /// as `ERROR: ...`, so the conversation always gets an answer.
    pub async fn dispatch(&self, name: &str, args: Value) -> String {
        let Some(tool) = self.tools.get(name) else {
            return "ERROR: TOOL NOT FOUND".to_string();
        };

        match tool.execute(args).await {
            Ok(content) => content,
            Err(e) => format!("ERROR: {e}"),
        }
    }

    /// Check whether a tool is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Names of all registered tools
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
