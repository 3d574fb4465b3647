//! Agent loop - drives the conversation between the completion service
//! and the local tools
//!
//! Each iteration sends the full conversation, appends the assistant's
//! reply, and either stops on a plain answer or executes the requested
//! tool calls and feeds their results back in. The loop is strictly
//! sequential: one outstanding completion call at a time, tool calls
//! executed one after another in request order.

use log::{debug, warn};
use serde_json::Value;

use crate::error::Result;
use crate::history::ConversationHistory;
use crate::llm::{ChatMessage, CompletionClient};
use crate::tools::ToolRegistry;

/// Default number of completion calls before the loop gives up
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Outcome of an agent run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The service answered without requesting tools; the content may be
    /// absent when the reply carried neither text nor tool calls
    Completed(Option<String>),
    /// The iteration budget ran out before a final answer
    BudgetExhausted,
}

/// Tunables for the agent loop
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub max_iterations: usize,
    pub history_capacity: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            history_capacity: crate::history::DEFAULT_CAPACITY,
        }
    }
}

/// Drives one task to completion against a completion service
pub struct Agent<C: CompletionClient> {
    client: C,
    registry: ToolRegistry,
    history: ConversationHistory,
    max_iterations: usize,
}

impl<C: CompletionClient> Agent<C> {
    /// Create an agent with default limits
    pub fn new(client: C, registry: ToolRegistry) -> Self {
        Self::with_config(client, registry, AgentConfig::default())
    }

    /// Create an agent with explicit limits
    pub fn with_config(client: C, registry: ToolRegistry, config: AgentConfig) -> Self {
        Self {
            client,
            registry,
            history: ConversationHistory::with_capacity(config.history_capacity),
            max_iterations: config.max_iterations,
        }
    }

    /// Run the loop for a single task prompt
    ///
    /// Tool failures are absorbed into the conversation as result
    /// strings; only transport and protocol failures propagate as
    /// errors.
    pub async fn run(&mut self, prompt: &str) -> Result<RunOutcome> {
        self.history.push(ChatMessage::user(prompt));
        let tools = self.registry.descriptors();

        for iteration in 1..=self.max_iterations {
            debug!("iteration {}/{}", iteration, self.max_iterations);

            let message = self.client.complete(self.history.messages(), &tools).await?;
            let calls = message.tool_calls.clone().unwrap_or_default();
            self.history.push(message.clone());

            if calls.is_empty() {
                return Ok(RunOutcome::Completed(message.content));
            }

            for call in &calls {
                debug!("tool call {}: {}", call.id, call.function.name);
                let args = parse_arguments(&call.function.arguments);
                let content = self.registry.dispatch(&call.function.name, args).await;
                self.history.push(ChatMessage::tool(call.id.clone(), content));
            }
        }

        warn!("iteration budget of {} exhausted without a final answer", self.max_iterations);
        Ok(RunOutcome::BudgetExhausted)
    }

    /// Conversation accumulated so far
    pub fn history(&self) -> &[ChatMessage] {
        self.history.messages()
    }
}

/// Parse a tool call's raw argument string, substituting an empty object
/// when the service sends garbage so the tool can report the problem
/// itself
fn parse_arguments(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        debug!("unparseable tool arguments ({e}), substituting empty object");
        serde_json::json!({})
    })
}
