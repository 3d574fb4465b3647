//! orca - a tool-calling agent for OpenRouter-compatible completion services
//!
//! orca drives a single task prompt through an agent loop: the full
//! conversation goes to the completion service, requested tool calls
//! (read_file, write_file, bash) run locally one at a time, and their
//! results feed back in until the service answers in plain text or the
//! iteration budget runs out. Tool failures are conversation data, not
//! program errors; only transport and protocol failures abort a run.
//!
//! Known gaps, kept deliberately: neither completion requests nor spawned
//! commands carry a timeout, so a stalled service or a hanging command
//! stalls the run. Path and command screening is substring-based and is
//! not a security boundary.

pub mod agent;
pub mod error;
pub mod history;
pub mod llm;
pub mod tools;

pub use error::{OrcaError, Result};
