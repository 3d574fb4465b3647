//! bash tool - run a shell command and capture its output
//!
//! No timeout is enforced; a command that never exits stalls the agent
//! with it. Standard error is inherited rather than captured, so tool
//! output carries stdout only.

use async_trait::async_trait;
use serde_json::Value;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use super::{PAYLOAD_LIMIT, Tool, ToolError};

/// Substrings that disqualify a command outright
const DENYLIST: [&str; 2] = ["sudo", "rm -rf /"];

pub struct ShellTool;

#[async_trait]
impl Tool for ShellTool {
    fn name(&self) -> &'static str {
        "bash"
    }

    fn description(&self) -> &'static str {
        "Execute a shell command and return its exit code and output."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "The shell command to execute"
                }
            },
            "required": ["command"]
        })
    }

    async fn execute(&self, args: Value) -> Result<String, ToolError> {
        let command = args["command"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("command must be a string".to_string()))?;

        if command.is_empty() {
            return Err(ToolError::InvalidArguments("command is empty".to_string()));
        }
        if DENYLIST.iter().any(|banned| command.contains(banned)) {
            return Err(ToolError::Forbidden(command.to_string()));
        }

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ToolError::Io {
                op: "spawn",
                path: command.to_string(),
                source: e,
            })?;

        let Some(mut stdout) = child.stdout.take() else {
            return Err(ToolError::Io {
                op: "capture output of",
                path: command.to_string(),
                source: std::io::Error::other("stdout was not piped"),
            });
        };

        let mut output = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stdout.read(&mut chunk).await.map_err(|e| ToolError::Io {
                op: "read output of",
                path: command.to_string(),
                source: e,
            })?;
            if n == 0 {
                break;
            }
            output.extend_from_slice(&chunk[..n]);

            if output.len() > PAYLOAD_LIMIT {
                // Stop capturing and reap the child instead of waiting
                // for it to finish on its own
                let _ = child.kill().await;
                return Err(ToolError::TooLarge {
                    what: "command output",
                    limit: PAYLOAD_LIMIT,
                });
            }
        }

        let status = child.wait().await.map_err(|e| ToolError::Io {
            op: "wait for",
            path: command.to_string(),
            source: e,
        })?;

        Ok(format!(
            "EXIT_CODE: {}\nOUTPUT:\n{}",
            status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output)
        ))
    }
}
