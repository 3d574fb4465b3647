//! read_file tool - return a file's contents as a string

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncReadExt;

use super::{PAYLOAD_LIMIT, Tool, ToolError};

pub struct ReadFileTool;

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &'static str {
        "read_file"
    }

    fn description(&self) -> &'static str {
        "Read the contents of a file at the given relative path."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path to the file"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, args: Value) -> Result<String, ToolError> {
        let path = args["path"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("path must be a string".to_string()))?;

        if path.contains("..") {
            return Err(ToolError::Traversal { path: path.to_string() });
        }

        let mut file = tokio::fs::File::open(path).await.map_err(|e| ToolError::Io {
            op: "open",
            path: path.to_string(),
            source: e,
        })?;

        let size = file
            .metadata()
            .await
            .map_err(|e| ToolError::Io {
                op: "stat",
                path: path.to_string(),
                source: e,
            })?
            .len();

        if size > PAYLOAD_LIMIT as u64 {
            return Err(ToolError::TooLarge {
                what: "file",
                limit: PAYLOAD_LIMIT,
            });
        }

        let mut content = Vec::with_capacity(size as usize);
        file.read_to_end(&mut content).await.map_err(|e| ToolError::Io {
            op: "read",
            path: path.to_string(),
            source: e,
        })?;

        Ok(String::from_utf8_lossy(&content).into_owned())
    }
}
