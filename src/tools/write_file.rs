//! write_file tool - write content to a relative path

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use super::{PAYLOAD_LIMIT, Tool, ToolError};

pub struct WriteFileTool;

#[async_trait]
impl Tool for WriteFileTool {
    fn name(&self) -> &'static str {
        "write_file"
    }

    fn description(&self) -> &'static str {
        "Write content to a file at the given relative path, replacing any existing content."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path to the file"
                },
                "content": {
                    "type": "string",
                    "description": "Content to write"
                }
            },
            "required": ["path", "content"]
        })
    }

    async fn execute(&self, args: Value) -> Result<String, ToolError> {
        let path = args["path"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("path must be a string".to_string()))?;
        let content = args["content"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("content must be a string".to_string()))?;

        if path.is_empty() {
            return Err(ToolError::InvalidArguments("path is empty".to_string()));
        }
        if path.contains("..") {
            return Err(ToolError::Traversal { path: path.to_string() });
        }
        // Relative paths only: no root marker, no drive separator
        if path.starts_with('/') {
            return Err(ToolError::InvalidArguments("absolute paths are not allowed".to_string()));
        }
        if path.contains(':') {
            return Err(ToolError::InvalidArguments("drive separators are not allowed".to_string()));
        }

        if content.len() > PAYLOAD_LIMIT {
            return Err(ToolError::TooLarge {
                what: "content",
                limit: PAYLOAD_LIMIT,
            });
        }

        // Parent directories are not created; opening under a missing
        // directory surfaces as an open failure
        let mut file = tokio::fs::File::create(path).await.map_err(|e| ToolError::Io {
            op: "open",
            path: path.to_string(),
            source: e,
        })?;

        file.write_all(content.as_bytes()).await.map_err(|e| ToolError::Io {
            op: "write",
            path: path.to_string(),
            source: e,
        })?;
        file.flush().await.map_err(|e| ToolError::Io {
            op: "write",
            path: path.to_string(),
            source: e,
        })?;

        Ok(format!("Wrote {} bytes to {}", content.len(), path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // The success path needs a relative target, so this single test owns
    // the process working directory; every other test in the crate uses
    // absolute paths or directory-independent commands.
    #[tokio::test]
    async fn test_write_file_success_and_truncation() {
        let dir = tempdir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let tool = WriteFileTool;
        let result = tool
            .execute(serde_json::json!({"path": "out.txt", "content": "Hello, World!"}))
            .await
            .unwrap();
        assert_eq!(result, "Wrote 13 bytes to out.txt");
        assert_eq!(
            std::fs::read_to_string(dir.path().join("out.txt")).unwrap(),
            "Hello, World!"
        );

        // Rewriting truncates the previous content
        let result = tool
            .execute(serde_json::json!({"path": "out.txt", "content": "hi"}))
            .await
            .unwrap();
        assert_eq!(result, "Wrote 2 bytes to out.txt");
        assert_eq!(std::fs::read_to_string(dir.path().join("out.txt")).unwrap(), "hi");

        // Empty content is a valid write
        let result = tool
            .execute(serde_json::json!({"path": "empty.txt", "content": ""}))
            .await
            .unwrap();
        assert_eq!(result, "Wrote 0 bytes to empty.txt");

        // Missing parent directories are not created
        let result = tool
            .execute(serde_json::json!({"path": "missing/nested.txt", "content": "x"}))
            .await;
        assert!(matches!(result, Err(ToolError::Io { op: "open", .. })));

        std::env::set_current_dir(std::env::temp_dir()).unwrap();
    }

    #[tokio::test]
    async fn test_write_file_missing_arguments() {
        let tool = WriteFileTool;

        let result = tool.execute(serde_json::json!({"content": "Hello"})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));

        let result = tool.execute(serde_json::json!({"path": "test.txt"})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));

        let result = tool.execute(serde_json::json!({"path": 1, "content": "x"})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_write_file_rejects_empty_path() {
        let tool = WriteFileTool;
        let result = tool.execute(serde_json::json!({"path": "", "content": "x"})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_write_file_rejects_traversal() {
        let tool = WriteFileTool;
        let result = tool
            .execute(serde_json::json!({"path": "../escape.txt", "content": "x"}))
            .await;
        assert!(matches!(result, Err(ToolError::Traversal { .. })));
    }

    #[tokio::test]
    async fn test_write_file_rejects_absolute_and_drive_paths() {
        let tool = WriteFileTool;

        let result = tool
            .execute(serde_json::json!({"path": "/etc/hosts", "content": "x"}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));

        let result = tool
            .execute(serde_json::json!({"path": "C:evil.txt", "content": "x"}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_write_file_rejects_oversize_content() {
        let tool = WriteFileTool;
        let content = "a".repeat(PAYLOAD_LIMIT + 1);
        let result = tool
            .execute(serde_json::json!({"path": "big.txt", "content": content}))
            .await;
        assert!(matches!(result, Err(ToolError::TooLarge { what: "content", .. })));
    }
}
