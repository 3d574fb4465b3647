//! Runtime configuration resolved from CLI flags and the environment.

use orca::error::{OrcaError, Result};

use crate::cli::Cli;

/// Model requested when -m is not given
pub const DEFAULT_MODEL: &str = "anthropic/claude-haiku-4.5";

/// Completion endpoint used when OPENROUTER_BASE_URL is not set
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Everything the agent needs for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub max_iterations: usize,
}

impl Config {
    /// Resolve configuration from parsed flags and process environment
    ///
    /// Fails when the prompt is empty or OPENROUTER_API_KEY is absent or
    /// empty.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::build(
            cli,
            std::env::var("OPENROUTER_API_KEY").ok(),
            std::env::var("OPENROUTER_BASE_URL").ok(),
        )
    }

    fn build(cli: &Cli, api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        if cli.prompt.is_empty() {
            return Err(OrcaError::Config("prompt must not be empty".to_string()));
        }

        let api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(OrcaError::Config("OPENROUTER_API_KEY is not set".to_string()));
            }
        };

        let base_url = base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            prompt: cli.prompt.clone(),
            model: cli.model.clone(),
            api_key,
            base_url,
            max_iterations: cli.max_iterations,
        })
    }
}
