//! CLI surface using clap.

use clap::Parser;

use orca::agent::DEFAULT_MAX_ITERATIONS;

use crate::config::DEFAULT_MODEL;

/// orca - a tool-calling agent for OpenRouter-compatible completion services
#[derive(Parser, Debug)]
#[command(name = "orca")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task prompt for the agent
    #[arg(short, long)]
    pub prompt: String,

    /// Model identifier to request
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Completion calls allowed before the run is abandoned
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
