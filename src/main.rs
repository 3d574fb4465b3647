use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

mod cli;
mod config;

use orca::agent::{Agent, AgentConfig, RunOutcome};
use orca::llm::OpenRouterClient;
use orca::tools::ToolRegistry;

use cli::Cli;
use config::Config;

fn setup_logging(verbose: bool) {
    // RUST_LOG wins when set; otherwise -v raises the default to debug
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Flag errors exit 1; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            if e.use_stderr() {
                std::process::exit(1);
            }
            return Ok(());
        }
    };

    setup_logging(cli.is_verbose());

    let config = Config::resolve(&cli).context("Failed to resolve configuration")?;
    info!("using model {} via {}", config.model, config.base_url);

    let client = OpenRouterClient::new(&config.base_url, &config.api_key, &config.model)
        .context("Failed to create completion client")?;
    let mut agent = Agent::with_config(
        client,
        ToolRegistry::standard(),
        AgentConfig {
            max_iterations: config.max_iterations,
            ..Default::default()
        },
    );

    match agent.run(&config.prompt).await? {
        RunOutcome::Completed(answer) => {
            if let Some(answer) = answer {
                println!("{answer}");
            }
        }
        RunOutcome::BudgetExhausted => {
            eprintln!(
                "{}",
                format!(
                    "Stopped after {} iterations without a final answer",
                    config.max_iterations
                )
                .yellow()
            );
        }
    }

    Ok(())
}
