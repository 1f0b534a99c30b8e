//! List agent definitions

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::agent::loader::discover_agents;
use crate::cli::OutputFormat;
use crate::config::Config;

pub fn run(format: OutputFormat, config: &Config) -> Result<()> {
    let agents_dir = Config::expand_path(&config.paths.agents);
    let agents = discover_agents(&agents_dir)?;

    #[derive(Serialize)]
    struct AgentSummary {
        name: String,
        description: String,
        tools: Vec<String>,
        model: Option<String>,
    }

    let summaries: Vec<AgentSummary> = agents
        .iter()
        .map(|a| AgentSummary {
            name: a.name.clone(),
            description: a.description.clone(),
            tools: a.tools.clone(),
            model: a.model.clone(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&summaries)?),
        OutputFormat::Text => {
            println!("{}", "Available Agents:".bold());
            println!();

            if agents.is_empty() {
                println!("  {} No agents found in {}", "(none)".dimmed(), agents_dir.display());
                println!();
                println!(
                    "  Add {} files under {} to get started",
                    "*.agent.md".cyan(),
                    agents_dir.display()
                );
            } else {
                for agent in &agents {
                    println!("  {} {}", "●".green(), agent.name.bold());
                    println!("    {}", agent.description.dimmed());
                    if !agent.tools.is_empty() {
                        println!("    Tools: {}", agent.tools.join(", ").cyan());
                    }
                    if let Some(ref model) = agent.model {
                        println!("    Model: {}", model.magenta());
                    }
                    println!();
                }
            }
        }
    }

    Ok(())
}
