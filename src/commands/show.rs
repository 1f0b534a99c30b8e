//! Show one agent's metadata and prompt body

use colored::*;
use eyre::{Context, Result};
use serde::Serialize;
use std::fs;

use crate::agent::loader::find_agent_file;
use crate::agent::parser::{parse_agent_md, prompt_body};
use crate::cli::OutputFormat;
use crate::config::Config;

pub fn run(name: &str, format: OutputFormat, config: &Config) -> Result<()> {
    let agents_dir = Config::expand_path(&config.paths.agents);

    let Some(path) = find_agent_file(&agents_dir, name)? else {
        eyre::bail!("Agent '{}' not found in {}", name, agents_dir.display());
    };

    let metadata = parse_agent_md(&path)?;
    let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let body = prompt_body(&content);

    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct AgentDetail<'a> {
                name: &'a str,
                description: &'a str,
                tools: &'a [String],
                model: &'a Option<String>,
                path: String,
                prompt: &'a str,
            }

            let detail = AgentDetail {
                name,
                description: &metadata.description,
                tools: &metadata.tools,
                model: &metadata.model,
                path: path.display().to_string(),
                prompt: body,
            };
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&metadata)?),
        OutputFormat::Text => {
            println!("{} {}", "Agent:".bold(), name.green().bold());
            println!();
            println!("{} {}", "Description:".bold(), metadata.description);

            if !metadata.tools.is_empty() {
                println!("{} {}", "Tools:".bold(), metadata.tools.join(", ").cyan());
            }

            if let Some(ref model) = metadata.model {
                println!("{} {}", "Model:".bold(), model.magenta());
            }

            println!("{} {}", "File:".bold(), path.display());
            println!();
            println!("{}", "Prompt:".bold());
            for line in body.lines() {
                println!("  {}", line);
            }
        }
    }

    Ok(())
}
