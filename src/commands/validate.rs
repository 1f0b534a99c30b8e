//! Validate agent frontmatter

use colored::*;
use eyre::Result;

use crate::agent::loader::{agent_files, find_agent_file};
use crate::agent::parser::parse_agent_md;
use crate::config::Config;

pub fn run(name: &str, config: &Config) -> Result<()> {
    let agents_dir = Config::expand_path(&config.paths.agents);

    let targets = if name == "all" {
        let files = agent_files(&agents_dir)?;
        if files.is_empty() {
            println!("{} No agent files found in {}", "⚠".yellow(), agents_dir.display());
            return Ok(());
        }
        files
    } else {
        match find_agent_file(&agents_dir, name)? {
            Some(path) => vec![path],
            None => eyre::bail!("Agent '{}' not found in {}", name, agents_dir.display()),
        }
    };

    let mut invalid = 0;

    for path in &targets {
        match parse_agent_md(path) {
            Ok(metadata) => {
                println!("{} {}", "✓".green(), path.display());
                if metadata.description.is_empty() {
                    println!("  {} description is empty", "⚠".yellow());
                }
            }
            Err(e) => {
                println!("{} {}", "✗".red(), path.display());
                println!("  {:#}", e);
                invalid += 1;
            }
        }
    }

    println!();
    if invalid == 0 {
        println!("{} {} agent file(s) valid", "✓".green().bold(), targets.len());
        Ok(())
    } else {
        eyre::bail!("{} of {} agent file(s) invalid", invalid, targets.len());
    }
}
