//! Diagnose agentsync setup issues

use colored::*;
use eyre::Result;

use crate::agent::loader::agent_files;
use crate::config::Config;
use crate::profile::{default_profile_root, discover_profiles};

pub fn run(config: &Config) -> Result<()> {
    println!("{}", "agentsync doctor".bold());
    println!("{}", "═".repeat(50));
    println!();

    let mut issues = 0;

    // Check agents directory
    let agents_dir = Config::expand_path(&config.paths.agents);
    if agents_dir.exists() {
        let count = agent_files(&agents_dir).map(|f| f.len()).unwrap_or(0);
        println!(
            "{} Agents directory: {} ({} agent files)",
            "✓".green(),
            agents_dir.display(),
            count
        );
        if count == 0 {
            println!("  {} No *.agent.md files found", "⚠".yellow());
        }
    } else {
        println!("{} Agents directory missing: {}", "✗".red(), agents_dir.display());
        issues += 1;
    }

    // Check profile root
    let profile_root = config
        .paths
        .profile_root
        .as_ref()
        .map(|p| Config::expand_path(p))
        .or_else(default_profile_root);

    match profile_root {
        Some(root) if root.exists() => match discover_profiles(&root) {
            Ok(profiles) => {
                println!(
                    "{} Profile root: {} ({} profiles)",
                    "✓".green(),
                    root.display(),
                    profiles.len()
                );
            }
            Err(e) => {
                println!("{} Profile root unreadable: {}", "✗".red(), e);
                issues += 1;
            }
        },
        Some(root) => {
            println!("{} Profile root missing: {}", "✗".red(), root.display());
            println!("  Nothing to sync into until the editor creates it");
            issues += 1;
        }
        None => {
            println!("{} Could not determine profile root for this platform", "✗".red());
            println!("  Set {} in the config file", "paths.profile_root".cyan());
            issues += 1;
        }
    }

    // Check config file
    if let Some(config_dir) = dirs::config_dir() {
        let config_file = config_dir.join("agentsync").join("agentsync.yaml");
        if config_file.exists() {
            println!("{} Config file: {}", "✓".green(), config_file.display());
        } else {
            println!("{} No config file (defaults in effect): {}", "⚠".yellow(), config_file.display());
        }
    }

    println!();

    // Check host editor
    println!("{}", "Editor:".bold());
    match which::which("code") {
        Ok(path) => println!("  {} code ({})", "✓".green(), path.display().to_string().dimmed()),
        Err(_) => println!("  {} code not on PATH (profiles may live elsewhere)", "⚠".yellow()),
    }

    println!();

    // Summary
    println!("{}", "═".repeat(50));
    if issues == 0 {
        println!("{} All checks passed!", "✓".green().bold());
    } else {
        println!("{} {} issue(s) found", "⚠".yellow().bold(), issues);
    }

    Ok(())
}
