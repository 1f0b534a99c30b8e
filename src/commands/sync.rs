//! Sync agents into editor profiles
//!
//! Copies every agent file into `<profile>/prompts/` for each profile under
//! the root, so the host editor picks them up in every profile.

use colored::*;
use eyre::Result;
use std::path::PathBuf;

use crate::agent::loader::agent_files;
use crate::config::Config;
use crate::distributor::distribute;
use crate::profile::default_profile_root;

/// Run the sync command
pub fn run(dry_run: bool, profile_root: Option<PathBuf>, config: &Config) -> Result<()> {
    let profile_root = resolve_profile_root(profile_root, config)?;
    let agents_dir = Config::expand_path(&config.paths.agents);

    let sources = agent_files(&agents_dir)?;
    if sources.is_empty() {
        println!(
            "{} No agent files found in {}",
            "⚠".yellow(),
            agents_dir.display()
        );
    }

    let report = distribute(&profile_root, &sources, &config.sync.subdir, dry_run)?;

    for failure in &report.failures {
        eprintln!("{} Profile '{}': {}", "✗".red(), failure.profile, failure.error);
    }

    println!();
    if dry_run {
        println!("Dry run complete:");
        println!("  Would copy: {} file(s) into {} profile(s)", report.copied, report.profiles);
    } else {
        println!("Sync complete:");
        println!("  Copied: {} file(s) into {} profile(s)", report.copied, report.profiles);
        println!();
        println!("Profile root: {}", profile_root.display());
    }

    if !report.ok() {
        eyre::bail!("{} profile(s) failed to sync", report.failures.len());
    }

    Ok(())
}

/// Resolve the profile root: flag, then config, then platform convention
fn resolve_profile_root(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(root) = flag {
        return Ok(root);
    }

    if let Some(ref root) = config.paths.profile_root {
        return Ok(Config::expand_path(root));
    }

    default_profile_root().ok_or_else(|| eyre::eyre!("Could not determine profile root for this platform"))
}
