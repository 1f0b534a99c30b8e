//! Agent discovery
//!
//! Finds *.agent.md files under the agents directory. The distributor works
//! from the raw file list; `list`/`show` work from parsed metadata.

use eyre::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::parser::{agent_name, is_agent_file, parse_agent_md};

/// An agent definition with parsed metadata
#[derive(Debug, Clone, Serialize)]
pub struct Agent {
    /// Agent name (file stem, e.g. "reviewer")
    pub name: String,
    /// What this agent does
    pub description: String,
    /// Tools the agent is allowed to use
    pub tools: Vec<String>,
    /// Preferred model, if any
    pub model: Option<String>,
    /// Path to the source file
    pub path: PathBuf,
}

/// Collect all agent file paths under a directory, sorted by file name.
///
/// This is the source asset set for distribution: files are matched by
/// suffix only, frontmatter validity is not checked here.
pub fn agent_files(agents_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if !agents_dir.exists() {
        return Ok(files);
    }

    for entry in WalkDir::new(agents_dir) {
        let entry = entry.with_context(|| format!("Failed to read agents directory: {}", agents_dir.display()))?;

        if entry.file_type().is_file() && is_agent_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    // Sort by file name for deterministic copy order
    files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    Ok(files)
}

/// Discover all agents with parsed metadata, sorted by name.
///
/// Files with broken frontmatter are skipped with a warning, matching how
/// the host editor tolerates them.
pub fn discover_agents(agents_dir: &Path) -> Result<Vec<Agent>> {
    let mut agents = Vec::new();

    for path in agent_files(agents_dir)? {
        let Some(name) = agent_name(&path) else {
            continue;
        };

        match parse_agent_md(&path) {
            Ok(metadata) => {
                agents.push(Agent {
                    name,
                    description: metadata.description,
                    tools: metadata.tools,
                    model: metadata.model,
                    path,
                });
            }
            Err(e) => {
                log::warn!("Failed to load agent from {}: {}", path.display(), e);
            }
        }
    }

    agents.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(agents)
}

/// Find a single agent file by name
pub fn find_agent_file(agents_dir: &Path, name: &str) -> Result<Option<PathBuf>> {
    let wanted = format!("{}{}", name, super::parser::AGENT_SUFFIX);

    Ok(agent_files(agents_dir)?
        .into_iter()
        .find(|p| p.file_name().map(|n| n.to_string_lossy() == wanted).unwrap_or(false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_agent_md(dir: &Path, name: &str, description: &str) {
        let content = format!(
            r#"---
description: {}
---

You are {}.
"#,
            description, name
        );
        fs::write(dir.join(format!("{}.agent.md", name)), content).unwrap();
    }

    #[test]
    fn test_agent_files_matches_suffix_only() {
        let temp = TempDir::new().unwrap();
        create_agent_md(temp.path(), "reviewer", "Reviews code");
        fs::write(temp.path().join("README.md"), "# notes").unwrap();
        fs::write(temp.path().join("scratch.txt"), "x").unwrap();

        let files = agent_files(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("reviewer.agent.md"));
    }

    #[test]
    fn test_agent_files_recursive_and_sorted() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("planning");
        fs::create_dir_all(&nested).unwrap();
        create_agent_md(temp.path(), "zebra", "Last alphabetically");
        create_agent_md(&nested, "architect", "Plans changes");

        let files = agent_files(temp.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("architect.agent.md"));
        assert!(files[1].ends_with("zebra.agent.md"));
    }

    #[test]
    fn test_agent_files_nonexistent_directory() {
        let files = agent_files(Path::new("/nonexistent/agents")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_agents_skips_broken_frontmatter() {
        let temp = TempDir::new().unwrap();
        create_agent_md(temp.path(), "reviewer", "Reviews code");
        fs::write(temp.path().join("broken.agent.md"), "no frontmatter here").unwrap();

        let agents = discover_agents(temp.path()).unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].name, "reviewer");
        assert_eq!(agents[0].description, "Reviews code");
    }

    #[test]
    fn test_find_agent_file() {
        let temp = TempDir::new().unwrap();
        create_agent_md(temp.path(), "reviewer", "Reviews code");

        let found = find_agent_file(temp.path(), "reviewer").unwrap();
        assert!(found.is_some());

        let missing = find_agent_file(temp.path(), "missing").unwrap();
        assert!(missing.is_none());
    }
}
