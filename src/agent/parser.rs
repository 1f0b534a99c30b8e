//! Agent file frontmatter parsing
//!
//! Parses YAML frontmatter from *.agent.md files to extract metadata.
//!
//! # Format
//!
//! ```markdown
//! ---
//! description: Reviews pull requests for common mistakes
//! tools: ["codebase", "search"]
//! ---
//!
//! You are a meticulous code reviewer...
//! ```

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File suffix that marks an agent definition
pub const AGENT_SUFFIX: &str = ".agent.md";

/// Metadata extracted from agent frontmatter
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentMetadata {
    /// What this agent does (shown by the host editor in its picker)
    pub description: String,
    /// Tools the agent is allowed to use
    #[serde(default)]
    pub tools: Vec<String>,
    /// Preferred model, if any
    #[serde(default)]
    pub model: Option<String>,
}

/// Parse an agent file and extract frontmatter metadata
pub fn parse_agent_md(path: &Path) -> Result<AgentMetadata> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read agent file: {}", path.display()))?;

    parse_frontmatter(&content).with_context(|| format!("Failed to parse frontmatter in {}", path.display()))
}

/// Parse YAML frontmatter from markdown content
pub fn parse_frontmatter(content: &str) -> Result<AgentMetadata> {
    // Check for frontmatter delimiter
    let content = content.trim();
    if !content.starts_with("---") {
        eyre::bail!("Agent file must start with YAML frontmatter (---)");
    }

    // Find the end of frontmatter
    let rest = &content[3..];
    let end_pos = rest
        .find("\n---")
        .or_else(|| rest.find("\r\n---"))
        .ok_or_else(|| eyre::eyre!("No closing frontmatter delimiter (---) found"))?;

    let yaml_content = &rest[..end_pos].trim();

    // Parse YAML
    let metadata: AgentMetadata = serde_yaml::from_str(yaml_content).context("Failed to parse YAML frontmatter")?;

    Ok(metadata)
}

/// Return the prompt body (everything after the frontmatter block)
pub fn prompt_body(content: &str) -> &str {
    let trimmed = content.trim_start();
    if let Some(rest) = trimmed.strip_prefix("---")
        && let Some(end_pos) = rest.find("\n---")
    {
        // Skip past the closing delimiter line
        let after = &rest[end_pos + 4..];
        return after.trim_start_matches('-').trim_start();
    }
    content
}

/// Check if a path names an agent definition file
pub fn is_agent_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(AGENT_SUFFIX))
        .unwrap_or(false)
}

/// Agent name for a file: the stem before `.agent.md`
pub fn agent_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_string_lossy();
    file_name.strip_suffix(AGENT_SUFFIX).map(|s| s.to_string())
}
