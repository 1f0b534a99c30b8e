//! Editor profile discovery
//!
//! A profile is an immediate subdirectory of the profile root. The root
//! follows the editor's per-platform layout: `<config>/Code/User/profiles`,
//! where `<config>` is `~/.config` on Linux, `~/Library/Application Support`
//! on macOS, and `%APPDATA%` on Windows. One resolution function replaces
//! the per-OS copy scripts this tool grew out of.

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A discovered editor profile
#[derive(Debug, Clone)]
pub struct Profile {
    /// Directory name of the profile
    pub name: String,
    /// Absolute path to the profile directory
    pub path: PathBuf,
}

/// Profile root from the platform convention
pub fn default_profile_root() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Code").join("User").join("profiles"))
}

/// Enumerate the immediate subdirectories of the profile root.
///
/// Errors if the root does not exist; an existing but empty root yields an
/// empty list.
pub fn discover_profiles(profile_root: &Path) -> Result<Vec<Profile>> {
    if !profile_root.exists() {
        eyre::bail!("Profile root not found: {}", profile_root.display());
    }

    let mut profiles = Vec::new();

    for entry in fs::read_dir(profile_root)
        .with_context(|| format!("Failed to read profile root: {}", profile_root.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            let name = entry.file_name().to_string_lossy().to_string();
            profiles.push(Profile { name, path });
        }
    }

    // Sort by name for consistent ordering
    profiles.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(profiles)
}
