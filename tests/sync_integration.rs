//! Integration tests for the sync workflow
//!
//! These tests drive the built binary end to end:
//! - Fan-out copy into every profile
//! - Idempotence of repeated runs
//! - Missing profile root handling
//! - Failure isolation between profiles
//! - Listing and validating agent files

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Helper to get the agentsync binary path
fn agentsync_binary() -> PathBuf {
    // When running tests, the binary is in target/debug/agentsync
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("agentsync");
    path
}

/// Helper to run agentsync with a config file
fn run_agentsync(config_file: &Path, args: &[&str]) -> std::process::Output {
    Command::new(agentsync_binary())
        .arg("--config")
        .arg(config_file)
        .args(args)
        .output()
        .expect("Failed to execute agentsync")
}

/// Helper to write an agent definition file
fn create_agent_md(agents_dir: &Path, name: &str) {
    let content = format!(
        r#"---
description: Test agent {name}
tools:
  - codebase
---

You are {name}.
"#
    );
    fs::write(agents_dir.join(format!("{name}.agent.md")), content).unwrap();
}

/// Helper to set up a test environment: agents dir, profile root, config file
fn setup_test_env(profiles: &[&str]) -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();

    let agents_dir = temp.path().join("agents");
    fs::create_dir_all(&agents_dir).unwrap();

    let profile_root = temp.path().join("profiles");
    fs::create_dir_all(&profile_root).unwrap();
    for profile in profiles {
        fs::create_dir_all(profile_root.join(profile)).unwrap();
    }

    let config_file = temp.path().join("agentsync.yaml");
    let config = format!(
        r#"paths:
  agents: "{agents}"
  profile_root: "{root}"

sync:
  subdir: prompts

log_level: "off"
"#,
        agents = agents_dir.display(),
        root = profile_root.display(),
    );
    fs::write(&config_file, config).unwrap();

    (temp, config_file, agents_dir, profile_root)
}

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_sync_fans_out_to_all_profiles() {
    let (_temp, config_file, agents_dir, profile_root) = setup_test_env(&["A", "B"]);

    create_agent_md(&agents_dir, "x");
    create_agent_md(&agents_dir, "y");

    let output = run_agentsync(&config_file, &["sync"]);
    assert!(output.status.success(), "Sync failed: {:?}", output);

    for profile in ["A", "B"] {
        for name in ["x.agent.md", "y.agent.md"] {
            let dest = profile_root.join(profile).join("prompts").join(name);
            assert!(dest.exists(), "Missing {}", dest.display());

            let source = fs::read(agents_dir.join(name)).unwrap();
            assert_eq!(fs::read(&dest).unwrap(), source, "Content mismatch for {}", name);
        }
    }
}

#[test]
fn test_sync_is_idempotent() {
    let (_temp, config_file, agents_dir, profile_root) = setup_test_env(&["A"]);

    create_agent_md(&agents_dir, "x");

    let first = run_agentsync(&config_file, &["sync"]);
    assert!(first.status.success());

    let second = run_agentsync(&config_file, &["sync"]);
    assert!(second.status.success());

    let dest_dir = profile_root.join("A").join("prompts");
    let entries: Vec<_> = fs::read_dir(&dest_dir).unwrap().collect();
    assert_eq!(entries.len(), 1, "Re-running must not create duplicates");

    let source = fs::read(agents_dir.join("x.agent.md")).unwrap();
    assert_eq!(fs::read(dest_dir.join("x.agent.md")).unwrap(), source);
}

#[test]
fn test_sync_missing_profile_root_fails() {
    let (_temp, config_file, agents_dir, profile_root) = setup_test_env(&[]);

    create_agent_md(&agents_dir, "x");
    fs::remove_dir(&profile_root).unwrap();

    let output = run_agentsync(&config_file, &["sync"]);
    assert!(!output.status.success(), "Should fail when profile root is missing");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Profile root not found"),
        "Should report missing root: {}",
        stderr
    );

    // Nothing may be created
    assert!(!profile_root.exists());
}

#[test]
fn test_sync_preserves_unrelated_files() {
    let (_temp, config_file, agents_dir, profile_root) = setup_test_env(&["A"]);

    create_agent_md(&agents_dir, "x");

    let dest_dir = profile_root.join("A").join("prompts");
    fs::create_dir_all(&dest_dir).unwrap();
    fs::write(dest_dir.join("notes.md"), "keep me").unwrap();

    let output = run_agentsync(&config_file, &["sync"]);
    assert!(output.status.success());

    assert_eq!(fs::read_to_string(dest_dir.join("notes.md")).unwrap(), "keep me");
    assert!(dest_dir.join("x.agent.md").exists());
}

#[test]
fn test_sync_zero_profiles_is_noop() {
    let (_temp, config_file, agents_dir, profile_root) = setup_test_env(&[]);

    create_agent_md(&agents_dir, "x");

    let output = run_agentsync(&config_file, &["sync"]);
    assert!(output.status.success(), "Empty root should succeed: {:?}", output);

    let entries: Vec<_> = fs::read_dir(&profile_root).unwrap().collect();
    assert!(entries.is_empty(), "No directories may be created under the root");
}

#[test]
fn test_sync_failed_profile_does_not_block_others() {
    let (_temp, config_file, agents_dir, profile_root) = setup_test_env(&["A", "B"]);

    create_agent_md(&agents_dir, "x");

    // A regular file where A's prompts directory should go
    fs::write(profile_root.join("A").join("prompts"), "in the way").unwrap();

    let output = run_agentsync(&config_file, &["sync"]);
    assert!(!output.status.success(), "Should exit non-zero when a profile fails");

    // B still got its copy
    assert!(profile_root.join("B").join("prompts").join("x.agent.md").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("A"), "Should name the failed profile: {}", stderr);
}

#[test]
fn test_sync_dry_run_touches_nothing() {
    let (_temp, config_file, agents_dir, profile_root) = setup_test_env(&["A"]);

    create_agent_md(&agents_dir, "x");

    let output = run_agentsync(&config_file, &["sync", "--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would copy"), "Should describe the dry run: {}", stdout);

    assert!(!profile_root.join("A").join("prompts").exists());
}

#[test]
fn test_sync_profile_root_flag_overrides_config() {
    let (temp, config_file, agents_dir, _profile_root) = setup_test_env(&["A"]);

    create_agent_md(&agents_dir, "x");

    let other_root = temp.path().join("other-profiles");
    fs::create_dir_all(other_root.join("C")).unwrap();

    let output = run_agentsync(
        &config_file,
        &["sync", "--profile-root", other_root.to_str().unwrap()],
    );
    assert!(output.status.success());

    assert!(other_root.join("C").join("prompts").join("x.agent.md").exists());
}

#[test]
fn test_list_shows_agents_as_json() {
    let (_temp, config_file, agents_dir, _profile_root) = setup_test_env(&[]);

    create_agent_md(&agents_dir, "reviewer");
    create_agent_md(&agents_dir, "architect");

    let output = run_agentsync(&config_file, &["list", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let agents: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(agents.len(), 2);

    let names: Vec<&str> = agents.iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["architect", "reviewer"], "Should be sorted by name");
}

#[test]
fn test_validate_reports_broken_frontmatter() {
    let (_temp, config_file, agents_dir, _profile_root) = setup_test_env(&[]);

    create_agent_md(&agents_dir, "good");
    fs::write(agents_dir.join("bad.agent.md"), "no frontmatter at all").unwrap();

    let output = run_agentsync(&config_file, &["validate", "all"]);
    assert!(!output.status.success(), "Validate should fail on broken frontmatter");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bad.agent.md"));
}

#[test]
fn test_validate_single_agent() {
    let (_temp, config_file, agents_dir, _profile_root) = setup_test_env(&[]);

    create_agent_md(&agents_dir, "good");

    let output = run_agentsync(&config_file, &["validate", "good"]);
    assert!(output.status.success(), "Valid agent should pass: {:?}", output);
}
