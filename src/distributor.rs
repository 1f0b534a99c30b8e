//! Profile fan-out copy
//!
//! Copies the agent source set into `<profile>/<subdir>` for every profile
//! under the root. Idempotent: re-running overwrites destination files with
//! identical content. A failure in one profile fails that profile only;
//! remaining profiles still run and all failures are reported in the result.

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::{Profile, discover_profiles};

/// Result of one distribution run
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Profiles visited
    pub profiles: usize,
    /// File copies performed (or counted, in dry-run)
    pub copied: usize,
    /// Profiles that failed, with the error that stopped them
    pub failures: Vec<ProfileFailure>,
}

/// A profile whose copy did not complete
#[derive(Debug)]
pub struct ProfileFailure {
    pub profile: String,
    pub error: String,
}

impl SyncReport {
    pub fn ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copy every source file into `<profile>/<subdir>` for each profile under
/// `profile_root`.
///
/// The root is an explicit parameter so the logic is testable with an
/// injected path; callers resolve it from flags, config, or the platform
/// convention. A missing root is the only hard error.
pub fn distribute(profile_root: &Path, sources: &[PathBuf], subdir: &str, dry_run: bool) -> Result<SyncReport> {
    let profiles = discover_profiles(profile_root)?;

    let mut report = SyncReport::default();

    for profile in &profiles {
        report.profiles += 1;

        match copy_into_profile(profile, sources, subdir, dry_run) {
            Ok(count) => {
                report.copied += count;
                log::info!("Synced {} file(s) into profile '{}'", count, profile.name);
            }
            Err(e) => {
                log::error!("Profile '{}' failed: {:#}", profile.name, e);
                report.failures.push(ProfileFailure {
                    profile: profile.name.clone(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(report)
}

/// Copy the source set into one profile's destination directory.
///
/// Stops at the first error inside the profile; files already copied are
/// left in place.
fn copy_into_profile(profile: &Profile, sources: &[PathBuf], subdir: &str, dry_run: bool) -> Result<usize> {
    let dest_dir = profile.path.join(subdir);

    if !dry_run {
        fs::create_dir_all(&dest_dir)
            .with_context(|| format!("Failed to create destination directory: {}", dest_dir.display()))?;
    }

    let mut copied = 0;

    for source in sources {
        let file_name = source
            .file_name()
            .ok_or_else(|| eyre::eyre!("Source has no file name: {}", source.display()))?;
        let dest = dest_dir.join(file_name);

        if dry_run {
            log::debug!("Would copy {} -> {}", source.display(), dest.display());
        } else {
            fs::copy(source, &dest)
                .with_context(|| format!("Failed to copy {} -> {}", source.display(), dest.display()))?;
        }

        copied += 1;
    }

    Ok(copied)
}
