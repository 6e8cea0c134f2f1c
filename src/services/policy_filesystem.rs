//! Filesystem side of the configurator: directory guarantees and the
//! policy file itself.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::HookConfig;
use crate::domain::paths::{self, CONF_FILE_NAME, STATE_FILE_NAME};
use crate::domain::{AppError, RotationPolicy};

/// Resolved view of the configured directories.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub conf_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl ResolvedPaths {
    /// Policy file consumed by the rotation tool.
    pub fn conf_file(&self) -> PathBuf {
        self.conf_dir.join(CONF_FILE_NAME)
    }

    /// State file maintained by the rotation tool.
    pub fn state_file(&self) -> PathBuf {
        self.conf_dir.join(STATE_FILE_NAME)
    }
}

/// Expand the configured directory strings without touching the filesystem.
pub fn resolve(config: &HookConfig) -> ResolvedPaths {
    ResolvedPaths {
        conf_dir: PathBuf::from(paths::expand_env(&config.conf_dir)),
        log_dir: PathBuf::from(paths::expand_env(&config.log_dir)),
    }
}

/// Guarantee `dir` exists as a directory (or a symlink to one).
fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        return Ok(());
    }
    if dir.is_dir() {
        return Ok(());
    }
    Err(AppError::NotADirectory(dir.to_path_buf()))
}

/// Make sure both directories exist and the policy file covers the run's
/// log file.
///
/// Targets already listed in an existing policy file are preserved; the
/// run's log is appended only if absent, so repeated runs rewrite the file
/// byte-identically. Returns the resolved paths for handing to the tool.
pub fn ensure_config(config: &HookConfig, run_dir: &Path) -> Result<ResolvedPaths, AppError> {
    let resolved = resolve(config);
    ensure_dir(&resolved.log_dir)?;
    ensure_dir(&resolved.conf_dir)?;

    let conf_file = resolved.conf_file();
    let existing = match fs::read_to_string(&conf_file) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let mut policy = RotationPolicy::seeded(resolved.log_dir.clone(), existing.as_deref());
    policy.add_target(paths::log_file_in(run_dir));
    fs::write(&conf_file, policy.render())?;

    Ok(resolved)
}
