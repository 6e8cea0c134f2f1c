//! Hook configuration, populated once at startup.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;

/// Environment variable naming the conf directory.
pub const CONF_DIR_ENV: &str = "LRHOOK_CONFDIR";
/// Environment variable naming the log directory.
pub const LOG_DIR_ENV: &str = "LRHOOK_LOGDIR";
/// Environment variable naming the rotation tool binary.
pub const TOOL_ENV: &str = "LRHOOK_LOGROTATE";

const DEFAULT_CONF_DIR: &str = "$HOME/.lr";
const DEFAULT_LOG_DIR: &str = "$HOME/automation_logs";
const DEFAULT_TOOL: &str = "/usr/bin/logrotate";

/// Optional on-disk configuration at `$HOME/.config/lrhook/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    confdir: Option<String>,
    logdir: Option<String>,
    logrotate: Option<PathBuf>,
}

/// Application-wide configuration.
///
/// The directory options keep their raw, environment-expandable form
/// (`$HOME/.lr` style); expansion happens each time the hook resolves them,
/// see [`crate::services::policy_filesystem::resolve`].
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Directory holding the policy and state files.
    pub conf_dir: String,
    /// Directory receiving rotated output.
    pub log_dir: String,
    /// Path of the external rotation tool.
    pub tool_path: PathBuf,
}

impl HookConfig {
    /// Assemble configuration from environment variables, the optional
    /// config file, and built-in defaults, in that precedence order.
    pub fn load() -> Result<Self, AppError> {
        let file = Self::read_config_file()?;
        Ok(Self {
            conf_dir: env::var(CONF_DIR_ENV)
                .ok()
                .or(file.confdir)
                .unwrap_or_else(|| DEFAULT_CONF_DIR.to_string()),
            log_dir: env::var(LOG_DIR_ENV)
                .ok()
                .or(file.logdir)
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
            tool_path: env::var(TOOL_ENV)
                .ok()
                .map(PathBuf::from)
                .or(file.logrotate)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL)),
        })
    }

    fn read_config_file() -> Result<ConfigFile, AppError> {
        let Some(home) = env::var_os("HOME") else {
            return Ok(ConfigFile::default());
        };
        let path = PathBuf::from(home).join(".config").join("lrhook").join("config.toml");
        if !path.exists() {
            return Ok(ConfigFile::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            AppError::configuration(format!("Malformed {}: {}", path.display(), e))
        })
    }
}
