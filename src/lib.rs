//! lrhook: rotate the automation log through logrotate after each run.
//!
//! The hook keeps a rotation policy file under a conf directory, appends the
//! current run's log file to it, and fires the external logrotate binary:
//! either detached in a background child ([`run`]) so the completed run is
//! never delayed, or in the calling process ([`rotate`]).

pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;


use app::AppContext;
use app::commands::{rotate, run};
use services::LogrotateCommand;
use services::policy_filesystem;

pub use config::HookConfig;
pub use domain::{AppError, RotationPolicy};
pub use services::policy_filesystem::ResolvedPaths;

fn context(config: &HookConfig) -> AppContext<LogrotateCommand> {
    AppContext::new(config.clone(), LogrotateCommand::new(config.tool_path.clone()))
}

/// Detach from the caller and rotate the automation log in the background.
///
/// Returns as soon as the background child exists; the rotation itself is
/// best-effort and its outcome is never reported back.
pub fn run(config: &HookConfig) -> Result<(), AppError> {
    run::execute(&context(config))
}

/// Rotate the automation log in the calling process.
pub fn rotate(config: &HookConfig) -> Result<(), AppError> {
    rotate::execute(&context(config))
}

/// Resolve the configured directories without touching the filesystem.
pub fn resolved(config: &HookConfig) -> ResolvedPaths {
    policy_filesystem::resolve(config)
}
