use std::env;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::RotationTool;
use crate::services::policy_filesystem;

/// Execute the rotate command: refresh the policy file, then fire the tool.
pub fn execute<T: RotationTool>(ctx: &AppContext<T>) -> Result<(), AppError> {
    let run_dir = env::current_dir()?;
    execute_in(ctx, &run_dir)
}

/// Rotate on behalf of a specific run directory.
pub fn execute_in<T: RotationTool>(ctx: &AppContext<T>, run_dir: &Path) -> Result<(), AppError> {
    println!("Checking logrotate config...");
    let resolved = policy_filesystem::ensure_config(ctx.config(), run_dir)?;
    println!("logdir = {}", resolved.log_dir.display());
    println!("confdir = {}", resolved.conf_dir.display());

    println!("Rotating log file...");
    ctx.tool().rotate(&resolved.conf_file(), &resolved.state_file())
}
