use std::env;

use crate::app::AppContext;
use crate::app::commands::rotate;
use crate::domain::AppError;
use crate::ports::RotationTool;
use crate::services::detach;

/// Hook entry point: detach from the completed run, then rotate from the
/// background child.
///
/// Returns as soon as the child exists. Rotation failures stay in the
/// child (it exits 1); the completed run is never affected.
pub fn execute<T: RotationTool>(ctx: &AppContext<T>) -> Result<(), AppError> {
    let run_dir = env::current_dir()?;
    detach::detach_and_run(|| match rotate::execute_in(ctx, &run_dir) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    })
}
