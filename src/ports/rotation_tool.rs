use std::path::Path;

use crate::domain::AppError;

/// Boundary to the external rotation tool.
///
/// The real implementation shells out to the logrotate binary; unit tests
/// substitute a recording stub.
pub trait RotationTool {
    /// Run the tool against `conf_file`, with `state_file` for its own
    /// bookkeeping. Best-effort: implementations surface a failure to start
    /// the tool, but never the tool's own exit status.
    fn rotate(&self, conf_file: &Path, state_file: &Path) -> Result<(), AppError>;
}
