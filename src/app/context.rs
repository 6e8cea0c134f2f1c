use crate::config::HookConfig;
use crate::ports::RotationTool;

/// Application context holding dependencies for command execution.
pub struct AppContext<T: RotationTool> {
    config: HookConfig,
    tool: T,
}

impl<T: RotationTool> AppContext<T> {
    /// Create a new application context.
    pub fn new(config: HookConfig, tool: T) -> Self {
        Self { config, tool }
    }

    /// Get a reference to the hook configuration.
    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Get a reference to the rotation tool.
    pub fn tool(&self) -> &T {
        &self.tool
    }
}
