mod rotation_tool;

pub use rotation_tool::RotationTool;
