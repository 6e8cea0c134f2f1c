//! Rotation policy model: the target list plus the fixed directive block.

use std::path::{Path, PathBuf};

/// Declarative policy consumed by logrotate.
///
/// Targets are kept in insertion order and never duplicated. Rendering is
/// deterministic: the same targets and old-dir always produce byte-identical
/// output, which is what makes rewriting the policy file on every run safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    targets: Vec<PathBuf>,
    old_dir: PathBuf,
}

impl RotationPolicy {
    /// Create an empty policy rotating into `old_dir`.
    pub fn new(old_dir: PathBuf) -> Self {
        Self { targets: Vec::new(), old_dir }
    }

    /// Append a target path unless it is already listed.
    ///
    /// Returns `true` when the path was added.
    pub fn add_target(&mut self, path: PathBuf) -> bool {
        if self.targets.contains(&path) {
            return false;
        }
        self.targets.push(path);
        true
    }

    /// Target paths in insertion order.
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Parse the target list of an existing policy file: the lines before
    /// the first `{`.
    pub fn parse_targets(content: &str) -> Vec<PathBuf> {
        content
            .lines()
            .take_while(|line| line.trim() != "{")
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    /// Seed a policy from an existing policy file's content, if any.
    pub fn seeded(old_dir: PathBuf, existing: Option<&str>) -> Self {
        let mut policy = Self::new(old_dir);
        if let Some(content) = existing {
            for target in Self::parse_targets(content) {
                policy.add_target(target);
            }
        }
        policy
    }

    /// Render the policy file contents: target paths one per line, then the
    /// directive block. `dateformat -%s` suffixes rotated files with a Unix
    /// timestamp; `size 1` rotates any non-empty log.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for target in &self.targets {
            out.push_str(&target.to_string_lossy());
            out.push('\n');
        }
        out.push_str("{\n");
        out.push_str("\trotate 1000\n");
        out.push_str("\tmissingok\n");
        out.push_str("\tnotifempty\n");
        out.push_str("\tdateext\n");
        out.push_str("\tdateformat -%s\n");
        out.push_str("\tcompress\n");
        out.push_str("\tolddir ");
        out.push_str(&self.old_dir.to_string_lossy());
        out.push('\n');
        out.push_str("\tsize 1\n");
        out.push_str("}\n");
        out
    }
}
