use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fake logrotate binary recording every invocation.
///
/// The script appends its arguments and working directory to a log file,
/// prints one line of output, and always succeeds.
pub(crate) struct FakeLogrotate {
    pub root: TempDir,
    pub bin: PathBuf,
    pub log_file: PathBuf,
}

impl FakeLogrotate {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake logrotate");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("logrotate.log");
        let bin = bin_dir.join("logrotate");

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
pwd >> "{log}"
echo "reading config file logrotate.conf"
exit 0
"#,
            log = log_file.to_string_lossy()
        );

        fs::write(&bin, script_content).expect("Failed to write logrotate script");

        let mut perms = fs::metadata(&bin).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&bin, perms).expect("Failed to set permissions");

        Self { root, bin, log_file }
    }

    pub(crate) fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    pub(crate) fn was_invoked(&self) -> bool {
        self.log_file.exists()
    }
}
