//! Shared testing harness for `lrhook` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

use crate::harness::FakeLogrotate;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// `$HOME` points into a temp directory so the default `$HOME/.lr` and
/// `$HOME/automation_logs` paths resolve under it, and the fake logrotate
/// binary is wired in through `LRHOOK_LOGROTATE`.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    pub(crate) logrotate: FakeLogrotate,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, logrotate: FakeLogrotate::new() }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the run directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default conf directory under the emulated `$HOME`.
    pub(crate) fn conf_dir(&self) -> PathBuf {
        self.root.path().join(".lr")
    }

    /// Default log directory under the emulated `$HOME`.
    pub(crate) fn log_dir(&self) -> PathBuf {
        self.root.path().join("automation_logs")
    }

    pub(crate) fn conf_file(&self) -> PathBuf {
        self.conf_dir().join("logrotate.conf")
    }

    pub(crate) fn state_file(&self) -> PathBuf {
        self.conf_dir().join("logrotate.state")
    }

    /// Log file the hook is expected to rotate for the work directory.
    pub(crate) fn expected_log_path(&self) -> PathBuf {
        self.work_dir.join("automation.log")
    }

    /// Build a command for invoking the compiled `lrhook` binary within the
    /// work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("lrhook").expect("Failed to locate lrhook binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("LRHOOK_LOGROTATE", &self.logrotate.bin)
            .env_remove("LRHOOK_CONFDIR")
            .env_remove("LRHOOK_LOGDIR");
        cmd
    }

    /// Invoke `lrhook run` without capturing pipes.
    ///
    /// The detached child inherits stdout/stderr, so a piped invocation
    /// would block until the child exits and hide the detach behavior.
    /// `status()` waits on the parent only.
    pub(crate) fn run_hook(&self) -> std::process::ExitStatus {
        std::process::Command::new(assert_cmd::cargo::cargo_bin("lrhook"))
            .arg("run")
            .current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("LRHOOK_LOGROTATE", &self.logrotate.bin)
            .env_remove("LRHOOK_CONFDIR")
            .env_remove("LRHOOK_LOGDIR")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .expect("Failed to launch lrhook run")
    }

    /// Read the generated policy file.
    pub(crate) fn read_conf(&self) -> String {
        fs::read_to_string(self.conf_file()).expect("read logrotate.conf")
    }

    /// Wait for a detached child to materialize a file.
    pub(crate) fn wait_for<P: AsRef<Path>>(&self, path: P, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if path.as_ref().exists() {
                return true;
            }
            thread::sleep(Duration::from_millis(50));
        }
        false
    }
}
