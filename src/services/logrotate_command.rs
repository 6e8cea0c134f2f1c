use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::RotationTool;

/// `RotationTool` implementation shelling out to the logrotate binary.
#[derive(Debug, Clone)]
pub struct LogrotateCommand {
    program: PathBuf,
}

impl LogrotateCommand {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }
}

impl RotationTool for LogrotateCommand {
    fn rotate(&self, conf_file: &Path, state_file: &Path) -> Result<(), AppError> {
        // Root as working directory keeps the tool's relative-path
        // resolution independent of where the run happened to execute.
        let mut child = Command::new(&self.program)
            .arg("-s")
            .arg(state_file)
            .arg(conf_file)
            .current_dir("/")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // The exit status is intentionally never inspected; stdout is
        // drained line by line so the tool's output stays visible.
        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines() {
                println!("{}", line?);
            }
        }

        Ok(())
    }
}
