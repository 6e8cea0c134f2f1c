//! Fixed file names and environment expansion for configured paths.

use std::env;
use std::path::{Path, PathBuf};

/// Log file rotated after every run, resolved against the run's working
/// directory.
pub const LOG_FILE_NAME: &str = "automation.log";

/// Policy file consumed by logrotate, kept in the conf directory.
pub const CONF_FILE_NAME: &str = "logrotate.conf";

/// State file maintained by logrotate, kept next to the policy file.
pub const STATE_FILE_NAME: &str = "logrotate.state";

/// Absolute path of the log file for a given run directory.
pub fn log_file_in(run_dir: &Path) -> PathBuf {
    run_dir.join(LOG_FILE_NAME)
}

/// Expand `$VAR` and `${VAR}` references against the process environment.
///
/// References to unset variables are left untouched, so a misconfigured
/// path stays visible in error messages instead of silently collapsing.
pub fn expand_env(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&'{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                match env::var(&name) {
                    Ok(value) if closed => out.push_str(&value),
                    _ => {
                        out.push_str("${");
                        out.push_str(&name);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            Some(&c) if c == '_' || c.is_ascii_alphabetic() => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '_' || c.is_ascii_alphanumeric() {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match env::var(&name) {
                    Ok(value) => out.push_str(&value),
                    Err(_) => {
                        out.push('$');
                        out.push_str(&name);
                    }
                }
            }
            _ => out.push('$'),
        }
    }

    out
}
