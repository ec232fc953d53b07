//! Runs shell command strings and captures their output.

use anyhow::{bail, Context, Result};
use std::process::Command;

#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send {
    /// Runs `cmd` through `sh -c`; stdout on success, stderr as the error.
    fn run(&self, cmd: &str) -> Result<String>;
}

pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, cmd: &str) -> Result<String> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(cmd)
            .output()
            .with_context(|| format!("Failed to execute: {cmd}"))?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            bail!("{}", String::from_utf8_lossy(&output.stderr).trim())
        }
    }
}

/// Quotes `s` for `sh` unless it is made only of safe characters.
#[must_use]
pub fn shell_escape(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '%' | ':')
    }) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', "'\\''"))
}
