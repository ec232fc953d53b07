use crate::domain::terminal::TerminalSession;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::Command;

/// Runs each command in the user's own terminal, with the TUI suspended.
/// Every run is a fresh shell that has exited by the time control returns.
pub struct ForegroundShell {
    shell: String,
    cwd: PathBuf,
}

impl ForegroundShell {
    pub fn new(shell: impl Into<String>, cwd: PathBuf) -> Self {
        Self {
            shell: shell.into(),
            cwd,
        }
    }

    /// `$SHELL`, falling back to `sh`.
    pub fn from_env(cwd: PathBuf) -> Self {
        let shell = std::env::var("SHELL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "sh".to_string());
        Self::new(shell, cwd)
    }
}

impl TerminalSession for ForegroundShell {
    fn is_foreground(&self) -> bool {
        true
    }

    fn send_text(&mut self, command: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "$ {command}")?;
        stdout.flush()?;

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .current_dir(&self.cwd)
            .status()
            .with_context(|| format!("could not start {}", self.shell))?;
        tracing::info!(%status, "foreground command finished");

        writeln!(stdout, "\n[{status}] Press Enter to return to Script Buttons")?;
        stdout.flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.shell
            .rsplit('/')
            .next()
            .unwrap_or(&self.shell)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_uses_shell_name() {
        let shell = ForegroundShell::new("/usr/bin/zsh", PathBuf::from("."));
        assert_eq!(shell.describe(), "zsh");
        assert!(shell.is_foreground());
    }
}
