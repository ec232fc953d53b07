//! Runs button commands in a dedicated tmux window.
//!
//! Inside tmux the window is opened in the current session; outside, a
//! detached session is used that the user can attach to.

use super::runner::{shell_escape, CommandRunner};
use crate::domain::terminal::TerminalSession;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const WINDOW_NAME: &str = "Script Buttons";
pub const SESSION_NAME: &str = "script-buttons";

pub struct TmuxSession<R: CommandRunner> {
    runner: R,
    cwd: PathBuf,
    inside_tmux: bool,
    pane: Option<String>,
}

impl<R: CommandRunner> TmuxSession<R> {
    pub fn new(runner: R, cwd: PathBuf, inside_tmux: bool) -> Self {
        Self {
            runner,
            cwd,
            inside_tmux,
            pane: None,
        }
    }

    fn pane_alive(&self, pane: &str) -> bool {
        let cmd = format!(
            "tmux display-message -p -t {} '#{{pane_dead}}'",
            shell_escape(pane)
        );
        self.runner
            .run(&cmd)
            .is_ok_and(|out| out.trim() == "0")
    }

    fn create(&self) -> Result<String> {
        let cwd = shell_escape(&self.cwd.to_string_lossy());
        let window = shell_escape(WINDOW_NAME);

        let out = if self.inside_tmux {
            self.runner.run(&format!(
                "tmux new-window -d -P -F '#{{pane_id}}' -n {window} -c {cwd}"
            ))?
        } else {
            let new_session = format!(
                "tmux new-session -d -P -F '#{{pane_id}}' -s {} -n {window} -c {cwd}",
                shell_escape(SESSION_NAME)
            );
            match self.runner.run(&new_session) {
                Ok(out) => out,
                // Left over from an earlier run.
                Err(_) => self.runner.run(&format!(
                    "tmux new-window -d -P -F '#{{pane_id}}' -t {}: -n {window} -c {cwd}",
                    shell_escape(SESSION_NAME)
                ))?,
            }
        };

        let pane = out.trim().to_string();
        anyhow::ensure!(!pane.is_empty(), "tmux did not report a pane id");
        tracing::info!(%pane, "created tmux terminal session");
        Ok(pane)
    }

    fn ensure_pane(&mut self) -> Result<String> {
        if let Some(pane) = &self.pane {
            if self.pane_alive(pane) {
                return Ok(pane.clone());
            }
            tracing::info!(%pane, "tmux terminal session has exited");
        }
        let pane = self.create().context("Failed to open a tmux window")?;
        self.pane = Some(pane.clone());
        Ok(pane)
    }
}

impl<R: CommandRunner> TerminalSession for TmuxSession<R> {
    fn is_foreground(&self) -> bool {
        false
    }

    fn send_text(&mut self, command: &str) -> Result<()> {
        let pane = self.ensure_pane()?;
        let target = shell_escape(&pane);
        // Literal mode keeps words like "Up" or "C-c" from being read as key names.
        self.runner.run(&format!(
            "tmux send-keys -t {target} -l {}",
            shell_escape(command)
        ))?;
        self.runner.run(&format!("tmux send-keys -t {target} Enter"))?;
        if self.inside_tmux {
            self.runner.run(&format!("tmux select-window -t {target}"))?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        if self.inside_tmux {
            "tmux".to_string()
        } else {
            format!("tmux:{SESSION_NAME}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::runner::MockCommandRunner;
    use mockall::predicate::{eq, str::starts_with};
    use mockall::Sequence;

    fn session(runner: MockCommandRunner, inside: bool) -> TmuxSession<MockCommandRunner> {
        TmuxSession::new(runner, PathBuf::from("/work/my project"), inside)
    }

    #[test]
    fn test_first_send_creates_window_then_sends() {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        runner
            .expect_run()
            .with(starts_with("tmux new-window -d -P -F '#{pane_id}' -n 'Script Buttons' -c '/work/my project'"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("%7\n".to_string()));
        runner
            .expect_run()
            .with(eq("tmux send-keys -t %7 -l 'npm run dev'"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(String::new()));
        runner
            .expect_run()
            .with(eq("tmux send-keys -t %7 Enter"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(String::new()));
        runner
            .expect_run()
            .with(eq("tmux select-window -t %7"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(String::new()));

        let mut tmux = session(runner, true);
        tmux.send_text("npm run dev").unwrap();
        assert_eq!(tmux.pane.as_deref(), Some("%7"));
    }

    #[test]
    fn test_live_pane_is_reused() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .with(starts_with("tmux display-message"))
            .times(1)
            .returning(|_| Ok("0\n".to_string()));
        runner
            .expect_run()
            .with(starts_with("tmux send-keys -t %3"))
            .times(2)
            .returning(|_| Ok(String::new()));
        runner.expect_run().with(starts_with("tmux new-")).never();

        let mut tmux = session(runner, false);
        tmux.pane = Some("%3".to_string());
        tmux.send_text("make").unwrap();
    }

    #[test]
    fn test_exited_pane_is_replaced() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .with(starts_with("tmux display-message"))
            .returning(|_| Err(anyhow::anyhow!("can't find pane: %3")));
        runner
            .expect_run()
            .with(starts_with("tmux new-session"))
            .times(1)
            .returning(|_| Ok("%9".to_string()));
        runner
            .expect_run()
            .with(starts_with("tmux send-keys -t %9"))
            .times(2)
            .returning(|_| Ok(String::new()));

        let mut tmux = session(runner, false);
        tmux.pane = Some("%3".to_string());
        tmux.send_text("make").unwrap();
        assert_eq!(tmux.pane.as_deref(), Some("%9"));
    }

    #[test]
    fn test_existing_detached_session_gets_a_new_window() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .with(starts_with("tmux new-session"))
            .returning(|_| Err(anyhow::anyhow!("duplicate session: script-buttons")));
        runner
            .expect_run()
            .with(starts_with("tmux new-window -d -P -F '#{pane_id}' -t script-buttons:"))
            .times(1)
            .returning(|_| Ok("%4".to_string()));
        runner
            .expect_run()
            .with(starts_with("tmux send-keys"))
            .returning(|_| Ok(String::new()));

        let mut tmux = session(runner, false);
        tmux.send_text("ls").unwrap();
        assert_eq!(tmux.describe(), "tmux:script-buttons");
    }

    #[test]
    fn test_tmux_failure_is_reported() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_| Err(anyhow::anyhow!("no server running")));

        let mut tmux = session(runner, true);
        let err = tmux.send_text("ls").unwrap_err();
        assert!(format!("{err:#}").contains("no server running"));
        assert!(tmux.pane.is_none());
    }

    #[test]
    fn test_key_name_commands_are_sent_literally() {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        runner
            .expect_run()
            .with(starts_with("tmux display-message"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("0\n".to_string()));
        runner
            .expect_run()
            .with(eq("tmux send-keys -t %5 -l Up"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(String::new()));
        runner
            .expect_run()
            .with(eq("tmux send-keys -t %5 Enter"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(String::new()));

        let mut tmux = session(runner, false);
        tmux.pane = Some("%5".to_string());
        tmux.send_text("Up").unwrap();
    }
}
