use crate::domain::terminal::TerminalSession;
use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared switch telling the input reader to leave stdin alone while a
/// foreground command owns the terminal.
#[derive(Debug, Clone, Default)]
pub struct InputGate(Arc<AtomicBool>);

impl InputGate {
    pub fn pause(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Re-opens the gate however `run_suspended` exits.
struct ResumeOnDrop<'a>(&'a InputGate);

impl Drop for ResumeOnDrop<'_> {
    fn drop(&mut self) {
        self.0.resume();
    }
}

fn suspend_tui() -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    Ok(())
}

fn restore_tui<B: Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    // Clear the terminal to remove any leftover output from the command
    terminal.clear()?;
    Ok(())
}

/// Hands the terminal to `session` for one command, then restores the TUI.
///
/// The command's own error wins over a restore error.
pub fn run_suspended<B: Backend>(
    terminal: &mut Terminal<B>,
    gate: &InputGate,
    session: &mut dyn TerminalSession,
    command: &str,
) -> Result<()> {
    gate.pause();
    let _resume = ResumeOnDrop(gate);

    let result = suspend_tui().and_then(|()| session.send_text(command));
    let restore = restore_tui(terminal);
    if let Err(e) = &restore {
        tracing::warn!("Failed to restore terminal after command: {e:#}");
    }

    result.and(restore)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::terminal::MockTerminalSession;
    use ratatui::backend::TestBackend;
    use std::io::IsTerminal;

    #[test]
    fn test_gate_is_shared_between_clones() {
        let gate = InputGate::default();
        let reader_side = gate.clone();
        assert!(!reader_side.is_paused());

        gate.pause();
        assert!(reader_side.is_paused());
        gate.resume();
        assert!(!reader_side.is_paused());
    }

    #[test]
    fn test_gate_reopens_when_terminal_switch_fails() {
        // Without a tty the raw mode calls fail, which is the path under test.
        if std::io::stdout().is_terminal() {
            return;
        }
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let gate = InputGate::default();
        let mut session = MockTerminalSession::new();
        session.expect_send_text().returning(|_| Ok(()));

        let result = run_suspended(&mut terminal, &gate, &mut session, "ls");

        assert!(result.is_err());
        assert!(!gate.is_paused());
    }

    #[test]
    fn test_gate_reopens_after_failed_command() {
        if std::io::stdout().is_terminal() {
            return;
        }
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let gate = InputGate::default();
        let mut session = MockTerminalSession::new();
        session
            .expect_send_text()
            .returning(|_| Err(anyhow::anyhow!("exit status 2")));

        assert!(run_suspended(&mut terminal, &gate, &mut session, "false").is_err());
        assert!(!gate.is_paused());
    }
}
