use anyhow::Result;

/// Where button commands run.
///
/// An implementation owns at most one live session: if none exists, or the
/// previous one has exited, a new one is created before the text is sent.
#[cfg_attr(test, mockall::automock)]
pub trait TerminalSession: Send {
    /// True when running a command takes over the user's terminal, so the
    /// TUI has to step aside while it runs.
    fn is_foreground(&self) -> bool;

    /// Sends the command text verbatim. Nothing here parses or validates it.
    fn send_text(&mut self, command: &str) -> Result<()>;

    /// Short human readable name, shown in the header.
    fn describe(&self) -> String;
}
