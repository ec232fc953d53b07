use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
    pub suggestions: Vec<String>,
    /// Messages that arrived while this one was still on screen.
    pub followups: Vec<String>,
}

impl ErrorState {
    pub fn new(message: impl Into<String>, severity: ErrorSeverity) -> Self {
        let message = message.into();
        Self {
            suggestions: crate::app::recovery::get_suggestions(&message),
            message,
            timestamp: Local::now(),
            severity,
            followups: Vec::new(),
        }
    }

    /// Queues a later message behind the one being shown.
    pub fn absorb(&mut self, message: String, severity: ErrorSeverity) {
        self.severity = self.severity.max(severity);
        for tip in crate::app::recovery::get_suggestions(&message) {
            if !self.suggestions.contains(&tip) {
                self.suggestions.push(tip);
            }
        }
        self.followups.push(message);
    }
}
