use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::{AppState, ErrorSeverity},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let UpdateResult::Handled(cmd) = features::navigation::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::buttons::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::ui::update(state, &action) {
        return cmd;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
        }

        // --- Async Results ---
        Action::OperationCompleted(result) => match result {
            Ok(msg) => state.set_status(msg),
            Err(err) => state.set_error(err, ErrorSeverity::Error),
        },
        Action::Warning(msg) => {
            state.set_error(msg, ErrorSeverity::Warning);
        }

        // Layout is recomputed on every draw
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::STATUS_TIMEOUT;

    #[test]
    fn test_status_expires_on_tick() {
        let mut state = AppState::default();
        update(&mut state, Action::OperationCompleted(Ok("Executing: Build".into())));
        assert_eq!(state.status_message.as_deref(), Some("Executing: Build"));

        update(&mut state, Action::Tick);
        assert!(state.status_message.is_some());

        state.status_clear_time = Some(Instant::now() - STATUS_TIMEOUT);
        update(&mut state, Action::Tick);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_failures_raise_error_modal() {
        let mut state = AppState::default();
        update(&mut state, Action::OperationCompleted(Err("Failed to delete button".into())));
        let err = state.last_error.as_ref().unwrap();
        assert_eq!(err.severity, ErrorSeverity::Error);
        assert_eq!(err.message, "Failed to delete button");

        update(
            &mut state,
            Action::Warning("No workspace folder open. Cannot save script buttons.".into()),
        );
        let err = state.last_error.as_ref().unwrap();
        assert_eq!(err.severity, ErrorSeverity::Error);
        assert!(!err.suggestions.is_empty());
    }

    #[test]
    fn test_queued_warning_does_not_replace_shown_error() {
        let mut state = AppState::default();
        update(&mut state, Action::Warning("Failed to load script buttons".into()));
        update(&mut state, Action::Warning("File watcher unavailable".into()));

        let err = state.last_error.as_ref().unwrap();
        assert_eq!(err.message, "Failed to load script buttons");
        assert_eq!(err.followups, vec!["File watcher unavailable".to_string()]);
        assert_eq!(err.severity, ErrorSeverity::Warning);

        update(&mut state, Action::DismissError);
        assert!(state.last_error.is_none());

        update(&mut state, Action::Warning("File watcher unavailable".into()));
        let err = state.last_error.as_ref().unwrap();
        assert_eq!(err.message, "File watcher unavailable");
        assert!(err.followups.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }
}
