use crate::app::{
    action::Action,
    command::Command,
    config,
    external::{run_suspended, InputGate},
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};
use crate::domain::store::ButtonStore;
use crate::domain::terminal::TerminalSession;
use crate::infrastructure::watcher::{FileChange, FileWatcher, DEBOUNCE};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Everything the loop drives besides the UI state.
pub struct Runtime {
    pub store: ButtonStore,
    pub session: Box<dyn TerminalSession>,
    /// Where theme changes are saved. `None` keeps them in memory only.
    pub config_path: Option<PathBuf>,
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    runtime: Runtime,
) -> Result<()> {
    let gate = InputGate::default();
    let event_rx = spawn_event_reader(gate.clone());
    run_loop_with_events(terminal, app_state, runtime, event_rx, gate).await
}

/// Reads terminal events on a blocking thread. While the gate is paused
/// stdin belongs to a foreground command and is left alone.
fn spawn_event_reader(gate: InputGate) -> mpsc::Receiver<Result<Event, std::io::Error>> {
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        if event_tx.is_closed() {
            break;
        }
        if gate.is_paused() {
            std::thread::sleep(INPUT_POLL);
            continue;
        }
        let ready = match event::poll(INPUT_POLL) {
            Ok(ready) => ready,
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        };
        if !ready || gate.is_paused() {
            continue;
        }
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });
    event_rx
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut runtime: Runtime,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
    gate: InputGate,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Store notifications only say "something changed"; the list is fetched
    // again through RefreshButtons.
    let notify_tx = action_tx.clone();
    let subscription = runtime.store.subscribe(move || {
        let _ = notify_tx.try_send(Action::ButtonsChanged);
    });

    // Buttons file watcher
    let (file_tx, mut file_rx) = mpsc::channel(8);
    let _watcher = match runtime.store.location() {
        Some(path) => match FileWatcher::spawn(path, DEBOUNCE, file_tx.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                tracing::warn!(error = %e, "buttons file watcher unavailable");
                emit(
                    &action_tx,
                    Action::Warning(format!("Not watching the buttons file: {e}")),
                );
                None
            }
        },
        None => None,
    };

    // Initial Load
    reducer::update(&mut app_state, Action::ButtonsLoaded(runtime.store.get_all()));
    forward_warnings(&mut runtime.store, &action_tx);

    let result = loop {
        // --- 1. Render ---
        if let Err(e) = terminal.draw(|f| ui::draw(f, &mut app_state)) {
            break Err(e.into());
        }

        // --- 2. Event Handling ---
        // Pending results go first so a burst of input cannot starve them.
        let action = tokio::select! {
            biased;

            Some(a) = action_rx.recv() => Some(a),

            Some(change) = file_rx.recv() => Some(match change {
                FileChange::Changed => Action::ButtonsFileChanged,
                FileChange::Removed => Action::ButtonsFileRemoved,
            }),

            res = event_rx.recv() => match res {
                Some(Ok(event)) => {
                    let size = match terminal.size() {
                        Ok(size) => size,
                        Err(e) => break Err(e.into()),
                    };
                    map_event_to_action(event, &app_state, size)
                }
                Some(Err(e)) => break Err(e.into()),
                // Input is gone; nothing can drive the UI anymore
                None => break Ok(()),
            },

            _ = interval.tick() => Some(Action::Tick),
        };

        // --- 3. Update (Reducer) ---
        let Some(action) = action else {
            continue;
        };
        let command = reducer::update(&mut app_state, action);
        if app_state.should_quit {
            break Ok(());
        }

        // --- 4. Side effects ---
        if let Some(cmd) = command {
            if let Err(e) = handle_command(cmd, terminal, &mut runtime, &gate, &action_tx).await {
                break Err(e);
            }
        }
    };

    runtime.store.unsubscribe(subscription);
    drop(file_tx);
    tracing::info!("event loop finished");
    result
}

/// Runs one command to completion and reports back through `tx`.
///
/// Only terminal failures are returned; everything else becomes an action.
pub(crate) async fn handle_command<B: Backend>(
    command: Command,
    terminal: &mut Terminal<B>,
    runtime: &mut Runtime,
    gate: &InputGate,
    tx: &mpsc::Sender<Action>,
) -> Result<()> {
    tracing::debug!(?command, "handling command");
    match command {
        Command::AddButton { label, command } => {
            runtime.store.add(&label, &command).await;
            emit(
                tx,
                Action::OperationCompleted(Ok(format!("Button \"{label}\" added successfully"))),
            );
        }
        Command::UpdateButton { id, label, command } => {
            let result = if runtime.store.update(&id, &label, &command).await {
                Ok(format!("Button \"{label}\" updated successfully"))
            } else {
                Err("Failed to update button".to_string())
            };
            emit(tx, Action::OperationCompleted(result));
        }
        Command::DeleteButton { id, label } => {
            let result = if runtime.store.delete(&id).await {
                Ok(format!("Button \"{label}\" deleted successfully"))
            } else {
                Err("Failed to delete button".to_string())
            };
            emit(tx, Action::OperationCompleted(result));
        }
        Command::ExecuteButton(id) => {
            let Some(button) = runtime.store.get_by_id(&id).cloned() else {
                emit(
                    tx,
                    Action::OperationCompleted(Err("Button no longer exists".to_string())),
                );
                return Ok(());
            };

            tracing::info!(label = %button.label, session = %runtime.session.describe(), "executing button");
            let sent = if runtime.session.is_foreground() {
                run_suspended(terminal, gate, runtime.session.as_mut(), &button.command)
            } else {
                runtime.session.send_text(&button.command)
            };

            let result = match sent {
                Ok(()) => Ok(format!("Executing: {}", button.label)),
                Err(e) => {
                    tracing::error!(error = %e, label = %button.label, "command failed to start");
                    Err(format!("Failed to execute command: {e:#}"))
                }
            };
            emit(tx, Action::OperationCompleted(result));
        }
        Command::RefreshButtons => {
            emit(tx, Action::ButtonsLoaded(runtime.store.get_all()));
        }
        Command::ReloadButtons => {
            runtime.store.reload().await;
        }
        Command::ClearButtons => {
            runtime.store.clear();
        }
        Command::SaveTheme(palette) => match &runtime.config_path {
            Some(path) => {
                if let Err(e) = config::save_theme(path, palette) {
                    tracing::warn!(error = %e, "failed to save theme");
                    emit(tx, Action::Warning(format!("Failed to save theme: {e:#}")));
                }
            }
            None => tracing::debug!(theme = palette.label(), "no config path, theme not saved"),
        },
    }

    forward_warnings(&mut runtime.store, tx);
    Ok(())
}

fn forward_warnings(store: &mut ButtonStore, tx: &mpsc::Sender<Action>) {
    for warning in store.take_warnings() {
        emit(tx, Action::Warning(warning));
    }
}

fn emit(tx: &mpsc::Sender<Action>, action: Action) {
    if let Err(e) = tx.try_send(action) {
        tracing::warn!(error = %e, "dropped action, queue is full");
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
