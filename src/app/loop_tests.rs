use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::{AppMode, AppState};
use crate::domain::models::{ButtonId, StoredButton};
use crate::domain::storage::{MockButtonBackend, PersistError};
use crate::domain::terminal::MockTerminalSession;
use crate::theme::PaletteType;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use mockall::predicate::eq;
use mockall::Sequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn backend_ok() -> MockButtonBackend {
    let mut backend = MockButtonBackend::new();
    backend.expect_read().returning(|| Ok(None));
    backend.expect_write().returning(|_| Ok(()));
    backend.expect_location().returning(|| None);
    backend
}

fn background_session() -> MockTerminalSession {
    let mut session = MockTerminalSession::new();
    session.expect_is_foreground().return_const(false);
    session
        .expect_describe()
        .returning(|| "tmux: Script Buttons".to_string());
    session
}

async fn runtime(backend: MockButtonBackend, session: MockTerminalSession) -> Runtime {
    Runtime {
        store: ButtonStore::open_with_rng(Arc::new(backend), StdRng::seed_from_u64(3)).await,
        session: Box::new(session),
        config_path: None,
    }
}

fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

fn drain(rx: &mut mpsc::Receiver<Action>) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Ok(action) = rx.try_recv() {
        actions.push(action);
    }
    actions
}

#[tokio::test]
async fn test_add_then_execute() {
    let mut session = background_session();
    session
        .expect_send_text()
        .with(eq("cargo build"))
        .times(1)
        .returning(|_| Ok(()));
    let mut rt = runtime(backend_ok(), session).await;
    let mut terminal = test_terminal();
    let gate = InputGate::default();
    let (tx, mut rx) = mpsc::channel(16);

    let add = Command::AddButton {
        label: "Build".to_string(),
        command: "cargo build".to_string(),
    };
    handle_command(add, &mut terminal, &mut rt, &gate, &tx).await.unwrap();
    assert_eq!(
        drain(&mut rx),
        vec![Action::OperationCompleted(Ok(
            "Button \"Build\" added successfully".to_string()
        ))]
    );

    let id = rt.store.get_all()[0].id.clone();
    handle_command(Command::ExecuteButton(id), &mut terminal, &mut rt, &gate, &tx)
        .await
        .unwrap();
    assert_eq!(
        drain(&mut rx),
        vec![Action::OperationCompleted(Ok("Executing: Build".to_string()))]
    );
}

#[tokio::test]
async fn test_unknown_ids_report_failure() {
    let mut rt = runtime(backend_ok(), background_session()).await;
    let mut terminal = test_terminal();
    let gate = InputGate::default();
    let (tx, mut rx) = mpsc::channel(16);
    let ghost = ButtonId::from("button-gone");

    let update = Command::UpdateButton {
        id: ghost.clone(),
        label: "x".to_string(),
        command: "y".to_string(),
    };
    handle_command(update, &mut terminal, &mut rt, &gate, &tx).await.unwrap();
    let delete = Command::DeleteButton {
        id: ghost,
        label: "x".to_string(),
    };
    handle_command(delete, &mut terminal, &mut rt, &gate, &tx).await.unwrap();

    assert_eq!(
        drain(&mut rx),
        vec![
            Action::OperationCompleted(Err("Failed to update button".to_string())),
            Action::OperationCompleted(Err("Failed to delete button".to_string())),
        ]
    );
}

#[tokio::test]
async fn test_execute_failure_becomes_error() {
    let mut session = background_session();
    session
        .expect_send_text()
        .returning(|_| Err(anyhow::anyhow!("no server running")));
    let mut rt = runtime(backend_ok(), session).await;
    let mut terminal = test_terminal();
    let gate = InputGate::default();
    let (tx, mut rx) = mpsc::channel(16);

    let record = rt.store.add("Serve", "npm start").await;
    handle_command(Command::ExecuteButton(record.id), &mut terminal, &mut rt, &gate, &tx)
        .await
        .unwrap();

    let actions = drain(&mut rx);
    assert!(matches!(
        actions.as_slice(),
        [Action::OperationCompleted(Err(msg))] if msg.starts_with("Failed to execute command: no server")
    ));
}

#[tokio::test]
async fn test_write_failure_surfaces_warning() {
    let mut backend = MockButtonBackend::new();
    backend.expect_read().returning(|| Ok(None));
    backend
        .expect_write()
        .returning(|_| Err(PersistError::NoWorkspace));
    backend.expect_location().returning(|| None);
    let mut rt = runtime(backend, background_session()).await;
    let mut terminal = test_terminal();
    let gate = InputGate::default();
    let (tx, mut rx) = mpsc::channel(16);

    let add = Command::AddButton {
        label: "Lint".to_string(),
        command: "cargo clippy".to_string(),
    };
    handle_command(add, &mut terminal, &mut rt, &gate, &tx).await.unwrap();

    // The button stays in memory for this session
    assert_eq!(rt.store.len(), 1);
    let actions = drain(&mut rx);
    assert_eq!(actions.len(), 2);
    assert!(matches!(&actions[1], Action::Warning(msg) if msg.contains("No workspace folder open")));
}

#[tokio::test]
async fn test_full_command_error_to_state() {
    let mut rt = runtime(backend_ok(), background_session()).await;
    let mut terminal = test_terminal();
    let gate = InputGate::default();
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::default();

    let cmd = Command::DeleteButton {
        id: ButtonId::from("button-gone"),
        label: "Old".to_string(),
    };
    handle_command(cmd, &mut terminal, &mut rt, &gate, &tx).await.unwrap();

    let action = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action);
    assert_eq!(state.mode, AppMode::Normal);
    assert_eq!(
        state.last_error.as_ref().map(|e| e.message.as_str()),
        Some("Failed to delete button")
    );
}

#[tokio::test]
async fn test_theme_without_config_path_stays_quiet() {
    let mut rt = runtime(backend_ok(), background_session()).await;
    let mut terminal = test_terminal();
    let gate = InputGate::default();
    let (tx, mut rx) = mpsc::channel(16);

    handle_command(Command::SaveTheme(PaletteType::Nord), &mut terminal, &mut rt, &gate, &tx)
        .await
        .unwrap();
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_theme_is_saved_to_config_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut rt = runtime(backend_ok(), background_session()).await;
    rt.config_path = Some(path.clone());
    let mut terminal = test_terminal();
    let gate = InputGate::default();
    let (tx, _rx) = mpsc::channel(16);

    handle_command(Command::SaveTheme(PaletteType::Nord), &mut terminal, &mut rt, &gate, &tx)
        .await
        .unwrap();
    assert_eq!(config::load_from(&path).theme, Some(PaletteType::Nord));
}

/// Feeds `action` through the reducer and runs whatever command comes out.
async fn dispatch(
    state: &mut AppState<'_>,
    action: Action,
    terminal: &mut Terminal<TestBackend>,
    rt: &mut Runtime,
    gate: &InputGate,
    tx: &mpsc::Sender<Action>,
) {
    if let Some(command) = crate::app::reducer::update(state, action) {
        handle_command(command, terminal, rt, gate, tx).await.unwrap();
    }
}

#[tokio::test]
async fn test_external_edit_and_removal_reach_the_view() {
    let mut backend = MockButtonBackend::new();
    let mut seq = Sequence::new();
    backend
        .expect_read()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(None));
    backend
        .expect_read()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| {
            Ok(Some(vec![StoredButton {
                id: Some("ext-1".to_string()),
                label: "Lint".to_string(),
                command: "cargo clippy".to_string(),
                emoji: Some("🧹".to_string()),
                color: Some("charts.yellow".to_string()),
            }]))
        });
    backend.expect_write().never();
    backend.expect_location().returning(|| None);

    let mut rt = runtime(backend, background_session()).await;
    let mut terminal = test_terminal();
    let gate = InputGate::default();
    let (tx, mut rx) = mpsc::channel(16);
    let notify_tx = tx.clone();
    rt.store.subscribe(move || {
        let _ = notify_tx.try_send(Action::ButtonsChanged);
    });
    let mut state = AppState::default();

    // File modified on disk: reload, then the store notification refreshes the list.
    dispatch(&mut state, Action::ButtonsFileChanged, &mut terminal, &mut rt, &gate, &tx).await;
    assert_eq!(drain(&mut rx), vec![Action::ButtonsChanged]);
    dispatch(&mut state, Action::ButtonsChanged, &mut terminal, &mut rt, &gate, &tx).await;
    let loaded = drain(&mut rx);
    assert!(matches!(&loaded[..], [Action::ButtonsLoaded(list)] if list.len() == 1));
    for action in loaded {
        dispatch(&mut state, action, &mut terminal, &mut rt, &gate, &tx).await;
    }
    assert_eq!(state.buttons.len(), 1);
    assert_eq!(state.buttons[0].id, ButtonId::from("ext-1"));
    assert_eq!(state.buttons[0].label, "Lint");

    // File deleted on disk: the list empties the same way.
    dispatch(&mut state, Action::ButtonsFileRemoved, &mut terminal, &mut rt, &gate, &tx).await;
    assert_eq!(drain(&mut rx), vec![Action::ButtonsChanged]);
    dispatch(&mut state, Action::ButtonsChanged, &mut terminal, &mut rt, &gate, &tx).await;
    for action in drain(&mut rx) {
        dispatch(&mut state, action, &mut terminal, &mut rt, &gate, &tx).await;
    }
    assert!(rt.store.is_empty());
    assert!(state.buttons.is_empty());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut session = background_session();
    session.expect_send_text().returning(|_| Ok(()));
    let rt = runtime(backend_ok(), session).await;

    let mut terminal = test_terminal();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Dropping the sender ends the loop even if a prompt swallows 'q'
        let _ = event_tx
            .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, rt, event_rx, InputGate::default()),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::KeyEvent;
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
