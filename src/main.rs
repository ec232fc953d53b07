use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scriptbuttons::app::config::{self, Config, RunnerKind};
use scriptbuttons::app::r#loop::{run_loop, Runtime};
use scriptbuttons::app::state::AppState;
use scriptbuttons::domain::store::ButtonStore;
use scriptbuttons::domain::terminal::TerminalSession;
use scriptbuttons::infrastructure::{
    foreground::ForegroundShell,
    json_file::{JsonFileBackend, DEFAULT_BUTTONS_FILE},
    runner::ShellRunner,
    tmux::TmuxSession,
};

/// One-click shell command buttons for a project, in your terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Workspace folder holding the buttons file (defaults to the current directory)
    workspace: Option<PathBuf>,
    /// Buttons file, relative to the workspace
    #[arg(short = 'f', long)]
    buttons_file: Option<PathBuf>,
}

fn init_logging(config: &Config) {
    let log_path = config::get_config_dir()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .map_or_else(
            || PathBuf::from("scriptbuttons.log"),
            |dir| dir.join("scriptbuttons.log"),
        );

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not open log file {log_path:?}: {e}");
            return;
        }
    };

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .init();
}

fn make_session(kind: RunnerKind, cwd: PathBuf) -> Box<dyn TerminalSession> {
    let inside_tmux = std::env::var_os("TMUX").is_some_and(|v| !v.is_empty());
    match kind {
        RunnerKind::Tmux => Box::new(TmuxSession::new(ShellRunner, cwd, inside_tmux)),
        RunnerKind::Auto if inside_tmux => Box::new(TmuxSession::new(ShellRunner, cwd, true)),
        RunnerKind::Auto | RunnerKind::Foreground => Box::new(ForegroundShell::from_env(cwd)),
    }
}

fn workspace_label(workspace: Option<&Path>) -> String {
    workspace
        .and_then(|path| path.file_name())
        .map_or_else(
            || "no workspace".to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    let args = Args::parse();
    let config = config::load_config();
    init_logging(&config);

    // Everything that can fail on disk happens BEFORE terminal setup,
    // so the terminal is never left in raw mode.
    let requested = args.workspace.unwrap_or_else(|| PathBuf::from("."));
    let workspace = std::fs::canonicalize(&requested)
        .ok()
        .filter(|path| path.is_dir());
    if workspace.is_none() {
        tracing::warn!(path = %requested.display(), "not a directory, running without a workspace");
    }

    let relative = args
        .buttons_file
        .or_else(|| config.buttons_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUTTONS_FILE));
    let backend = match &workspace {
        Some(root) => JsonFileBackend::new(Some(root), &relative),
        None => JsonFileBackend::without_workspace(),
    };
    let store = ButtonStore::open(Arc::new(backend)).await;
    tracing::info!(count = store.len(), location = ?store.location(), "script buttons ready");

    let cwd = workspace
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let session = make_session(config.runner.unwrap_or_default(), cwd);

    let mut app_state = AppState::new(config.theme.unwrap_or_default());
    app_state.workspace_label = workspace_label(workspace.as_deref());
    app_state.session_label = session.describe();

    let runtime = Runtime {
        store,
        session,
        config_path: config::get_config_path(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, runtime).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "scriptbuttons exited with an error");
        eprintln!("{err:?}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_current_dir_and_configured_file() {
        let args = Args::try_parse_from(["scriptbuttons"]).unwrap();
        assert!(args.workspace.is_none());
        assert!(args.buttons_file.is_none());
    }

    #[test]
    fn test_workspace_and_buttons_file() {
        let args =
            Args::try_parse_from(["scriptbuttons", "-f", "tools/buttons.json", "/srv/app"]).unwrap();
        assert_eq!(args.workspace, Some(PathBuf::from("/srv/app")));
        assert_eq!(args.buttons_file, Some(PathBuf::from("tools/buttons.json")));

        let args =
            Args::try_parse_from(["scriptbuttons", "--buttons-file", "b.json"]).unwrap();
        assert_eq!(args.buttons_file, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["scriptbuttons", "--nope"]).is_err());
    }

    #[test]
    fn test_workspace_label_uses_folder_name() {
        assert_eq!(workspace_label(Some(Path::new("/srv/my-app"))), "my-app");
        assert_eq!(workspace_label(None), "no workspace");
    }
}
