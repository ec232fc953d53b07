pub mod foreground;
pub mod json_file;
pub mod runner;
pub mod tmux;
pub mod watcher;
