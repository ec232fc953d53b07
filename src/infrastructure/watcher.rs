//! Observes the buttons file for changes made outside this process.
//!
//! The file (and its directory) may not exist yet, so the nearest existing
//! ancestor is watched and the watch moves closer as directories appear.
//! Raw events are debounced, then classified by whether the file exists.

use anyhow::Result;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChange {
    /// Created or modified: reload.
    Changed,
    /// Deleted: clear.
    Removed,
}

pub struct FileWatcher {
    task: JoinHandle<()>,
}

impl FileWatcher {
    /// Starts watching `target`; changes arrive on `tx` until the receiver
    /// is dropped or the watcher is.
    pub fn spawn(target: PathBuf, debounce: Duration, tx: mpsc::Sender<FileChange>) -> Result<Self> {
        let (raw_tx, raw_rx) = mpsc::channel(1);
        let filter_target = target.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            if let Ok(event) = res {
                if event.paths.iter().any(|p| is_relevant(&filter_target, p)) {
                    let _ = raw_tx.try_send(());
                }
            }
        })?;

        let watched = nearest_existing_dir(&target);
        watcher.watch(&watched, RecursiveMode::NonRecursive)?;
        tracing::debug!(target = %target.display(), watched = %watched.display(), "watching buttons file");

        let task = tokio::spawn(debounce_loop(watcher, watched, target, debounce, raw_rx, tx));
        Ok(Self { task })
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn debounce_loop(
    mut watcher: RecommendedWatcher,
    mut watched: PathBuf,
    target: PathBuf,
    debounce: Duration,
    mut raw_rx: mpsc::Receiver<()>,
    tx: mpsc::Sender<FileChange>,
) {
    let mut existed = target.exists();
    let mut pending = false;

    loop {
        if pending {
            tokio::select! {
                Some(()) = raw_rx.recv() => {}
                () = tokio::time::sleep(debounce) => {
                    pending = false;
                    rearm(&mut watcher, &mut watched, &target);

                    let exists = target.exists();
                    let change = match (existed, exists) {
                        (_, true) => Some(FileChange::Changed),
                        (true, false) => Some(FileChange::Removed),
                        (false, false) => None,
                    };
                    existed = exists;

                    if let Some(change) = change {
                        tracing::debug!(?change, "buttons file changed on disk");
                        if tx.send(change).await.is_err() {
                            break;
                        }
                    }
                }
            }
        } else {
            tokio::select! {
                received = raw_rx.recv() => {
                    if received.is_none() {
                        break;
                    }
                    pending = true;
                }
                () = tx.closed() => break,
            }
        }
    }
}

fn rearm(watcher: &mut RecommendedWatcher, watched: &mut PathBuf, target: &Path) {
    let nearest = nearest_existing_dir(target);
    if nearest == *watched {
        return;
    }
    let _ = watcher.unwatch(watched);
    match watcher.watch(&nearest, RecursiveMode::NonRecursive) {
        Ok(()) => {
            tracing::debug!(watched = %nearest.display(), "moved buttons file watch");
            *watched = nearest;
        }
        Err(e) => tracing::warn!(error = %e, "failed to move buttons file watch"),
    }
}

/// The closest existing directory that contains (or will contain) `target`.
fn nearest_existing_dir(target: &Path) -> PathBuf {
    target
        .ancestors()
        .skip(1)
        .find(|p| p.is_dir())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Events for the file itself, or for a directory on the way to it.
fn is_relevant(target: &Path, event_path: &Path) -> bool {
    event_path == target || target.starts_with(event_path)
}
