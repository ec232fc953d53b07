use crate::domain::models::{ButtonRecord, StoredButton};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("No workspace folder open. Cannot save script buttons.")]
    NoWorkspace,
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode script buttons: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable home of the button list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ButtonBackend: Send + Sync {
    /// `Ok(None)` when nothing has been persisted yet (or there is nowhere to
    /// persist to).
    async fn read(&self) -> Result<Option<Vec<StoredButton>>, PersistError>;

    /// Replaces the whole persisted list.
    async fn write(&self, buttons: &[ButtonRecord]) -> Result<(), PersistError>;

    /// The file being read and written, when there is one.
    fn location(&self) -> Option<PathBuf>;
}
