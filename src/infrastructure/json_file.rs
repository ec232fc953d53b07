use crate::domain::models::{ButtonRecord, ButtonsDocument, StoredButton};
use crate::domain::storage::{ButtonBackend, PersistError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_BUTTONS_FILE: &str = ".vscode/scriptbuttons.json";

/// `{ "buttons": [...] }` in a file under the workspace.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: Option<PathBuf>,
}

impl JsonFileBackend {
    /// `relative` is resolved against `workspace`; an absolute `relative`
    /// is used as is.
    #[must_use]
    pub fn new(workspace: Option<&Path>, relative: &Path) -> Self {
        Self {
            path: workspace.map(|root| root.join(relative)),
        }
    }

    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Nothing can be persisted; reads come back empty and writes fail.
    #[must_use]
    pub fn without_workspace() -> Self {
        Self { path: None }
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}

#[async_trait]
impl ButtonBackend for JsonFileBackend {
    async fn read(&self) -> Result<Option<Vec<StoredButton>>, PersistError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };

        let doc: ButtonsDocument<StoredButton> =
            serde_json::from_str(&content).map_err(|source| PersistError::Parse {
                path: path.clone(),
                source,
            })?;
        Ok(Some(doc.buttons))
    }

    async fn write(&self, buttons: &[ButtonRecord]) -> Result<(), PersistError> {
        let Some(path) = &self.path else {
            return Err(PersistError::NoWorkspace);
        };
        let write_err = |source| PersistError::Write {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let doc = ButtonsDocument {
            buttons: buttons.to_vec(),
        };
        let mut content = serde_json::to_string_pretty(&doc)?;
        content.push('\n');

        // Write next to the target and rename over it, so a watcher never
        // observes a half-written file.
        let temp = Self::temp_path(path);
        tokio::fs::write(&temp, content).await.map_err(write_err)?;
        tokio::fs::rename(&temp, path).await.map_err(write_err)?;
        tracing::debug!(path = %path.display(), count = buttons.len(), "script buttons saved");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
