//! The authoritative, ordered list of buttons.
//!
//! Memory is updated before the write is awaited, so readers always see the
//! state that is being persisted. Persistence failures never roll memory back;
//! they are queued as warnings for the caller to surface.

use crate::domain::models::{ButtonId, ButtonRecord, StoredButton};
use crate::domain::notifier::{ChangeNotifier, SubscriptionId};
use crate::domain::palette;
use crate::domain::storage::{ButtonBackend, PersistError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

pub struct ButtonStore {
    buttons: Vec<ButtonRecord>,
    backend: Arc<dyn ButtonBackend>,
    notifier: ChangeNotifier,
    issued_ids: HashSet<ButtonId>,
    warnings: Vec<String>,
    rng: StdRng,
}

impl ButtonStore {
    pub async fn open(backend: Arc<dyn ButtonBackend>) -> Self {
        Self::open_with_rng(backend, StdRng::from_entropy()).await
    }

    /// Loads the persisted list, backfilling missing fields. A backfilled
    /// list is written back once, without notifying.
    pub async fn open_with_rng(backend: Arc<dyn ButtonBackend>, rng: StdRng) -> Self {
        let mut store = Self {
            buttons: Vec::new(),
            backend,
            notifier: ChangeNotifier::default(),
            issued_ids: HashSet::new(),
            warnings: Vec::new(),
            rng,
        };
        store.load().await;
        store
    }

    #[must_use]
    pub fn get_all(&self) -> Vec<ButtonRecord> {
        self.buttons.clone()
    }

    #[must_use]
    pub fn get_by_id(&self, id: &ButtonId) -> Option<&ButtonRecord> {
        self.buttons.iter().find(|b| &b.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    #[must_use]
    pub fn location(&self) -> Option<PathBuf> {
        self.backend.location()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Drains warnings queued by failed reads and writes.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub async fn add(&mut self, label: &str, command: &str) -> ButtonRecord {
        let record = ButtonRecord {
            id: self.fresh_id(),
            label: label.to_string(),
            command: command.to_string(),
            emoji: palette::random_emoji(&mut self.rng),
            color: palette::random_color(&mut self.rng),
        };
        self.buttons.push(record.clone());
        tracing::info!(id = %record.id, label = %record.label, "button added");
        self.persist().await;
        // Memory changed even if the write did not, so the view still refreshes.
        self.notifier.fire();
        record
    }

    /// Replaces label and command; emoji, color and position are kept.
    pub async fn update(&mut self, id: &ButtonId, label: &str, command: &str) -> bool {
        let Some(button) = self.buttons.iter_mut().find(|b| &b.id == id) else {
            tracing::debug!(%id, "update of unknown button ignored");
            return false;
        };
        button.label = label.to_string();
        button.command = command.to_string();
        tracing::info!(%id, label, "button updated");
        self.persist().await;
        self.notifier.fire();
        true
    }

    pub async fn delete(&mut self, id: &ButtonId) -> bool {
        let Some(index) = self.buttons.iter().position(|b| &b.id == id) else {
            tracing::debug!(%id, "delete of unknown button ignored");
            return false;
        };
        let removed = self.buttons.remove(index);
        tracing::info!(%id, label = %removed.label, "button deleted");
        self.persist().await;
        self.notifier.fire();
        true
    }

    /// The backing file was created or modified. Our own writes come back
    /// through the watcher too; those leave the list unchanged and stay quiet.
    pub async fn reload(&mut self) -> bool {
        let before = std::mem::take(&mut self.buttons);
        self.load().await;
        let changed = self.buttons != before;
        if changed {
            self.notifier.fire();
        } else {
            tracing::debug!("reload found no changes");
        }
        changed
    }

    /// The backing file was removed.
    pub fn clear(&mut self) {
        self.buttons.clear();
        tracing::info!("backing file removed, button list cleared");
        self.notifier.fire();
    }

    async fn load(&mut self) {
        let stored = match self.backend.read().await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                self.buttons.clear();
                return;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load script buttons");
                self.warnings
                    .push(format!("Failed to load script buttons configuration: {err}"));
                self.buttons.clear();
                return;
            }
        };

        let mut seen = HashSet::new();
        let mut migrated = false;
        let mut buttons = Vec::with_capacity(stored.len());
        for entry in stored {
            let (record, backfilled) = self.backfill(entry, &seen);
            migrated |= backfilled;
            seen.insert(record.id.clone());
            buttons.push(record);
        }
        self.issued_ids.extend(seen);
        self.buttons = buttons;
        tracing::debug!(count = self.buttons.len(), migrated, "script buttons loaded");

        if migrated {
            tracing::info!("backfilled missing button fields, saving migrated list");
            self.persist().await;
        }
    }

    fn backfill(
        &mut self,
        entry: StoredButton,
        seen: &HashSet<ButtonId>,
    ) -> (ButtonRecord, bool) {
        let mut backfilled = false;

        let id = match entry.id.filter(|id| !id.is_empty()) {
            Some(id) if !seen.contains(&ButtonId(id.clone())) => ButtonId(id),
            _ => {
                backfilled = true;
                self.fresh_id_excluding(seen)
            }
        };
        let emoji = match entry.emoji.filter(|e| !e.is_empty()) {
            Some(emoji) => emoji,
            None => {
                backfilled = true;
                palette::random_emoji(&mut self.rng)
            }
        };
        let color = match entry.color.filter(|c| !c.is_empty()) {
            Some(color) => color,
            None => {
                backfilled = true;
                palette::random_color(&mut self.rng)
            }
        };

        let record = ButtonRecord {
            id,
            label: entry.label,
            command: entry.command,
            emoji,
            color,
        };
        (record, backfilled)
    }

    fn fresh_id(&mut self) -> ButtonId {
        self.fresh_id_excluding(&HashSet::new())
    }

    fn fresh_id_excluding(&mut self, also_taken: &HashSet<ButtonId>) -> ButtonId {
        loop {
            let id = ButtonId(palette::generate_id(&mut self.rng));
            if !self.issued_ids.contains(&id) && !also_taken.contains(&id) {
                self.issued_ids.insert(id.clone());
                return id;
            }
        }
    }

    async fn persist(&mut self) {
        if let Err(err) = self.backend.write(&self.buttons).await {
            match &err {
                PersistError::NoWorkspace => tracing::warn!("{err}"),
                _ => tracing::error!(error = %err, "failed to save script buttons"),
            }
            self.warnings.push(match err {
                PersistError::NoWorkspace => err.to_string(),
                other => format!("Failed to save script buttons configuration: {other}"),
            });
        }
    }
}

impl std::fmt::Debug for ButtonStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonStore")
            .field("buttons", &self.buttons)
            .field("location", &self.backend.location())
            .field("notifier", &self.notifier)
            .finish()
    }
}
