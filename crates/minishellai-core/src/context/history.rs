use crate::backend::{Message, Role};
use crate::config::HistorySettings;
use crate::error::ShellAiError;
use std::fs;
use std::path::Path;

/// Conversation history persisted as a JSON array of `{role, content}`.
///
/// The whole list is read at the start of an invocation and rewritten in
/// full at the end. Nothing here is fatal: unreadable history is treated as
/// empty and failed writes are only logged.
pub struct HistoryStore {
    settings: HistorySettings,
}

impl HistoryStore {
    pub fn new(settings: HistorySettings) -> Self {
        Self { settings }
    }

    pub fn path(&self) -> &Path {
        &self.settings.filepath
    }

    /// Read the stored history, keeping only the first `max_size` entries.
    ///
    /// Truncation drops the newest entries, not the oldest.
    pub fn load(&self) -> Vec<Message> {
        if !self.settings.enabled {
            return Vec::new();
        }

        let path = self.path();
        if !path.exists() {
            tracing::warn!("History file {} does not exist.", path.display());
            tracing::warn!("File will be created with first response.");
            return Vec::new();
        }

        let mut history = match Self::read(path) {
            Ok(history) => history,
            Err(e) => {
                tracing::error!("Failed to read history file {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        tracing::info!(
            "Taking first maximum of {} entries from history.",
            self.settings.max_size
        );
        history.truncate(self.settings.max_size);
        history
    }

    /// Append the assistant reply and overwrite the history file.
    ///
    /// A reply without data is stored as `"content": null`.
    pub fn save(&self, mut history: Vec<Message>, response: Option<String>) {
        if !self.settings.enabled {
            return;
        }

        history.push(Message {
            role: Role::Assistant,
            content: response,
        });
        if let Err(e) = self.write(&history) {
            tracing::error!(
                "Failed to write history file {}: {}",
                self.path().display(),
                e
            );
        }
    }

    fn read(path: &Path) -> Result<Vec<Message>, ShellAiError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write(&self, history: &[Message]) -> Result<(), ShellAiError> {
        let path = self.path();
        let contents = serde_json::to_string(history)?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}
