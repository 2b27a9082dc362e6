use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

/// Best-effort string key-value storage, in the shape of browser
/// `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), HistoryError>;
    fn remove(&mut self, key: &str) -> Result<(), HistoryError>;
}

/// In-process store used by tests and the terminal demo.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HistoryError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), HistoryError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), HistoryError> {
        self.entries.remove(key);
        Ok(())
    }
}
