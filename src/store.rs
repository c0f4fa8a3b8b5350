use crate::persistence::{FileGateway, StorageError, TASK_STATES_KEY};
use std::collections::HashMap;

/// Completion state per task label, with write-through persistence.
///
/// Labels are global keys: a label shared between two mode lists shares one
/// completion flag. The map is append-only per label — labels are added on
/// first toggle and never removed, so switching modes cannot discard
/// unrelated state.
pub struct TaskStateStore {
    states: HashMap<String, bool>,
    gateway: FileGateway,
}

impl TaskStateStore {
    /// Create a store hydrated from the gateway. An absent or unreadable
    /// `task_states` key starts fresh.
    pub fn load(gateway: FileGateway) -> Self {
        let mut store = Self {
            states: HashMap::new(),
            gateway,
        };

        if let Some(states) = store
            .gateway
            .load(TASK_STATES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
        {
            store.hydrate(states);
        }

        store
    }

    /// Completion flag for a label; unseen labels read as incomplete
    pub fn get(&self, label: &str) -> bool {
        self.states.get(label).copied().unwrap_or(false)
    }

    /// Set a label's completion flag and flush the full snapshot.
    ///
    /// The in-memory map is updated before the save is attempted, so a
    /// `set` followed by `get` is consistent even when storage is down.
    pub fn set(&mut self, label: &str, value: bool) -> Result<(), StorageError> {
        self.states.insert(label.to_string(), value);
        self.persist()
    }

    /// Current task-state map, for persistence/export
    pub fn snapshot(&self) -> &HashMap<String, bool> {
        &self.states
    }

    /// Replace the in-memory map wholesale (startup only)
    pub fn hydrate(&mut self, states: HashMap<String, bool>) {
        self.states = states;
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.states).map_err(|e| StorageError {
            key: TASK_STATES_KEY.to_string(),
            source: e.into(),
        })?;
        self.gateway.save(TASK_STATES_KEY, &json)
    }
}
