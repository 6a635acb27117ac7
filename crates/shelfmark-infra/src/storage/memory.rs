use std::collections::HashMap;
use std::sync::Mutex;

use shelfmark_core::ports::{RecordStorageError, RecordStoragePort};

/// Ephemeral record storage backed by a process-local map.
///
/// The substitute tests inject in place of the file adapter; also usable
/// wherever favorites should not outlive the process.
#[derive(Debug, Default)]
pub struct InMemoryRecordStorage {
    records: Mutex<HashMap<String, String>>,
}

impl InMemoryRecordStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw record text, bypassing normalization. Test hook.
    pub fn raw(&self, name: &str) -> Option<String> {
        self.records
            .lock()
            .expect("lock record map")
            .get(name)
            .cloned()
    }

    /// Seed a raw record, bypassing the store. Test hook.
    pub fn insert_raw(&self, name: &str, value: &str) {
        self.records
            .lock()
            .expect("lock record map")
            .insert(name.to_string(), value.to_string());
    }
}

impl RecordStoragePort for InMemoryRecordStorage {
    fn get(&self, name: &str) -> Result<Option<String>, RecordStorageError> {
        let records = self
            .records
            .lock()
            .map_err(|_| RecordStorageError::Store("record map poisoned".to_string()))?;
        Ok(records.get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), RecordStorageError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| RecordStorageError::Store("record map poisoned".to_string()))?;
        records.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_a_missing_record() {
        let storage = InMemoryRecordStorage::new();
        assert_eq!(storage.get("favorites").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let storage = InMemoryRecordStorage::new();
        storage.set("favorites", r#"["A"]"#).unwrap();
        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some(r#"["A"]"#));
    }

    #[test]
    fn seeded_raw_records_are_visible_through_the_port() {
        let storage = InMemoryRecordStorage::new();
        storage.insert_raw("favorites", r#"["A"]"#);

        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some(r#"["A"]"#));
        assert_eq!(storage.raw("favorites").as_deref(), Some(r#"["A"]"#));
    }
}
