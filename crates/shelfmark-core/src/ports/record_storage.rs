use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStorageError {
    #[error("record storage failed: {0}")]
    Store(String),
}

/// Origin-scoped durable text storage, the system of record for favorites.
///
/// `get` and `set` are synchronous by contract: a store operation runs to
/// completion once invoked, with no suspension point in between. Writes
/// replace the named record in full; there is no partial update. Two
/// independent processes writing the same record race last-writer-wins;
/// the contract offers no compare-and-swap.
pub trait RecordStoragePort: Send + Sync {
    /// Read the named record, if present.
    fn get(&self, name: &str) -> Result<Option<String>, RecordStorageError>;

    /// Replace the named record. Must be idempotent (overwrite if exists).
    fn set(&self, name: &str, value: &str) -> Result<(), RecordStorageError>;
}

#[cfg(test)]
mockall::mock! {
    pub RecordStorage {}

    impl RecordStoragePort for RecordStorage {
        fn get(&self, name: &str) -> Result<Option<String>, RecordStorageError>;
        fn set(&self, name: &str, value: &str) -> Result<(), RecordStorageError>;
    }
}
