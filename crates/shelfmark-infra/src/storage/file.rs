use std::io;
use std::path::{Path, PathBuf};

use shelfmark_core::ports::{RecordStorageError, RecordStoragePort};

const RECORD_EXTENSION: &str = "json";

/// Default on-disk root for persisted records.
///
/// Falls back to the working directory when the platform exposes no data
/// directory.
pub fn default_data_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelfmark")
}

/// File-backed record storage: one `<root>/<name>.json` file per record.
///
/// Writes go through a temp file and rename, so the stored record is always
/// either the previous contents or the fully written new contents.
#[derive(Debug, Clone)]
pub struct FileRecordStorage {
    root: PathBuf,
}

impl FileRecordStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(name).with_extension(RECORD_EXTENSION)
    }

    fn write_record(&self, path: &Path, value: &str) -> Result<(), RecordStorageError> {
        std::fs::create_dir_all(&self.root).map_err(|err| {
            RecordStorageError::Store(format!("failed to create record dir: {err}"))
        })?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value).map_err(|err| {
            RecordStorageError::Store(format!("failed to write record temp file: {err}"))
        })?;

        std::fs::rename(&tmp_path, path)
            .map_err(|err| RecordStorageError::Store(format!("failed to commit record file: {err}")))
    }
}

impl RecordStoragePort for FileRecordStorage {
    fn get(&self, name: &str) -> Result<Option<String>, RecordStorageError> {
        match std::fs::read_to_string(self.record_path(name)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RecordStorageError::Store(format!(
                "failed to read record file: {err}"
            ))),
        }
    }

    fn set(&self, name: &str, value: &str) -> Result<(), RecordStorageError> {
        self.write_record(&self.record_path(name), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_returns_none_for_a_missing_record() {
        let dir = TempDir::new().expect("create temp dir");
        let storage = FileRecordStorage::new(dir.path());

        assert_eq!(storage.get("favorites").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = TempDir::new().expect("create temp dir");
        let storage = FileRecordStorage::new(dir.path());

        storage.set("favorites", r#"["A"]"#).unwrap();

        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some(r#"["A"]"#));
    }

    #[test]
    fn set_overwrites_the_whole_record() {
        let dir = TempDir::new().expect("create temp dir");
        let storage = FileRecordStorage::new(dir.path());

        storage.set("favorites", "first").unwrap();
        storage.set("favorites", "second").unwrap();

        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn records_survive_a_new_instance_on_the_same_root() {
        let dir = TempDir::new().expect("create temp dir");
        FileRecordStorage::new(dir.path())
            .set("favorites", r#"["A"]"#)
            .unwrap();

        let reopened = FileRecordStorage::new(dir.path());
        assert_eq!(
            reopened.get("favorites").unwrap().as_deref(),
            Some(r#"["A"]"#)
        );
    }

    #[test]
    fn records_are_isolated_by_name() {
        let dir = TempDir::new().expect("create temp dir");
        let storage = FileRecordStorage::new(dir.path());

        storage.set("favorites", "a").unwrap();
        storage.set("reading-list", "b").unwrap();

        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some("a"));
        assert_eq!(storage.get("reading-list").unwrap().as_deref(), Some("b"));
    }
}
