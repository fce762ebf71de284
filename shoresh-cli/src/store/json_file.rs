//! JSON-file implementation of the word store.

use super::{StoreError, WordStore};
use shoresh_core::WordRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A word collection stored as a JSON array in a single file.
///
/// Every commit rewrites the file atomically: the new content goes to a
/// temporary file in the collection's directory, which then replaces the
/// original. A batch interrupted between records leaves a valid collection.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<WordRecord>,
}

impl JsonFileStore {
    /// Load a collection from `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let records = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, records })
    }

    /// The path the collection was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rewrite(&self) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        serde_json::to_writer_pretty(&mut tmp, &self.records)
            .map_err(|source| write_err(source.into()))?;
        tmp.write_all(b"\n").map_err(write_err)?;
        tmp.persist(&self.path)
            .map_err(|persist| write_err(persist.error))?;
        Ok(())
    }
}

impl WordStore for JsonFileStore {
    fn records(&self) -> &[WordRecord] {
        &self.records
    }

    fn commit(&mut self, index: usize, record: WordRecord) -> Result<(), StoreError> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::UnknownRecord { index })?;
        *slot = record;
        self.rewrite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn collection(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("words.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_open_and_read_records() {
        let dir = TempDir::new().unwrap();
        let path = collection(
            &dir,
            r#"[{"hebrew": "בָּרָא", "root": "ברא", "pronunciation": "bara"}]"#,
        );

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].root, "ברא");
    }

    #[test]
    fn test_open_missing_file() {
        let err = JsonFileStore::open("/nonexistent/words.json").unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(err.to_string().contains("failed to read collection"));
    }

    #[test]
    fn test_open_malformed_collection() {
        let dir = TempDir::new().unwrap();
        let path = collection(&dir, r#"{"not": "an array"}"#);

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_commit_persists_one_record() {
        let dir = TempDir::new().unwrap();
        let path = collection(
            &dir,
            r#"[
                {"hebrew": "א", "root": "ברא", "pronunciation": "bara"},
                {"hebrew": "ב", "root": "ארץ", "pronunciation": "erets"}
            ]"#,
        );

        let mut store = JsonFileStore::open(&path).unwrap();
        let mut record = store.records()[1].clone();
        record.pronunciation = "ˈerets".to_string();
        store.commit(1, record).unwrap();

        let reloaded = JsonFileStore::open(&path).unwrap();
        assert_eq!(reloaded.records()[0].pronunciation, "bara");
        assert_eq!(reloaded.records()[1].pronunciation, "ˈerets");
    }

    #[test]
    fn test_commit_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = collection(&dir, "[]");

        let mut store = JsonFileStore::open(&path).unwrap();
        let err = store.commit(0, WordRecord::default()).unwrap_err();
        assert!(matches!(err, StoreError::UnknownRecord { index: 0 }));
    }

    #[test]
    fn test_unknown_fields_survive_commit() {
        let dir = TempDir::new().unwrap();
        let path = collection(
            &dir,
            r#"[{"hebrew": "א", "root": "ברא", "pronunciation": "bara", "imageUrl": "x"}]"#,
        );

        let mut store = JsonFileStore::open(&path).unwrap();
        let record = store.records()[0].clone();
        store.commit(0, record).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("imageUrl"));
    }
}
