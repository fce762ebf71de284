//! Storage boundary for word collections.
//!
//! The pipeline core is storage-agnostic; everything it needs from a backend
//! is this small trait. The shipped implementation keeps collections in a
//! JSON file, but any document or row store fits behind the same seam.

mod json_file;

pub use json_file::JsonFileStore;

use shoresh_core::WordRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the storage boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The collection could not be read.
    #[error("failed to read collection {}: {source}", path.display())]
    Read {
        /// Collection path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The collection exists but is not a JSON array of word records.
    #[error("collection {} is not a JSON array of word records: {source}", path.display())]
    Parse {
        /// Collection path.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// The collection could not be written back.
    #[error("failed to write collection {}: {source}", path.display())]
    Write {
        /// Collection path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A commit referenced a record the store does not hold.
    #[error("record index {index} out of range")]
    UnknownRecord {
        /// The offending index.
        index: usize,
    },
}

/// A loaded collection of word records with per-record write-back.
///
/// Writes are per-record so an interrupted batch leaves no partial record:
/// combined with the skip-if-curated guard, re-running a batch is safe.
pub trait WordStore {
    /// The records currently held, in collection order.
    fn records(&self) -> &[WordRecord];

    /// Replace the record at `index` and persist the change.
    fn commit(&mut self, index: usize, record: WordRecord) -> Result<(), StoreError>;
}
