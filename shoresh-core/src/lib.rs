//! Per-consonant alignment of Hebrew roots with phonetic transcriptions.
//!
//! Given a word record's free-text `root` field and its transcription, this
//! crate computes a `rootAnalysis`: for each letter of the word's root, the
//! slice of the pronunciation that corresponds to it. The pipeline is pure,
//! synchronous, and record-scoped; persistence lives behind the caller.
//!
//! ```
//! use shoresh_core::{process_record, RecordOutcome, WordRecord};
//!
//! let mut record = WordRecord {
//!     hebrew: "בָּרָא".to_string(),
//!     root: "ברא (bara)".to_string(),
//!     pronunciation: "baˈra".to_string(),
//!     ..WordRecord::default()
//! };
//! let outcome = process_record(&mut record, false);
//! assert!(matches!(outcome, RecordOutcome::Updated { .. }));
//! assert_eq!(record.root_analysis.unwrap().len(), 3);
//! ```

#![warn(missing_docs)]

pub mod align;
pub mod error;
pub mod hebrew;
pub mod pipeline;
pub mod prefix;
pub mod romanize;
pub mod root;
pub mod segment;
pub mod types;

// Re-export key types
pub use align::align;
pub use error::RootParseError;
pub use pipeline::{process_batch, process_record, BatchSummary, RecordOutcome, SkipReason};
pub use prefix::is_combined_form;
pub use root::extract;
pub use segment::segment;
pub use types::{RootAnalysisEntry, RootLetter, WordRecord};
