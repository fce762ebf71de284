//! Per-record orchestration and batch bookkeeping.
//!
//! Sequences extraction, classification, segmentation, and alignment for one
//! word record. Every failure mode is record-scoped: a record is skipped
//! with a reason, never aborting the batch.

use crate::error::RootParseError;
use crate::types::WordRecord;
use crate::{align, prefix, root, segment};
use serde::Serialize;
use std::fmt;

/// Why a record was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `rootAnalysis` already present and force not set; hand-curated
    /// corrections are never silently overwritten.
    AlreadyCurated,
    /// The root field is missing or empty.
    NoRoot,
    /// The root field could not be parsed.
    UnparsableRoot(RootParseError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyCurated => write!(f, "already curated"),
            SkipReason::NoRoot => write!(f, "no root"),
            SkipReason::UnparsableRoot(err) => write!(f, "{err}"),
        }
    }
}

/// Terminal state of one record's processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// `rootAnalysis` was computed and written into the record.
    Updated {
        /// Whether the classifier flagged the word as a combined form.
        combined_form: bool,
    },
    /// The record was left untouched.
    Skipped(SkipReason),
}

/// Batch counters reported after a run.
///
/// `failed` counts records whose computed analysis could not be persisted by
/// the caller's store; the algorithmic path itself only updates or skips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Records whose `rootAnalysis` was (re)computed.
    pub updated: usize,
    /// Records left untouched, with the reason logged.
    pub skipped: usize,
    /// Records whose write-back failed.
    pub failed: usize,
    /// Updated records the classifier flagged as combined forms.
    pub combined_forms: usize,
}

impl BatchSummary {
    /// Total records seen.
    pub fn total(&self) -> usize {
        self.updated + self.skipped + self.failed
    }
}

/// Run the alignment pipeline over one record.
///
/// On `Updated` the record's `rootAnalysis` holds exactly one entry per
/// extracted root letter. With `force` unset, a record that already carries
/// an analysis is skipped, which makes re-running a batch idempotent.
pub fn process_record(record: &mut WordRecord, force: bool) -> RecordOutcome {
    if record.root_analysis.is_some() && !force {
        return RecordOutcome::Skipped(SkipReason::AlreadyCurated);
    }
    if record.root.trim().is_empty() {
        return RecordOutcome::Skipped(SkipReason::NoRoot);
    }

    let letters = match root::extract(&record.root) {
        Ok(letters) => letters,
        Err(err) => return RecordOutcome::Skipped(SkipReason::UnparsableRoot(err)),
    };

    let combined_form = prefix::is_combined_form(&record.hebrew, &record.root, &letters);
    log::debug!(
        "{}: {} letters, combined_form={combined_form}",
        record.hebrew,
        letters.len()
    );

    let chunks = match transcription_source(record, combined_form) {
        Some(text) => segment::segment(text),
        None => Vec::new(),
    };

    record.root_analysis = Some(align::align(&letters, &chunks));
    RecordOutcome::Updated { combined_form }
}

/// Pick the transcription the segmenter should see.
///
/// A root-only transcription always wins. The full-word transcription is
/// only trusted for standalone forms: on a combined form it would hand the
/// formative's syllable to the first root letter. A transcription with
/// characters outside the accepted repertoire is a likely data-entry mistake
/// and is treated as absent, which routes the record to the romanization
/// fallback instead of segmenting garbage.
fn transcription_source(record: &WordRecord, combined_form: bool) -> Option<&str> {
    let text = match record.root_pronunciation.as_deref().map(str::trim) {
        Some(root_text) if !root_text.is_empty() => root_text,
        _ if !combined_form => record.pronunciation.trim(),
        _ => return None,
    };
    if text.is_empty() {
        return None;
    }
    if !segment::is_supported_transcription(text) {
        log::warn!("{}: unusable transcription {text:?}", record.hebrew);
        return None;
    }
    Some(text)
}

/// Run the pipeline over a slice of records in place.
///
/// Records are processed sequentially and independently; no record's outcome
/// depends on another's. Skips are logged as warnings.
pub fn process_batch(records: &mut [WordRecord], force: bool) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for record in records.iter_mut() {
        match process_record(record, force) {
            RecordOutcome::Updated { combined_form } => {
                summary.updated += 1;
                if combined_form {
                    summary.combined_forms += 1;
                }
            }
            RecordOutcome::Skipped(reason) => {
                log::warn!("skipping {}: {reason}", record.hebrew);
                summary.skipped += 1;
            }
        }
    }
    summary
}
