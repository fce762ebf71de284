//! Align command implementation.

use crate::output::{render_summary, SummaryFormat};
use crate::store::{JsonFileStore, WordStore};
use anyhow::{Context, Result};
use clap::Parser;
use shoresh_core::{process_record, BatchSummary, RecordOutcome, WordRecord};
use std::path::PathBuf;

/// Arguments for the align command
#[derive(Debug, Parser)]
#[command(
    name = "shoresh",
    version,
    about = "Compute per-consonant root alignments for a Hebrew word collection"
)]
pub struct AlignArgs {
    /// Collection file holding the word records (JSON array)
    #[arg(value_name = "COLLECTION")]
    pub collection: PathBuf,

    /// Recompute and overwrite existing alignments
    #[arg(short, long)]
    pub force: bool,

    /// Compute and report without writing anything back
    #[arg(long)]
    pub dry_run: bool,

    /// Summary output format
    #[arg(short = 'F', long, value_enum, default_value = "text")]
    pub format: SummaryFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AlignArgs {
    /// Execute the align command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("aligning records in {}", self.collection.display());

        let mut store = JsonFileStore::open(&self.collection)
            .with_context(|| format!("cannot open collection {}", self.collection.display()))?;

        let summary = self.run_batch(&mut store);

        log::info!(
            "done: {} updated, {} skipped, {} failed",
            summary.updated,
            summary.skipped,
            summary.failed
        );
        render_summary(&summary, self.format, std::io::stdout().lock())
    }

    /// Process every record sequentially, committing updates one at a time.
    ///
    /// Record-level problems are logged and counted; only batch-level
    /// failures (an unreadable or unwritable collection) escape as errors
    /// from `execute`.
    fn run_batch<S: WordStore>(&self, store: &mut S) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for index in 0..store.records().len() {
            let mut record = store.records()[index].clone();
            let label = record_label(&record, index);

            match process_record(&mut record, self.force) {
                RecordOutcome::Updated { combined_form } => {
                    if !self.dry_run {
                        if let Err(err) = store.commit(index, record) {
                            log::error!("{label}: {err}");
                            summary.failed += 1;
                            continue;
                        }
                    }
                    summary.updated += 1;
                    if combined_form {
                        summary.combined_forms += 1;
                    }
                }
                RecordOutcome::Skipped(reason) => {
                    log::warn!("skipping {label}: {reason}");
                    summary.skipped += 1;
                }
            }
        }
        summary
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn record_label(record: &WordRecord, index: usize) -> String {
    if record.hebrew.is_empty() {
        format!("record #{index}")
    } else {
        record.hebrew.clone()
    }
}
