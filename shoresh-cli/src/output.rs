//! Batch summary rendering.

use anyhow::Result;
use shoresh_core::BatchSummary;
use std::io::Write;

/// Supported summary formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable counts
    Text,
    /// Machine-readable JSON object
    Json,
}

/// Write the batch summary in the requested format.
pub fn render_summary<W: Write>(
    summary: &BatchSummary,
    format: SummaryFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        SummaryFormat::Text => {
            writeln!(
                writer,
                "{} records: {} updated, {} skipped",
                summary.total(),
                summary.updated,
                summary.skipped
            )?;
            if summary.failed > 0 {
                writeln!(writer, "{} records failed to persist", summary.failed)?;
            }
            if summary.combined_forms > 0 {
                writeln!(
                    writer,
                    "{} updated records are combined forms",
                    summary.combined_forms
                )?;
            }
        }
        SummaryFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
