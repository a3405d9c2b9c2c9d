//! Console and CSV presentation of the catalog and extraction outcomes.
//!
//! Pure formatting: every function takes the data it reports explicitly and
//! returns strings (or writes the CSV file); printing is the caller's job.

use anyhow::{Context, Result};
use std::path::Path;

use crate::extract::ExtractOutcome;
use crate::har::Entry;

/// Report column width for filenames and mime types.
const NAME_COL: usize = 30;

/// One listing row for the entry index.
pub fn entry_line(entry: &Entry) -> String {
    format!(
        "[{:>3}] [{}] [{:>6}] [{:>30}] [Size: {:>8}]  [{}]",
        entry.index, entry.started, entry.method, entry.mime_type, entry.size, entry.url
    )
}

/// One report row for an extraction outcome.
pub fn outcome_line(outcome: &ExtractOutcome) -> String {
    match outcome {
        ExtractOutcome::Written(r) => format!(
            "[{:>3}] [{:>30}] [Size: {:>8}] [{}] [{:>30}] [{}]",
            r.index,
            clip(&r.file_name),
            r.size_human,
            r.md5_hex,
            r.mime_type,
            r.url
        ),
        ExtractOutcome::NoContent { index } => {
            format!("[{:>3}] No content for object found.", index)
        }
        ExtractOutcome::NotFound { index } => format!("[{:>3}] Object not found.", index),
        ExtractOutcome::Failed { index, error } => {
            format!("[{:>3}] Extraction failed: {:#}", index, error)
        }
    }
}

/// Export the catalog as CSV, one row per entry in index order.
pub fn write_csv(path: &Path, entries: &[Entry]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("create CSV {}", path.display()))?;
    wtr.write_record(["index", "time", "method", "mimetype", "size", "url"])
        .context("write CSV header")?;
    for e in entries {
        wtr.write_record([
            e.index.to_string(),
            e.started.clone(),
            e.method.clone(),
            e.mime_type.clone(),
            e.size.to_string(),
            e.url.clone(),
        ])
        .with_context(|| format!("write CSV row {}", e.index))?;
    }
    wtr.flush()
        .with_context(|| format!("flush CSV {}", path.display()))?;
    Ok(())
}

/// First `NAME_COL` chars, char-boundary safe.
fn clip(s: &str) -> String {
    s.chars().take(NAME_COL).collect()
}
