//! `--csv` operation: save the entry index as CSV.

use anyhow::Result;
use harx_core::har::Entry;
use harx_core::report;
use std::path::Path;

pub fn run_csv(entries: &[Entry], path: &Path) -> Result<()> {
    report::write_csv(path, entries)?;
    tracing::info!("wrote {} CSV rows to {}", entries.len(), path.display());
    Ok(())
}
