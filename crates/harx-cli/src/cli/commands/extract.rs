//! `--extract` / `--extract-all` operation: write payloads and report.
//!
//! Per-entry problems (no content, unknown index, write failures) are report
//! lines, not process failures; the run keeps its exit status.

use harx_core::extract::{extract_entries, ExtractOptions, Selection};
use harx_core::har::Entry;
use harx_core::report;

pub fn run_extract(entries: &[Entry], selection: Selection, opts: &ExtractOptions) {
    for outcome in extract_entries(entries, selection, opts) {
        println!("{}", report::outcome_line(&outcome));
    }
}
