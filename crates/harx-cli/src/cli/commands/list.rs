//! `--list` operation: print the entry index.

use harx_core::har::Entry;
use harx_core::report;

pub fn run_list(entries: &[Entry]) {
    for entry in entries {
        println!("{}", report::entry_line(entry));
    }
}
