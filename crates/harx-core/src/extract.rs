//! Extraction pipeline: select entries, decode bodies, write files.
//!
//! Entries are processed sequentially in ascending index order. Only opening
//! and parsing the archive can fail a run; everything that happens per entry
//! is captured as an outcome and the pass moves on.

use std::path::PathBuf;

use crate::filename;
use crate::har::Entry;
use crate::payload;
use crate::writer;

/// Which entries a run extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// One entry by its catalog index.
    Index(usize),
    /// Every entry, in catalog order.
    All,
}

/// Output placement options.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory the payload files are written into.
    pub dir: PathBuf,
    /// Prefix each filename with the entry index (`7-app.js`). This is also
    /// the only collision guard: without it, entries resolving to the same
    /// name overwrite each other in index order.
    pub number_files: bool,
}

/// Everything the report needs about one written payload.
#[derive(Debug)]
pub struct ExtractionRecord {
    pub index: usize,
    pub file_name: String,
    pub path: PathBuf,
    pub len: u64,
    pub size_human: String,
    pub md5_hex: String,
    pub mime_type: String,
    pub url: String,
    /// Decode route the body took, `"base64"` or `"literal"`.
    pub route: &'static str,
}

/// Per-entry result of an extraction pass.
#[derive(Debug)]
pub enum ExtractOutcome {
    Written(ExtractionRecord),
    /// The capture stored no body for this entry.
    NoContent { index: usize },
    /// A requested index that is not in the catalog.
    NotFound { index: usize },
    /// Local write or read-back failure; later entries still run.
    Failed { index: usize, error: anyhow::Error },
}

/// Run the pipeline over the selected entries.
pub fn extract_entries(
    entries: &[Entry],
    selection: Selection,
    opts: &ExtractOptions,
) -> Vec<ExtractOutcome> {
    match selection {
        Selection::Index(index) => match entries.get(index) {
            Some(entry) => vec![extract_one(entry, opts)],
            None => vec![ExtractOutcome::NotFound { index }],
        },
        Selection::All => entries.iter().map(|e| extract_one(e, opts)).collect(),
    }
}

fn extract_one(entry: &Entry, opts: &ExtractOptions) -> ExtractOutcome {
    let text = match entry.content.as_deref() {
        Some(t) => t,
        None => return ExtractOutcome::NoContent { index: entry.index },
    };

    let decoded = payload::decode_body(text);
    let route = decoded.route();

    let base = filename::filename_for_url(&entry.url);
    let file_name = if opts.number_files {
        // The prefix can push an already-clamped base name past NAME_MAX.
        filename::clamp(format!("{}-{}", entry.index, base))
    } else {
        base
    };

    match writer::write_payload(&opts.dir, &file_name, decoded.bytes()) {
        Ok(written) => {
            tracing::debug!(
                index = entry.index,
                route,
                file = %written.path.display(),
                "payload written"
            );
            ExtractOutcome::Written(ExtractionRecord {
                index: entry.index,
                file_name,
                path: written.path,
                len: written.len,
                size_human: written.size_human,
                md5_hex: written.md5_hex,
                mime_type: written.mime_type,
                url: entry.url.clone(),
                route,
            })
        }
        Err(error) => {
            tracing::warn!(index = entry.index, "extraction failed: {:#}", error);
            ExtractOutcome::Failed {
                index: entry.index,
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(index: usize, url: &str, content: Option<&str>) -> Entry {
        Entry {
            index,
            started: "2024-03-01T10:00:00.000Z".to_string(),
            method: "GET".to_string(),
            url: url.to_string(),
            mime_type: String::new(),
            size: 0,
            content: content.map(str::to_string),
        }
    }

    fn opts(dir: &std::path::Path, number_files: bool) -> ExtractOptions {
        ExtractOptions {
            dir: dir.to_path_buf(),
            number_files,
        }
    }

    #[test]
    fn extract_all_mixes_written_and_no_content() {
        let dir = tempdir().unwrap();
        let entries = vec![
            // "aGVsbG8gd29ybGQ=" is base64 for "hello world".
            entry(0, "https://example.com/greeting.txt", Some("aGVsbG8gd29ybGQ=")),
            entry(1, "https://example.com/missing.png", None),
            entry(2, "https://example.com/style.css", Some("body { margin: 0; }")),
        ];

        let outcomes = extract_entries(&entries, Selection::All, &opts(dir.path(), false));
        assert_eq!(outcomes.len(), 3);

        match &outcomes[0] {
            ExtractOutcome::Written(r) => {
                assert_eq!(r.index, 0);
                assert_eq!(r.file_name, "greeting.txt");
                assert_eq!(r.route, "base64");
                assert_eq!(std::fs::read(&r.path).unwrap(), b"hello world");
            }
            other => panic!("expected Written, got {:?}", other),
        }
        assert!(matches!(outcomes[1], ExtractOutcome::NoContent { index: 1 }));
        match &outcomes[2] {
            ExtractOutcome::Written(r) => {
                assert_eq!(r.route, "literal");
                assert_eq!(std::fs::read(&r.path).unwrap(), b"body { margin: 0; }");
            }
            other => panic!("expected Written, got {:?}", other),
        }
    }

    #[test]
    fn extract_index_zero_is_selectable() {
        let dir = tempdir().unwrap();
        let entries = vec![entry(0, "https://example.com/a.txt", Some("aGVsbG8K"))];
        let outcomes = extract_entries(&entries, Selection::Index(0), &opts(dir.path(), false));
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], ExtractOutcome::Written(_)));
    }

    #[test]
    fn extract_out_of_range_is_not_found() {
        let dir = tempdir().unwrap();
        let entries = vec![entry(0, "https://example.com/a.txt", Some("aGVsbG8K"))];
        let outcomes = extract_entries(&entries, Selection::Index(7), &opts(dir.path(), false));
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], ExtractOutcome::NotFound { index: 7 }));
    }

    #[test]
    fn number_files_prefixes_index() {
        let dir = tempdir().unwrap();
        let entries: Vec<Entry> = (0..5)
            .map(|i| entry(i, "https://example.com/app.js", Some("Zm9v")))
            .collect();
        let outcomes = extract_entries(&entries, Selection::Index(4), &opts(dir.path(), true));
        match &outcomes[0] {
            ExtractOutcome::Written(r) => {
                assert_eq!(r.file_name, "4-app.js");
                assert!(dir.path().join("4-app.js").exists());
            }
            other => panic!("expected Written, got {:?}", other),
        }
    }

    #[test]
    fn colliding_names_last_write_wins() {
        let dir = tempdir().unwrap();
        let entries = vec![
            entry(0, "https://example.com/", Some("Zmlyc3Q=")),
            entry(1, "https://example.com/", Some("c2Vjb25k")),
        ];
        let outcomes = extract_entries(&entries, Selection::All, &opts(dir.path(), false));
        assert_eq!(outcomes.len(), 2);
        let path = dir.path().join("example.com.file");
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn numbering_avoids_collision() {
        let dir = tempdir().unwrap();
        let entries = vec![
            entry(0, "https://example.com/", Some("Zmlyc3Q=")),
            entry(1, "https://example.com/", Some("c2Vjb25k")),
        ];
        extract_entries(&entries, Selection::All, &opts(dir.path(), true));
        assert_eq!(
            std::fs::read(dir.path().join("0-example.com.file")).unwrap(),
            b"first"
        );
        assert_eq!(
            std::fs::read(dir.path().join("1-example.com.file")).unwrap(),
            b"second"
        );
    }

    #[test]
    fn numbering_clamps_overlong_names() {
        let dir = tempdir().unwrap();
        let url = format!("https://example.com/{}", "a".repeat(300));
        let entries = vec![entry(0, &url, Some("Zm9v"))];
        let outcomes = extract_entries(&entries, Selection::All, &opts(dir.path(), true));
        match &outcomes[0] {
            ExtractOutcome::Written(r) => {
                // The base name alone already fills NAME_MAX; the prefix must
                // not push the final name over it.
                assert_eq!(r.file_name.len(), 255);
                assert!(r.file_name.starts_with("0-"));
                assert_eq!(std::fs::read(&r.path).unwrap(), b"foo");
            }
            other => panic!("expected Written, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_writes_empty_file() {
        let dir = tempdir().unwrap();
        let entries = vec![entry(0, "https://example.com/empty.bin", Some(""))];
        let outcomes = extract_entries(&entries, Selection::All, &opts(dir.path(), false));
        match &outcomes[0] {
            ExtractOutcome::Written(r) => {
                assert_eq!(r.len, 0);
                assert_eq!(r.mime_type, "application/x-empty");
            }
            other => panic!("expected Written, got {:?}", other),
        }
    }
}
