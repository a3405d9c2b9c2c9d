//! Entry catalog: flatten a parsed archive into an ordered, indexed list.

use std::path::Path;

use crate::error::ArchiveError;

use super::parse::HarFile;

/// One HTTP exchange from the archive, in capture order.
///
/// `index` is assigned by position (zero-based, contiguous) and is the public
/// selector for extraction and the optional filename prefix. `content` is
/// `None` when the capture stored no body text for the response.
#[derive(Debug, Clone)]
pub struct Entry {
    pub index: usize,
    pub started: String,
    pub method: String,
    pub url: String,
    pub mime_type: String,
    pub size: i64,
    pub content: Option<String>,
}

/// Parse the archive at `path` into the ordered entry catalog.
///
/// Entries keep archive order and are never deduplicated; an archive with
/// zero entries yields an empty catalog. Failures are classified before any
/// anyhow conversion: I/O problems as `Access`, undecodable or structurally
/// wrong JSON as `Format`.
pub fn load_catalog(path: &Path) -> Result<Vec<Entry>, ArchiveError> {
    let bytes = std::fs::read(path).map_err(|source| ArchiveError::Access {
        path: path.to_path_buf(),
        source,
    })?;
    let har: HarFile = serde_json::from_slice(&bytes).map_err(|source| ArchiveError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<Entry> = har
        .log
        .entries
        .into_iter()
        .enumerate()
        .map(|(index, e)| Entry {
            index,
            started: e.started_date_time,
            method: e.request.method,
            url: e.request.url,
            mime_type: e.response.content.mime_type,
            size: e.response.content.size,
            content: e.response.content.text,
        })
        .collect();

    tracing::debug!("cataloged {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
