//! Payload persistence and read-back verification.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::sizefmt;
use crate::sniff;

/// A payload landed on disk, described by what the disk says.
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub len: u64,
    pub size_human: String,
    pub md5_hex: String,
    pub mime_type: String,
}

/// Write `data` to `<dir>/<file_name>`, creating `dir` as needed, then read
/// the file back for its report metadata (length, MD5, sniffed type). An
/// existing file at that path is overwritten in full.
pub fn write_payload(dir: &Path, file_name: &str, data: &[u8]) -> Result<WrittenFile> {
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, data).with_context(|| format!("write {}", path.display()))?;

    let len = fs::metadata(&path)
        .with_context(|| format!("stat {}", path.display()))?
        .len();
    let md5_hex = checksum::md5_path(&path)?;
    let mime_type = sniff::sniff_path(&path)?;

    Ok(WrittenFile {
        path,
        len,
        size_human: sizefmt::human_size(len),
        md5_hex,
        mime_type,
    })
}
