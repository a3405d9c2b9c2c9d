//! Content-type sniffing from leading file bytes.
//!
//! Runs on the written file after extraction so the report shows what the
//! payload actually is, independent of the mime type the archive declared.
//! Signature table first, then UTF-8 text heuristics, then octet-stream.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Leading bytes consulted for signature and text checks.
const SNIFF_LEN: usize = 512;

/// Detect a MIME type from the first bytes of the file at `path`.
pub fn sniff_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut buf = [0u8; SNIFF_LEN];
    let mut filled = 0;
    while filled < SNIFF_LEN {
        let n = f
            .read(&mut buf[filled..])
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(sniff_bytes(&buf[..filled]).to_string())
}

/// Signature table over the leading bytes, then text heuristics.
pub fn sniff_bytes(head: &[u8]) -> &'static str {
    if head.is_empty() {
        return "application/x-empty";
    }
    match head {
        [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        [0x00, 0x00, 0x01, 0x00, ..] => "image/x-icon",
        [b'%', b'P', b'D', b'F', ..] => "application/pdf",
        [0x50, 0x4B, 0x03, 0x04, ..] | [0x50, 0x4B, 0x05, 0x06, ..] => "application/zip",
        [0x1F, 0x8B, ..] => "application/gzip",
        [b'w', b'O', b'F', b'F', ..] => "font/woff",
        [b'w', b'O', b'F', b'2', ..] => "font/woff2",
        _ => sniff_text(head),
    }
}

/// Text heuristics: valid UTF-8 without NUL is text, HTML when it opens with
/// a document tag. `head` is a fixed-length prefix, so a multi-byte char cut
/// at the end still counts as valid.
fn sniff_text(head: &[u8]) -> &'static str {
    let text = match std::str::from_utf8(head) {
        Ok(t) => t,
        Err(e) if e.error_len().is_none() && e.valid_up_to() > 0 => {
            std::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or("")
        }
        Err(_) => return "application/octet-stream",
    };
    if text.bytes().any(|b| b == 0) {
        return "application/octet-stream";
    }

    let lead = text.trim_start().to_ascii_lowercase();
    for tag in ["<!doctype html", "<html", "<head", "<body"] {
        if lead.starts_with(tag) {
            return "text/html";
        }
    }
    "text/plain"
}
