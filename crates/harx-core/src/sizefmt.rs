//! Human-readable byte counts with binary prefixes.

/// Formats a byte count with binary prefixes and one decimal place
/// (`1536` → `"1.5KiB"`). Falls through to `YiB` past the table.
pub fn human_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB"] {
        if size < 1024.0 {
            return format!("{:.1}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}YiB", size)
}
