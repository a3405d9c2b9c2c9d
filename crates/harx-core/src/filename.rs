//! Output filename resolution from entry URLs.

/// Fallback when the URL cannot be parsed at all.
const UNKNOWN_FILENAME: &str = "unknown.file";

/// Derives the output filename for a captured URL.
///
/// Takes the path segment after the last `/` (query and fragment excluded).
/// When that segment is empty (path ends in `/`, or there is no path), falls
/// back to `<host>.file`; the port is never part of the name. Unparseable
/// URLs get a fixed fallback. Deterministic, and the result is always safe
/// to use as a single filename.
///
/// - `https://example.com/assets/app.js` → `app.js`
/// - `https://example.com:8443/` → `example.com.file`
pub fn filename_for_url(url: &str) -> String {
    let parsed = match url::Url::parse(url) {
        Ok(u) => u,
        Err(_) => return UNKNOWN_FILENAME.to_string(),
    };

    let segment = parsed.path().rsplit('/').next().unwrap_or("");

    let raw = if segment.is_empty() {
        match parsed.host_str() {
            Some(host) => format!("{}.file", host),
            None => UNKNOWN_FILENAME.to_string(),
        }
    } else {
        segment.to_string()
    };

    sanitize(&raw)
}

/// Longest name the filesystem accepts (Linux NAME_MAX), in bytes.
const NAME_MAX: usize = 255;

/// Minimal safety pass: path separators, NUL and other control characters
/// become `_`; the result is clamped to `NAME_MAX` bytes on a char boundary.
fn sanitize(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    clamp(out)
}

/// Clamps a name to `NAME_MAX` bytes on a char boundary. Anything prefixed
/// onto an already-resolved name (entry numbering) has to go through this
/// again before it reaches the filesystem.
pub(crate) fn clamp(mut name: String) -> String {
    if name.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !name.is_char_boundary(take) {
            take -= 1;
        }
        name.truncate(take);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_path_segment() {
        assert_eq!(
            filename_for_url("https://example.com/assets/app.js"),
            "app.js"
        );
        assert_eq!(filename_for_url("https://example.com/single"), "single");
    }

    #[test]
    fn query_and_fragment_excluded() {
        assert_eq!(
            filename_for_url("https://example.com/file.zip?token=abc#frag"),
            "file.zip"
        );
    }

    #[test]
    fn trailing_slash_falls_back_to_host() {
        assert_eq!(filename_for_url("https://example.com/"), "example.com.file");
        assert_eq!(
            filename_for_url("https://example.com/assets/"),
            "example.com.file"
        );
    }

    #[test]
    fn host_fallback_strips_port() {
        assert_eq!(
            filename_for_url("https://example.com:8443/"),
            "example.com.file"
        );
    }

    #[test]
    fn no_path_falls_back_to_host() {
        assert_eq!(filename_for_url("https://example.com"), "example.com.file");
    }

    #[test]
    fn unparseable_url() {
        assert_eq!(filename_for_url("not a url"), "unknown.file");
        assert_eq!(filename_for_url(""), "unknown.file");
    }

    #[test]
    fn deterministic() {
        let a = filename_for_url("https://example.com/x/y.css");
        let b = filename_for_url("https://example.com/x/y.css");
        assert_eq!(a, b);
    }

    #[test]
    fn sanitizes_control_chars() {
        assert_eq!(sanitize("a\x00b\tc"), "a_b_c");
        assert_eq!(sanitize("a\\b"), "a_b");
    }

    #[test]
    fn sanitize_clamps_on_char_boundary() {
        let long = "é".repeat(200);
        let out = sanitize(&long);
        assert!(out.len() <= 255);
        assert!(out.is_char_boundary(out.len()));
    }

    #[test]
    fn clamp_bounds_byte_length() {
        assert_eq!(clamp("app.js".to_string()), "app.js");
        assert_eq!(clamp("a".repeat(300)).len(), 255);
    }
}
