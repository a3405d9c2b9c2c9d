//! Archive error type for exit-code classification.

use std::fmt;
use std::path::PathBuf;

/// Error returned when opening or parsing a HAR archive.
/// Used so we can classify the failure (exit code) before converting to anyhow.
#[derive(Debug)]
pub enum ArchiveError {
    /// The archive could not be read (missing file, permissions, a directory).
    Access {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file was read but is not a usable HAR document (bad JSON or
    /// missing `log.entries` structure).
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ArchiveError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArchiveError::Format { .. } => 2,
            ArchiveError::Access { .. } => 3,
        }
    }
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::Access { path, source } => {
                write!(f, "cannot open archive {}: {}", path.display(), source)
            }
            ArchiveError::Format { path, source } => {
                write!(f, "invalid HAR archive {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArchiveError::Access { source, .. } => Some(source),
            ArchiveError::Format { source, .. } => Some(source),
        }
    }
}
