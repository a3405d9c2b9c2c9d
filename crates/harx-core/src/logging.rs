//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Diagnostics never go to stdout; that stream is reserved for the listing
//! and extraction report lines.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(std::fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// Initialize structured logging to `~/.local/state/harx/harx.log`, falling
/// back to stderr when the state dir cannot be used (e.g. read-only home).
/// Infallible so the CLI never refuses to run over a logging problem.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,harx_core=debug,harx_cli=debug"));

    match open_log_file() {
        Some((file, path)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
                .with_ansi(false)
                .init();
            tracing::info!("harx logging initialized at {}", path.display());
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
        }
    }
}

fn open_log_file() -> Option<(std::fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harx").ok()?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir).ok()?;
    let path = log_dir.join("harx.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((file, path))
}
