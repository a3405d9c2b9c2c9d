//! CLI for the harx HAR extractor.

mod commands;

use anyhow::Result;
use clap::Parser;
use harx_core::config::HarxConfig;
use harx_core::extract::{ExtractOptions, Selection};
use harx_core::har;
use std::path::PathBuf;

use commands::{run_csv, run_extract, run_list};

/// Top-level CLI for the harx HAR extractor.
#[derive(Debug, Parser)]
#[command(name = "harx")]
#[command(version)]
#[command(about = "harx: list, export and extract HTTP-archive entries", long_about = None)]
pub struct Cli {
    /// Path to the HAR archive.
    pub archive: PathBuf,

    /// Save the entry index as CSV to the given path.
    #[arg(short = 'c', long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Print the entry index to stdout.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Extract the payload of the entry with this index (see --list).
    #[arg(short = 'x', long = "extract", value_name = "INDEX")]
    pub extract: Option<usize>,

    /// Extract the payloads of all entries.
    #[arg(long = "extract-all")]
    pub extract_all: bool,

    /// Directory to extract files to.
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Prefix extracted filenames with the entry index from --list.
    #[arg(short = 'n', long = "number")]
    pub number: bool,
}

impl Cli {
    /// Parse the archive once, then run the requested operations in order:
    /// csv, list, extract, extract-all. Operations are independent and
    /// combinable; a run with none of them still validates the archive.
    pub fn run(self, cfg: &HarxConfig) -> Result<()> {
        let entries = har::load_catalog(&self.archive)?;
        tracing::debug!(
            "archive {} has {} entries",
            self.archive.display(),
            entries.len()
        );

        if let Some(csv_path) = &self.csv {
            run_csv(&entries, csv_path)?;
        }

        if self.list {
            run_list(&entries);
        }

        let opts = self.extract_options(cfg);
        if let Some(index) = self.extract {
            run_extract(&entries, Selection::Index(index), &opts);
        }

        if self.extract_all {
            run_extract(&entries, Selection::All, &opts);
        }

        Ok(())
    }

    /// Flags win over config; the final directory fallback is the cwd.
    fn extract_options(&self, cfg: &HarxConfig) -> ExtractOptions {
        let dir = self
            .directory
            .clone()
            .or_else(|| cfg.extract_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        ExtractOptions {
            dir,
            number_files: self.number || cfg.number_files,
        }
    }
}
