use clap::error::ErrorKind;
use clap::Parser;
use harx_core::config;
use harx_core::error::ArchiveError;
use harx_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too; keep their conventional
            // exit 0 while usage errors exit 1.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("harx error: {:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    cli.run(&cfg)
}

/// Archive failures carry their documented exit codes (2 format, 3 access);
/// anything else is 1.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ArchiveError>() {
        Some(archive_err) => archive_err.exit_code(),
        None => 1,
    }
}
