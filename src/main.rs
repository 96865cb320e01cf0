// Entrypoint for the seeder.
// - Keeps `main` small: parse flags, set up logging, hand over to `cli::run`.
// - Logs go to stderr so stdout only carries the seeding report.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use library_seed::cli::{run, Cli, RunStatus};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();
    let status = run(&cli, &mut io::stdout().lock())?;

    Ok(match status {
        RunStatus::Completed { .. } => ExitCode::SUCCESS,
        RunStatus::ApiUnavailable => ExitCode::FAILURE,
    })
}

/// `RUST_LOG` controls verbosity; only warnings are shown by default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}
