// Command-line surface and the seeding run itself:
// probe -> users -> books -> summary, strictly in that order.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use tracing::info;

use crate::api::{ApiClient, LibraryApi};
use crate::probe::{wait_for_api, ProbePolicy};
use crate::samples::{SAMPLE_BOOKS, SAMPLE_USERS};
use crate::seed::{seed, Books, SeedTarget, Users};
use crate::summary::Summary;
use crate::ui;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Seed de usuarios y libros para la API de biblioteca.
#[derive(Parser, Debug, Clone)]
#[command(name = "library-seed", version)]
pub struct Cli {
    /// URL base de la API
    #[arg(long, env = "LIBRARY_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Omitir la espera de disponibilidad de la API
    #[arg(long)]
    pub skip_wait: bool,
}

impl Cli {
    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// How a run ended. Anything not covered here is an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed {
        users_created: usize,
        books_created: usize,
        summary: Summary,
    },
    /// The probe used up its budget; nothing was inserted.
    ApiUnavailable,
}

/// Run the seeder against a real API as configured by `cli`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<RunStatus> {
    let api = ApiClient::new(cli.base_url()).context("Failed to build HTTP client")?;
    let probe = (!cli.skip_wait).then(ProbePolicy::default);
    let progress = if probe.is_some() {
        ui::spinner()
    } else {
        ProgressBar::hidden()
    };
    seed_library(&api, api.base_url(), probe.as_ref(), &progress, out)
}

/// The whole seeding sequence. `probe` is `None` when the availability
/// wait is skipped.
pub fn seed_library<A: LibraryApi>(
    api: &A,
    base_url: &str,
    probe: Option<&ProbePolicy>,
    progress: &ProgressBar,
    out: &mut impl Write,
) -> Result<RunStatus> {
    ui::banner(out)?;

    if let Some(policy) = probe {
        ui::waiting(out, base_url)?;
        if !wait_for_api(api, policy, progress) {
            ui::api_unreachable(out)?;
            return Ok(RunStatus::ApiUnavailable);
        }
        ui::api_ready(out)?;
    }

    let users_created = seed_collection::<Users, _>(api, SAMPLE_USERS, out)?;
    let books_created = seed_collection::<Books, _>(api, SAMPLE_BOOKS, out)?;

    let summary = Summary::fetch(api).context("Failed to load the library summary")?;
    ui::summary(out, &summary)?;
    ui::finished(out, base_url)?;

    info!(users_created, books_created, "seeding finished");
    Ok(RunStatus::Completed {
        users_created,
        books_created,
        summary,
    })
}

fn seed_collection<T: SeedTarget, A: LibraryApi>(
    api: &A,
    samples: &[T::Sample],
    out: &mut impl Write,
) -> Result<usize> {
    ui::seed_heading::<T>(out)?;
    let report = seed::<T, _>(api, samples)
        .with_context(|| format!("Failed to seed {} through {}", T::LABEL, T::PATH))?;
    ui::seed_report::<T>(out, &report)?;
    Ok(report.created_count())
}
