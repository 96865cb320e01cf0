// UI layer: turns probe results, seeding reports and the summary into the
// human-readable lines the seeder prints. Every function writes to a
// caller-supplied `Write` so the output can be captured in tests.

use std::io::{self, Write};

use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::seed::{Outcome, SeedReport, SeedTarget};
use crate::summary::Summary;

const RULE_WIDTH: usize = 50;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "╔══════════════════════════════════════════╗")?;
    writeln!(out, "║   Library — Script de Seed de Datos      ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝")?;
    writeln!(out)
}

pub fn waiting(out: &mut impl Write, base_url: &str) -> io::Result<()> {
    writeln!(out, "⏳  Esperando a la API en {base_url} …")?;
    out.flush()
}

pub fn api_ready(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}  API disponible.\n", "✅".green())
}

pub fn api_unreachable(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}  No se pudo conectar con la API.", "❌".red())
}

/// Spinner shown while the probe is polling.
pub fn spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("   {spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner
}

pub fn seed_heading<T: SeedTarget>(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", T::HEADING)?;
    out.flush()
}

/// One line per sample, in order, followed by the number created.
pub fn seed_report<T: SeedTarget>(
    out: &mut impl Write,
    report: &SeedReport<T::Record>,
) -> io::Result<()> {
    for entry in &report.entries {
        match &entry.outcome {
            Outcome::Created(record) => {
                writeln!(out, "   {}  {}", "✔".green(), T::describe(record))?
            }
            Outcome::Skipped => writeln!(
                out,
                "   {}  {} — ya existe, omitido.",
                "↩".dark_grey(),
                entry.name
            )?,
            Outcome::Failed(reason) => {
                writeln!(out, "   {}  {} — {}", "⚠".yellow(), entry.name, reason)?
            }
        }
    }
    writeln!(
        out,
        "   → {} {} nuevos insertados.\n",
        report.created_count(),
        T::LABEL
    )
}

pub fn summary(out: &mut impl Write, summary: &Summary) -> io::Result<()> {
    let rule = "─".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "📊  Resumen de la base de datos:")?;
    writeln!(out, "   • Usuarios: {}", summary.users)?;
    writeln!(out, "   • Libros: {}", summary.books)?;
    writeln!(
        out,
        "   • Préstamos: {} (activos: {})",
        summary.loans, summary.active_loans
    )?;
    writeln!(out, "{rule}")
}

pub fn finished(out: &mut impl Write, base_url: &str) -> io::Result<()> {
    writeln!(out, "\n🎉  Seed completado exitosamente.")?;
    writeln!(out, "   Swagger UI: {base_url}/q/swagger-ui")?;
    writeln!(out)
}
