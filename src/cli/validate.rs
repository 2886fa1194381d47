use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use omemeta::validator::validate_snapshot;

/// Validate a metadata snapshot, exiting non-zero when any check fails
pub fn run(file: PathBuf) -> Result<()> {
    info!("Validating {}", file.display());

    let report = validate_snapshot(&file)
        .with_context(|| format!("Cannot validate {}", file.display()))?;
    println!("{}", report.format_colored());

    let tally = report.tally();
    info!(
        "{} checks: {} passed, {} warnings, {} failed",
        report.checks.len(),
        tally.passed,
        tally.warnings,
        tally.failed
    );
    if tally.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
