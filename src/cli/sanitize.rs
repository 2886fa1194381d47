use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use omemeta::prelude::*;
use omemeta::tools::convert_metadata;

use super::info::load_snapshot;

/// Rewrite a snapshot through the sanitizing decorator
pub fn run(file: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let source = load_snapshot(&file)?;

    let mut filtered = FilterMetadata::new(OmeMetadata::new(), true);
    let copied = convert_metadata(&source, &mut filtered).context("Failed to copy metadata")?;
    let cleaned = filtered.into_inner();

    let changed = source
        .metadata_root()
        .slots()
        .filter(|(property, path, value)| cleaned.metadata_root().get(*property, path) != Some(*value))
        .count();

    let output = output.unwrap_or_else(|| file.clone());
    std::fs::write(&output, cleaned.to_json_pretty()?)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Sanitized {} of {} values", changed, copied);
    println!("{}: {} value(s) sanitized", output.display(), changed);
    Ok(())
}
