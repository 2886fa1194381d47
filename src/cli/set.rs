use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use omemeta::model::IndexPath;
use omemeta::prelude::*;

use super::info::load_snapshot;

/// Set one property in a snapshot, creating the file if needed
pub fn run(
    file: PathBuf,
    property: String,
    path: String,
    value: String,
    filter: bool,
) -> Result<()> {
    let property: Property = property
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("Unknown property")?;
    let path: IndexPath = path
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .with_context(|| format!("Invalid index path for {}", property))?;
    let value = property
        .value_type()
        .parse(&value)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("Invalid value for {}", property))?;

    let store = if file.exists() {
        load_snapshot(&file)?
    } else {
        OmeMetadata::new()
    };

    let mut meta = FilterMetadata::new(store, filter);
    meta.set_value(property, path, value)
        .with_context(|| format!("Failed to set {}[{}]", property, path))?;

    let store = meta.into_inner();
    std::fs::write(&file, store.to_json_pretty()?)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    info!("Set {}[{}] in {}", property, path, file.display());
    if let Some(stored) = store.value(property, &path) {
        println!("{}[{}] = {}", property, path, stored);
    }
    Ok(())
}
