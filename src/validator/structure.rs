use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::metadata::OmeMetadata;

use super::{Stage, ValidationError, ValidationReport};

/// Step 1: the snapshot exists and deserializes
pub(crate) fn check_structure(path: &Path, report: &mut ValidationReport) -> Result<Option<OmeMetadata>> {
    if !path.exists() {
        report.fail(
            Stage::Snapshot,
            "Path exists",
            format!("Path does not exist: {}", path.display()),
        );
        anyhow::bail!(ValidationError::StructureError("Path does not exist".to_string()));
    }
    if !path.is_file() {
        report.fail(Stage::Snapshot, "Valid file type", "Path is not a regular file");
        anyhow::bail!(ValidationError::StructureError("Invalid path type".to_string()));
    }
    report.pass(Stage::Snapshot, "Path exists");

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} bytes from {}", json.len(), path.display());

    Ok(check_snapshot(&json, report))
}

/// Parse snapshot text, recording the outcome
pub(crate) fn check_snapshot(json: &str, report: &mut ValidationReport) -> Option<OmeMetadata> {
    match OmeMetadata::from_json(json) {
        Ok(meta) => {
            report.pass(
                Stage::Snapshot,
                format!("Snapshot deserializes ({} values)", meta.metadata_root().len()),
            );
            Some(meta)
        }
        Err(e) => {
            report.fail(
                Stage::Snapshot,
                "Snapshot deserializes",
                format!("Failed to parse snapshot: {}", e),
            );
            None
        }
    }
}
