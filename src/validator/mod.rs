//! # Snapshot Validation Module
//!
//! Integrity validation for JSON metadata snapshots written by
//! [`OmeMetadata::to_json`](crate::metadata::OmeMetadata::to_json).
//!
//! ## Validation Checklist
//!
//! 1. **Structure Check**: the path is a readable file that deserializes
//! 2. **Document Identity**: the UUID is present and `urn:uuid:` formatted
//! 3. **Pixels Contract**: every image carries its minimum pixel metadata
//! 4. **Cross References**: identifiers are unique, references resolve, and
//!    map annotations name every key
//!
//! ## Usage
//!
//! ```rust,no_run
//! use omemeta::validator::validate_snapshot;
//! use std::path::Path;
//!
//! match validate_snapshot(Path::new("image.ome.json")) {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("Validation failed: {}", e),
//! }
//! ```

use std::path::Path;

use anyhow::Result;

use crate::metadata::MetadataRetrieve;

pub use report::{CheckStatus, Stage, Tally, ValidationCheck, ValidationReport};

mod document;
mod references;
mod report;
mod structure;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The snapshot path is missing or not a file
    #[error("Structure error: {0}")]
    StructureError(String),
}

/// Main validation entry point
pub fn validate_snapshot(path: &Path) -> Result<ValidationReport> {
    let mut report = ValidationReport::new(path.display().to_string());

    // 1. Structure Check
    let Some(meta) = structure::check_structure(path, &mut report)? else {
        return Ok(report);
    };

    validate_into(&meta, &mut report)?;
    Ok(report)
}

/// Run the content checks on an already loaded store.
pub fn validate_metadata<R>(meta: &R, label: impl Into<String>) -> Result<ValidationReport>
where
    R: MetadataRetrieve + ?Sized,
{
    let mut report = ValidationReport::new(label);
    validate_into(meta, &mut report)?;
    Ok(report)
}

fn validate_into<R>(meta: &R, report: &mut ValidationReport) -> Result<()>
where
    R: MetadataRetrieve + ?Sized,
{
    // 2. Document Identity
    document::check_uuid(meta, report);

    // 3. Pixels Contract
    document::check_images(meta, report);

    // 4. Cross References
    references::check_references(meta, report)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::metadata::{DummyMetadata, MetadataStore, OmeMetadata, StoreAccessors};
    use crate::model::MapPair;
    use crate::tools::{populate_pixels, PixelsDescription, PopulateOptions};

    fn valid_document() -> OmeMetadata {
        let mut meta = OmeMetadata::new();
        meta.set_uuid("urn:uuid:3f1c2a9e-5b7d-4e2a-8c1f-9d0b6e4a2c71").unwrap();
        populate_pixels(&mut meta, &[PixelsDescription::default()], PopulateOptions::default())
            .unwrap();
        meta.set_instrument_id("Instrument:0", 0).unwrap();
        meta.set_image_instrument_ref("Instrument:0", 0).unwrap();
        meta
    }

    fn write_snapshot(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn status_of<'a>(report: &'a ValidationReport, prefix: &str) -> &'a CheckStatus {
        &report
            .check(prefix)
            .unwrap_or_else(|| panic!("no check named {prefix}"))
            .status
    }

    #[test]
    fn test_report_groups_checks_by_stage() {
        let mut report = ValidationReport::new("test.ome.json");
        report.pass(Stage::Snapshot, "Path exists");
        report.warn(Stage::Identity, "Document UUID", "Document has no UUID");
        report.fail(Stage::References, "References resolve (1)", "ImageExperimenterRef[0] -> 'x'");

        let output = report.to_string();
        let headings: Vec<usize> = [Stage::Snapshot, Stage::Identity, Stage::References]
            .iter()
            .map(|stage| output.find(stage.title()).unwrap())
            .collect();
        assert!(headings.windows(2).all(|w| w[0] < w[1]), "{output}");
        assert!(!output.contains(Stage::Pixels.title()));
        assert!(output.contains("warn Document UUID: Document has no UUID"));
        assert!(output.contains("- ImageExperimenterRef[0] -> 'x'"));
        assert!(output.ends_with("1 passed, 1 warnings, 1 failed: FAILED\n"));
        assert_eq!(
            report.tally(),
            Tally {
                passed: 1,
                warnings: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn test_failed_check_keeps_every_problem() {
        let mut report = ValidationReport::new("memory");
        let problems: Vec<String> = (0..8).map(|i| format!("p{i}")).collect();
        report.record(Stage::References, "Many", problems.clone());
        report.record(Stage::References, "None", Vec::new());

        assert_eq!(status_of(&report, "Many"), &CheckStatus::Failed(problems));
        assert_eq!(status_of(&report, "None"), &CheckStatus::Passed);

        let output = report.to_string();
        assert!(output.contains("- p4"));
        assert!(!output.contains("- p5"));
        assert!(output.contains("... and 3 more"));
    }

    #[test]
    fn test_valid_snapshot_passes() {
        let file = write_snapshot(&valid_document().to_json().unwrap());
        let report = validate_snapshot(file.path()).unwrap();
        assert!(!report.has_failures(), "{}", report);
        assert!(!report.has_warnings(), "{}", report);
        assert!(report.format_colored().contains("PASSED"));
        assert!(report.checks.iter().all(|c| c.status == CheckStatus::Passed));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_snapshot(&dir.path().join("absent.json")).is_err());
        assert!(validate_snapshot(dir.path()).is_err());
    }

    #[test]
    fn test_unparsable_snapshot_fails() {
        let file = write_snapshot("{ not json");
        let report = validate_snapshot(file.path()).unwrap();
        assert_eq!(report.tally().failed, 1);
        assert!(matches!(status_of(&report, "Snapshot"), CheckStatus::Failed(_)));
    }

    #[test]
    fn test_uuid_checks() {
        let mut meta = valid_document();
        meta.set_uuid("3f1c2a9e-5b7d-4e2a-8c1f-9d0b6e4a2c71").unwrap();
        let report = validate_metadata(&meta, "memory").unwrap();
        assert!(matches!(status_of(&report, "Document UUID"), CheckStatus::Failed(_)));

        meta.set_uuid("urn:uuid:not-a-uuid").unwrap();
        let report = validate_metadata(&meta, "memory").unwrap();
        assert!(matches!(status_of(&report, "Document UUID"), CheckStatus::Failed(_)));

        let report = validate_metadata(&DummyMetadata, "dummy").unwrap();
        assert!(matches!(status_of(&report, "Document UUID"), CheckStatus::Warning(_)));
        assert!(matches!(status_of(&report, "Images"), CheckStatus::Warning(_)));
    }

    #[test]
    fn test_incomplete_image_fails() {
        let mut meta = valid_document();
        meta.set_image_name("second", 1).unwrap();
        let report = validate_metadata(&meta, "memory").unwrap();
        let CheckStatus::Failed(problems) = status_of(&report, "Images minimally populated") else {
            panic!("expected failure: {}", report);
        };
        assert_eq!(problems.len(), 1, "{problems:?}");
        assert!(problems[0].contains("image 1"), "{problems:?}");
    }

    #[test]
    fn test_duplicate_ids_and_dangling_references() {
        let mut meta = valid_document();
        meta.set_detector_id("Instrument:0", 0, 0).unwrap();
        meta.set_image_experimenter_ref("Experimenter:9", 0).unwrap();
        let report = validate_metadata(&meta, "memory").unwrap();

        assert!(matches!(status_of(&report, "Identifiers unique"), CheckStatus::Failed(_)));
        let CheckStatus::Failed(dangling) = status_of(&report, "References resolve") else {
            panic!("expected failure: {}", report);
        };
        assert_eq!(dangling.len(), 1, "{dangling:?}");
        assert!(dangling[0].contains("Experimenter:9"));
    }

    #[test]
    fn test_unnamed_map_keys_fail() {
        let mut meta = valid_document();
        meta.set_map_annotation_value(vec![MapPair::new("", "x"), MapPair::new("k", "v")], 0)
            .unwrap();
        let report = validate_metadata(&meta, "memory").unwrap();
        assert!(matches!(status_of(&report, "Map keys named"), CheckStatus::Failed(_)));
    }
}
