use uuid::Uuid;

use crate::metadata::{MetadataRetrieve, RetrieveAccessors};
use crate::tools::verify_minimum_populated;

use super::{Stage, ValidationReport};

const UUID_PREFIX: &str = "urn:uuid:";

/// Step 2: document identifier
pub(crate) fn check_uuid<R: MetadataRetrieve + ?Sized>(meta: &R, report: &mut ValidationReport) {
    let Some(uuid) = meta.uuid() else {
        report.warn(Stage::Identity, "Document UUID", "Document has no UUID");
        return;
    };

    match uuid.strip_prefix(UUID_PREFIX).map(Uuid::parse_str) {
        Some(Ok(_)) => report.pass(Stage::Identity, "Document UUID"),
        Some(Err(e)) => report.fail(
            Stage::Identity,
            "Document UUID",
            format!("'{}' is not a valid UUID: {}", uuid, e),
        ),
        None => report.fail(
            Stage::Identity,
            "Document UUID",
            format!("'{}' does not start with {}", uuid, UUID_PREFIX),
        ),
    }
}

/// Step 3: every image carries its minimum pixel metadata
pub(crate) fn check_images<R: MetadataRetrieve + ?Sized>(meta: &R, report: &mut ValidationReport) {
    let images = meta.image_count().unwrap_or(0);
    if images == 0 {
        report.warn(Stage::Pixels, "Images", "Document contains no images");
        return;
    }

    let problems: Vec<String> = (0..images)
        .filter_map(|image| verify_minimum_populated(meta, image).err())
        .map(|e| e.to_string())
        .collect();
    report.record(
        Stage::Pixels,
        format!("Images minimally populated ({})", images),
        problems,
    );
}
