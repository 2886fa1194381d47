//! Integration tests for omemeta
//!
//! These tests drive the public API end to end: a reader-style producer
//! populates a store, the snapshot goes to disk, and the tools read it back.

use omemeta::export::{read_tsv, write_tsv};
use omemeta::prelude::*;
use omemeta::tools::{
    convert_metadata, ensure_valid, populate_pixels, verify_minimum_populated, PixelsDescription,
    PopulateOptions,
};
use omemeta::validator::{validate_snapshot, CheckStatus};
use std::fs::{self, File};
use std::io::BufReader;
use tempfile::tempdir;

/// A format reader writes through whatever store it is handed.
fn read_fake_format(store: &mut dyn MetadataStore) -> Result<(), MetadataError> {
    store.set_uuid("urn:uuid:5d0c2f5e-7a7b-4f61-9a53-2c7f0e4d1b90")?;

    let pixels = PixelsDescription {
        name: "plate\u{0}scan".to_string(),
        dimension_order: DimensionOrder::Xyzct,
        pixel_type: PixelType::Uint8,
        size_x: 256,
        size_y: 256,
        size_z: 3,
        size_c: 2,
        size_t: 1,
        ..Default::default()
    };
    let options = PopulateOptions {
        planes: true,
        acquisition_dates: false,
    };
    populate_pixels(store, &[pixels.clone(), pixels], options)?;

    store.set_channel_name("Hoechst\r", 0, 0)?;
    store.set_channel_name("Phalloidin", 0, 1)?;
    store.set_instrument_id("Instrument:0", 0)?;
    store.set_arc_type(ArcType::Hg, 0, 0)?;
    store.set_image_instrument_ref("Instrument:0", 1)?;
    store.set_ellipse_radius_x(4.0, 0, 0)?;
    Ok(())
}

/// Test the complete populate-save-validate cycle
#[test]
fn test_snapshot_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plate.ome.json");

    let mut meta = FilterMetadata::new(OmeMetadata::new(), true);
    read_fake_format(&mut meta).unwrap();
    let written = ensure_valid(&mut meta).unwrap();
    assert!(written > 0);

    assert_eq!(meta.image_name(0).as_deref(), Some("platescan"));
    assert_eq!(meta.channel_name(0, 0).as_deref(), Some("Hoechst"));
    assert_eq!(meta.arc_id(0, 0).as_deref(), Some("LightSource:0:0"));
    assert_eq!(meta.ellipse_id(0, 0).as_deref(), Some("Shape:0:0"));
    assert_eq!(meta.roi_id(0).as_deref(), Some("ROI:0"));
    for image in 0..2 {
        verify_minimum_populated(&meta, image).unwrap();
    }

    fs::write(&path, meta.delegate().to_json_pretty().unwrap()).unwrap();

    let report = validate_snapshot(&path).unwrap();
    assert!(!report.has_failures(), "{}", report);
    assert!(!report.has_warnings(), "{}", report);

    let restored = OmeMetadata::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&restored, meta.delegate());
    assert_eq!(restored.light_source_type(0, 0), Some("Arc"));
    assert_eq!(restored.plane_count(1), Some(6));
}

/// Test that the same producer runs unchanged against the null object
#[test]
fn test_null_object_pipeline() {
    let mut dummy = DummyMetadata::new();
    read_fake_format(&mut dummy).unwrap();
    assert_eq!(ensure_valid(&mut dummy).unwrap(), 0);
    assert_eq!(dummy.image_count(), None);
    assert!(verify_minimum_populated(&dummy, 0).is_err());

    let mut boxed: Box<dyn MetadataStore> = Box::new(FilterMetadata::new(DummyMetadata, true));
    read_fake_format(boxed.as_mut()).unwrap();
    assert!(boxed.root().is_none());
}

/// Test export to disk and import back into a fresh store
#[test]
fn test_tsv_export_import() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plate.tsv");

    let mut meta = OmeMetadata::new();
    read_fake_format(&mut meta).unwrap();

    let rows = write_tsv(&meta, File::create(&path).unwrap()).unwrap();
    assert_eq!(rows, meta.metadata_root().len() + 1);

    let mut restored = OmeMetadata::new();
    read_tsv(BufReader::new(File::open(&path).unwrap()), &mut restored).unwrap();
    assert_eq!(restored, meta);
    // Unfiltered store keeps the control characters.
    assert_eq!(restored.channel_name(0, 0).as_deref(), Some("Hoechst\r"));
}

/// Test copying an unfiltered store through the decorator
#[test]
fn test_convert_sanitizes_copy() {
    let mut raw = OmeMetadata::new();
    read_fake_format(&mut raw).unwrap();

    let mut clean = FilterMetadata::new(OmeMetadata::new(), true);
    let copied = convert_metadata(&raw, &mut clean).unwrap();
    assert_eq!(copied, raw.metadata_root().len());

    let clean = clean.into_inner();
    assert_eq!(clean.uuid(), raw.uuid());
    assert_eq!(clean.image_name(1).as_deref(), Some("platescan"));
    assert_eq!(clean.pixels_type(1), Some(PixelType::Uint8));
    assert_eq!(clean.image_instrument_ref(1), raw.image_instrument_ref(1));
}

/// Test that a broken snapshot is reported rather than rejected outright
#[test]
fn test_validate_reports_problems() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.ome.json");

    let mut meta = OmeMetadata::new();
    meta.set_uuid("not-a-urn").unwrap();
    meta.set_image_name("orphan", 0).unwrap();
    meta.set_image_experiment_ref("Experiment:7", 0).unwrap();
    fs::write(&path, meta.to_json().unwrap()).unwrap();

    let report = validate_snapshot(&path).unwrap();
    assert!(report.has_failures());
    let failed: Vec<&str> = report
        .checks
        .iter()
        .filter(|c| matches!(c.status, CheckStatus::Failed(_)))
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(failed.len(), 3, "{}", report);
    assert!(failed.iter().any(|n| n.starts_with("Document UUID")));
    assert!(failed.iter().any(|n| n.starts_with("Images")));
    assert!(failed.iter().any(|n| n.starts_with("References")));
}
