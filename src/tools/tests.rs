use std::time::Duration;

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

use super::*;
use crate::metadata::{
    DummyMetadata, FilterMetadata, MetadataError, MetadataRetrieve, MetadataStore, OmeMetadata,
    RetrieveAccessors, StoreAccessors,
};
use crate::model::{IndexPath, MetadataValue, Quantity};
use crate::schema::{
    Correction, DetectorType, DimensionOrder, Entity, Immersion, LaserMedium, LaserType, PixelType,
    Property,
};

fn rgb_stack() -> PixelsDescription {
    PixelsDescription {
        name: "stack".to_string(),
        dimension_order: DimensionOrder::Xyzct,
        pixel_type: PixelType::Uint16,
        size_x: 4,
        size_y: 3,
        size_z: 2,
        size_c: 3,
        samples_per_pixel: 3,
        ..Default::default()
    }
}

#[test]
fn test_create_lsid() {
    assert_eq!(create_lsid("Image", &[0]), "Image:0");
    assert_eq!(create_lsid("Detector", &[1, 0]), "Detector:1:0");
    assert_eq!(create_lsid("Experimenter", &[]), "Experimenter");
}

#[test]
fn test_sane_dimension_order() {
    assert_eq!(sane_dimension_order("XYZCT"), DimensionOrder::Xyzct);
    assert_eq!(sane_dimension_order("xyztc"), DimensionOrder::Xyztc);
    assert_eq!(sane_dimension_order("ZCT"), DimensionOrder::Xyzct);
    assert_eq!(sane_dimension_order("tz"), DimensionOrder::Xytzc);
    assert_eq!(sane_dimension_order("XYZCZ"), DimensionOrder::Xyczt);
    assert_eq!(sane_dimension_order("XY-Q-T"), DimensionOrder::Xytcz);
    assert_eq!(sane_dimension_order(""), DimensionOrder::Xyczt);
}

#[test]
fn test_zct_coords() {
    assert_eq!(zct_coords(DimensionOrder::Xyczt, 2, 3, 4, 0).unwrap(), [0, 0, 0]);
    assert_eq!(zct_coords(DimensionOrder::Xyczt, 2, 3, 4, 7).unwrap(), [0, 1, 1]);
    assert_eq!(zct_coords(DimensionOrder::Xyzct, 2, 3, 4, 7).unwrap(), [1, 0, 1]);
    assert_eq!(zct_coords(DimensionOrder::Xytzc, 2, 3, 4, 23).unwrap(), [1, 2, 3]);
}

#[test]
fn test_zct_coords_out_of_range() {
    let err = zct_coords(DimensionOrder::Xyzct, 2, 3, 4, 24).unwrap_err();
    assert!(matches!(
        err,
        MetadataError::PlaneOutOfRange { plane: 24, planes: 24 }
    ));
    assert!(zct_coords(DimensionOrder::Xyzct, 0, 1, 1, 0).is_err());
}

#[test]
fn test_populate_pixels() {
    let mut meta = OmeMetadata::new();
    let options = PopulateOptions {
        planes: true,
        ..Default::default()
    };
    populate_pixels(&mut meta, &[rgb_stack()], options).unwrap();

    assert_eq!(meta.image_id(0).as_deref(), Some("Image:0"));
    assert_eq!(meta.image_name(0).as_deref(), Some("stack"));
    assert_eq!(meta.pixels_id(0).as_deref(), Some("Pixels:0"));
    assert_eq!(meta.pixels_big_endian(0), Some(false));
    assert_eq!(meta.pixels_type(0), Some(PixelType::Uint16));
    assert_eq!(meta.pixels_size_c(0), Some(3));
    assert_eq!(meta.channel_count(0), Some(1));
    assert_eq!(meta.channel_id(0, 0).as_deref(), Some("Channel:0:0"));
    assert_eq!(meta.channel_samples_per_pixel(0, 0), Some(3));
    assert_eq!(meta.plane_count(0), Some(2));
    assert_eq!(meta.plane_the_z(0, 1), Some(1));
    assert_eq!(meta.plane_the_c(0, 1), Some(0));
    assert_eq!(meta.image_acquisition_date(0), None);

    verify_minimum_populated(&meta, 0).unwrap();
}

#[test]
fn test_populate_pixels_rejects_zero_samples() {
    let mut meta = OmeMetadata::new();
    let pixels = PixelsDescription {
        samples_per_pixel: 0,
        ..Default::default()
    };
    let err = populate_pixels(&mut meta, &[pixels], PopulateOptions::default()).unwrap_err();
    assert!(matches!(err, MetadataError::InvalidValue { .. }));
    assert!(meta.metadata_root().is_empty());
}

#[test]
fn test_populate_through_null_object() {
    let mut dummy = DummyMetadata;
    let options = PopulateOptions {
        planes: true,
        acquisition_dates: true,
    };
    populate_pixels(&mut dummy, &[rgb_stack(), rgb_stack()], options).unwrap();
    assert_eq!(dummy.image_count(), None);
}

#[test]
fn test_default_acquisition_date_from_file() {
    let file = NamedTempFile::new().unwrap();
    let modified: DateTime<Utc> = file.as_file().metadata().unwrap().modified().unwrap().into();

    let mut meta = OmeMetadata::new();
    set_default_acquisition_date(&mut meta, Some(file.path()), 0).unwrap();
    assert_eq!(meta.image_acquisition_date(0), Some(modified));
}

#[test]
fn test_default_acquisition_date_without_file() {
    let before = Utc::now();
    let mut meta = OmeMetadata::new();
    let missing = std::path::Path::new("/nonexistent/omemeta/image.tif");
    set_default_acquisition_date(&mut meta, Some(missing), 0).unwrap();
    set_default_acquisition_date(&mut meta, None, 1).unwrap();

    for image in 0..2 {
        let date = meta.image_acquisition_date(image).unwrap();
        assert!(date >= before);
        assert!(date - before < chrono::Duration::from_std(Duration::from_secs(60)).unwrap());
    }
}

#[test]
fn test_verify_minimum_populated_reports_first_gap() {
    let mut meta = OmeMetadata::new();
    populate_pixels(&mut meta, &[rgb_stack()], PopulateOptions::default()).unwrap();
    verify_minimum_populated(&meta, 0).unwrap();

    let err = verify_minimum_populated(&meta, 1).unwrap_err();
    assert!(matches!(
        err,
        MetadataError::MissingField { field: "ImageID", image: 1 }
    ));

    let mut partial = OmeMetadata::new();
    partial.set_image_id("Image:0", 0).unwrap();
    partial.set_pixels_id("Pixels:0", 0).unwrap();
    partial.set_pixels_big_endian(true, 0).unwrap();
    let err = verify_minimum_populated(&partial, 0).unwrap_err();
    assert!(matches!(
        err,
        MetadataError::MissingField { field: "PixelsDimensionOrder", image: 0 }
    ));
}

#[test]
fn test_verify_requires_channel_ids() {
    let mut meta = OmeMetadata::new();
    populate_pixels(&mut meta, &[rgb_stack()], PopulateOptions::default()).unwrap();
    meta.set_channel_name("extra", 0, 1).unwrap();
    let err = verify_minimum_populated(&meta, 0).unwrap_err();
    assert!(matches!(
        err,
        MetadataError::MissingField { field: "ChannelID", image: 0 }
    ));
}

#[test]
fn test_convert_metadata_copies_everything() {
    let mut src = OmeMetadata::new();
    src.set_uuid("urn:uuid:6c2b2c38-4c0e-4d39-9d0f-0c8e2a1e7a55").unwrap();
    populate_pixels(&mut src, &[rgb_stack(), rgb_stack()], PopulateOptions::default()).unwrap();
    src.set_arc_power(Quantity::new(100.0, crate::model::Unit::Watt), 0, 1).unwrap();
    src.set_rectangle_width(10.0, 2, 0).unwrap();
    src.set_roi_annotation_ref("Annotation:0", 2, 0).unwrap();
    src.set_binary_only_uuid("urn:uuid:companion").unwrap();

    let mut dest = OmeMetadata::new();
    let copied = convert_metadata(&src, &mut dest).unwrap();
    assert_eq!(copied, src.metadata_root().len());
    assert_eq!(dest, src);
    assert_eq!(dest.light_source_type(0, 1), Some("Arc"));
}

#[test]
fn test_convert_from_null_object_copies_nothing() {
    let mut dest = OmeMetadata::new();
    assert_eq!(convert_metadata(&DummyMetadata, &mut dest).unwrap(), 0);
    assert!(dest.metadata_root().is_empty());
}

/// Reports more images than any store can hold and nothing else
struct OversizedCounts;

impl MetadataRetrieve for OversizedCounts {
    fn uuid(&self) -> Option<String> {
        None
    }

    fn value(&self, _: Property, _: &IndexPath) -> Option<MetadataValue> {
        None
    }

    fn count(&self, entity: Entity, _: &IndexPath) -> Option<usize> {
        (entity == Entity::Image).then_some(usize::MAX)
    }

    fn kind(&self, _: Entity, _: &IndexPath) -> Option<&'static str> {
        None
    }
}

#[test]
fn test_walk_rejects_counts_past_index_limit() {
    let mut dest = OmeMetadata::new();
    assert!(matches!(
        convert_metadata(&OversizedCounts, &mut dest),
        Err(MetadataError::Unsupported(_))
    ));
    assert!(dest.metadata_root().is_empty());
}

#[test]
fn test_convert_into_filter() {
    let mut src = OmeMetadata::new();
    src.set_image_name("tab\there\u{7}", 0).unwrap();
    src.set_image_instrument_ref("Instrument\u{1}:0", 0).unwrap();

    let mut dest = FilterMetadata::new(OmeMetadata::new(), true);
    convert_metadata(&src, &mut dest).unwrap();
    assert_eq!(dest.image_name(0).as_deref(), Some("tab\there"));
    assert_eq!(dest.image_instrument_ref(0).as_deref(), Some("Instrument\u{1}:0"));
}

#[test]
fn test_ensure_valid_fills_instrument() {
    let mut meta = OmeMetadata::new();
    meta.set_objective_lens_na(1.4, 0, 0).unwrap();
    meta.set_detector_gain(2.0, 0, 1).unwrap();
    meta.set_laser_power(Quantity::new(5.0, crate::model::Unit::Milliwatt), 0, 0).unwrap();
    meta.set_filter_set_model("FS-1", 0, 0).unwrap();

    let written = ensure_valid(&mut meta).unwrap();
    assert!(written > 0);

    assert_eq!(meta.instrument_id(0).as_deref(), Some("Instrument:0"));
    assert_eq!(meta.objective_id(0, 0).as_deref(), Some("Objective:0:0"));
    assert_eq!(meta.objective_correction(0, 0), Some(Correction::Other));
    assert_eq!(meta.objective_immersion(0, 0), Some(Immersion::Other));
    assert_eq!(meta.detector_id(0, 0).as_deref(), Some("Detector:0:0"));
    assert_eq!(meta.detector_id(0, 1).as_deref(), Some("Detector:0:1"));
    assert_eq!(meta.detector_type(0, 1), Some(DetectorType::Other));
    assert_eq!(meta.laser_id(0, 0).as_deref(), Some("LightSource:0:0"));
    assert_eq!(meta.laser_type(0, 0), Some(LaserType::Other));
    assert_eq!(meta.laser_laser_medium(0, 0), Some(LaserMedium::Other));
    assert_eq!(meta.filter_set_id(0, 0).as_deref(), Some("FilterSet:0:0"));
    assert_eq!(meta.filter_id(0, 0), None);

    assert_eq!(ensure_valid(&mut meta).unwrap(), 0);
}

#[test]
fn test_ensure_valid_keeps_existing_values() {
    let mut meta = OmeMetadata::new();
    meta.set_objective_id("Objective:custom", 0, 0).unwrap();
    meta.set_objective_correction(Correction::PlanApo, 0, 0).unwrap();
    ensure_valid(&mut meta).unwrap();

    assert_eq!(meta.objective_id(0, 0).as_deref(), Some("Objective:custom"));
    assert_eq!(meta.objective_correction(0, 0), Some(Correction::PlanApo));
    assert_eq!(meta.objective_immersion(0, 0), Some(Immersion::Other));
}

#[test]
fn test_ensure_valid_experimenters() {
    let mut meta = OmeMetadata::new();
    meta.set_experimenter_middle_name("Q.", 0).unwrap();
    meta.set_experimenter_email("a@example.org", 1).unwrap();
    ensure_valid(&mut meta).unwrap();

    assert_eq!(meta.experimenter_id(0).as_deref(), Some("Experimenter:0"));
    assert_eq!(meta.experimenter_institution(0).as_deref(), Some("Unknown"));
    assert_eq!(meta.experimenter_id(1).as_deref(), Some("Experimenter:1"));
    assert_eq!(meta.experimenter_institution(1), None);
}

#[test]
fn test_ensure_valid_images_and_planes() {
    let mut meta = OmeMetadata::new();
    meta.set_pixels_dimension_order(DimensionOrder::Xyczt, 0).unwrap();
    meta.set_pixels_size_z(2, 0).unwrap();
    meta.set_pixels_size_c(2, 0).unwrap();
    meta.set_pixels_size_t(1, 0).unwrap();
    meta.set_channel_name("GFP", 0, 1).unwrap();
    meta.set_plane_exposure_time(Quantity::seconds(0.1), 0, 3).unwrap();
    meta.set_plane_the_z(1, 0, 0).unwrap();
    meta.set_stage_label_x(Quantity::micrometers(12.0), 0).unwrap();

    ensure_valid(&mut meta).unwrap();

    assert_eq!(meta.image_id(0).as_deref(), Some("Image:0"));
    assert_eq!(meta.pixels_id(0).as_deref(), Some("Pixels:0"));
    assert_eq!(meta.channel_id(0, 0).as_deref(), Some("Channel:0:0"));
    assert_eq!(meta.channel_id(0, 1).as_deref(), Some("Channel:0:1"));
    assert_eq!(meta.stage_label_name(0).as_deref(), Some("unknown"));

    // Existing coordinates win; the gaps come from the dimension order.
    assert_eq!(meta.plane_the_z(0, 0), Some(1));
    assert_eq!(meta.plane_the_c(0, 0), Some(0));
    assert_eq!(meta.plane_the_t(0, 0), Some(0));
    assert_eq!(meta.plane_the_z(0, 3), Some(1));
    assert_eq!(meta.plane_the_c(0, 3), Some(1));
    assert_eq!(meta.plane_the_t(0, 3), Some(0));
}

#[test]
fn test_ensure_valid_skips_planes_without_geometry() {
    let mut meta = OmeMetadata::new();
    meta.set_plane_delta_t(Quantity::seconds(1.0), 0, 0).unwrap();
    ensure_valid(&mut meta).unwrap();

    assert_eq!(meta.image_id(0).as_deref(), Some("Image:0"));
    assert_eq!(meta.plane_the_z(0, 0), None);
    assert_eq!(meta.stage_label_name(0), None);
}

#[test]
fn test_ensure_valid_rois_and_studies() {
    let mut meta = OmeMetadata::new();
    meta.set_ellipse_radius_x(3.0, 0, 0).unwrap();
    meta.set_polygon_points("0,0 1,1", 0, 1).unwrap();
    meta.set_project_name("p", 0).unwrap();
    meta.set_dataset_name("d", 1).unwrap();
    meta.set_experiment_description("e", 0).unwrap();
    meta.set_experimenter_group_name("g", 0).unwrap();

    ensure_valid(&mut meta).unwrap();

    assert_eq!(meta.roi_id(0).as_deref(), Some("ROI:0"));
    assert_eq!(meta.ellipse_id(0, 0).as_deref(), Some("Shape:0:0"));
    assert_eq!(meta.polygon_id(0, 1).as_deref(), Some("Shape:0:1"));
    assert_eq!(meta.rectangle_id(0, 0), None);
    assert_eq!(meta.project_id(0).as_deref(), Some("Project:0"));
    assert_eq!(meta.dataset_id(0).as_deref(), Some("Dataset:0"));
    assert_eq!(meta.dataset_id(1).as_deref(), Some("Dataset:1"));
    assert_eq!(meta.experiment_id(0).as_deref(), Some("Experiment:0"));
    assert_eq!(
        meta.experiment_type(0),
        Some(crate::schema::ExperimentType::Other)
    );
    assert_eq!(meta.experimenter_group_id(0).as_deref(), Some("ExperimenterGroup:0"));
}

#[test]
fn test_ensure_valid_on_trait_object() {
    let mut meta: Box<dyn crate::metadata::Metadata> = Box::new(OmeMetadata::new());
    meta.set_image_name("x", 0).unwrap();
    assert_eq!(ensure_valid(meta.as_mut()).unwrap(), 2);
    assert!(meta.root().is_some());
}
