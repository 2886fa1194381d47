use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use omemeta::prelude::*;
use omemeta::tools::{
    create_lsid, ensure_valid, populate_pixels, verify_minimum_populated, PixelsDescription,
    PopulateOptions,
};

use super::config::Config;

/// Channel names, emission wavelengths (nm) and display colors cycled through by the demo
const DEMO_CHANNELS: &[(&str, f64, (u8, u8, u8))] = &[
    ("DAPI", 461.0, (0, 0, 255)),
    ("GFP", 510.0, (0, 255, 0)),
    ("mCherry", 610.0, (255, 0, 0)),
    ("Cy5", 670.0, (255, 0, 255)),
];

/// Generate a demo metadata snapshot
pub fn run(
    output: PathBuf,
    config: &Config,
    images: Option<usize>,
    channels: Option<usize>,
    no_filter: bool,
) -> Result<()> {
    info!("OME Metadata Demo");
    info!("=================");

    let images = images.or(config.demo.images).unwrap_or(1);
    let channels = channels.or(config.demo.channels).unwrap_or(2);
    let planes = config.demo.planes.unwrap_or(true);
    let filter = config.filter_enabled(no_filter);

    let mut meta = FilterMetadata::new(OmeMetadata::new(), filter);
    build_demo_metadata(&mut meta, images, channels, planes)?;

    let written = ensure_valid(&mut meta).context("Failed to complete required fields")?;
    info!("  Defaults inserted: {}", written);
    for image in 0..images {
        verify_minimum_populated(&meta, image)
            .with_context(|| format!("Demo image {} is incomplete", image))?;
    }

    let store = meta.into_inner();
    std::fs::write(&output, store.to_json_pretty()?)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Demo complete!");
    info!("  Output file: {}", output.display());
    info!("  Images: {}", images);
    info!("  Channels per image: {}", channels);
    info!("  Values written: {}", store.metadata_root().len());
    info!("  Sanitizing: {}", if filter { "on" } else { "off" });

    Ok(())
}

/// Populate a store with a small but complete acquisition
pub(crate) fn build_demo_metadata<S>(
    meta: &mut S,
    images: usize,
    channels: usize,
    planes: bool,
) -> Result<()>
where
    S: MetadataStore + ?Sized,
{
    meta.set_uuid(&format!("urn:uuid:{}", uuid::Uuid::new_v4()))?;

    // People
    meta.set_experimenter_id("Experimenter:0", 0)?;
    meta.set_experimenter_first_name("Ada", 0)?;
    meta.set_experimenter_last_name("Byron", 0)?;
    meta.set_experimenter_email("ada@example.org", 0)?;
    // Vendor headers routinely carry NUL padding.
    meta.set_experimenter_institution("Imaging Core Facility\u{0}\u{0}", 0)?;
    meta.set_experimenter_group_id("ExperimenterGroup:0", 0)?;
    meta.set_experimenter_group_name("Cell Biology", 0)?;
    meta.set_experimenter_group_experimenter_ref("Experimenter:0", 0, 0)?;
    meta.set_experimenter_group_leader("Experimenter:0", 0, 0)?;

    // Instrument
    meta.set_instrument_id("Instrument:0", 0)?;
    meta.set_microscope_manufacturer("Zeiss", 0)?;
    meta.set_microscope_model("LSM 980", 0)?;
    meta.set_microscope_type(MicroscopeType::Inverted, 0)?;
    meta.set_objective_id("Objective:0:0", 0, 0)?;
    meta.set_objective_nominal_magnification(63.0, 0, 0)?;
    meta.set_objective_lens_na(1.4, 0, 0)?;
    meta.set_objective_immersion(Immersion::Oil, 0, 0)?;
    meta.set_objective_correction(Correction::PlanApo, 0, 0)?;
    meta.set_detector_id("Detector:0:0", 0, 0)?;
    meta.set_detector_type(DetectorType::Pmt, 0, 0)?;
    meta.set_detector_gain(750.0, 0, 0)?;
    meta.set_laser_id("LightSource:0:0", 0, 0)?;
    meta.set_laser_type(LaserType::SolidState, 0, 0)?;
    meta.set_laser_laser_medium(LaserMedium::Other, 0, 0)?;
    meta.set_laser_wavelength(Quantity::nanometers(488.0), 0, 0)?;
    meta.set_laser_power(Quantity::new(10.0, Unit::Milliwatt), 0, 0)?;
    meta.set_filter_id("Filter:0:0", 0, 0)?;
    meta.set_filter_type(FilterType::BandPass, 0, 0)?;
    meta.set_transmittance_range_cut_in(Quantity::nanometers(500.0), 0, 0)?;
    meta.set_transmittance_range_cut_out(Quantity::nanometers(550.0), 0, 0)?;
    meta.set_filter_set_id("FilterSet:0:0", 0, 0)?;
    meta.set_filter_set_emission_filter_ref("Filter:0:0", 0, 0, 0)?;

    // Pixels
    let descriptions: Vec<PixelsDescription> = (0..images)
        .map(|image| PixelsDescription {
            name: format!("Demo image {}", image),
            dimension_order: DimensionOrder::Xyczt,
            pixel_type: PixelType::Uint16,
            size_x: 512,
            size_y: 512,
            size_z: 5,
            size_c: channels,
            size_t: 3,
            ..Default::default()
        })
        .collect();
    let options = PopulateOptions {
        planes,
        acquisition_dates: true,
    };
    populate_pixels(meta, &descriptions, options)?;

    for image in 0..images {
        meta.set_image_description("Generated by omemeta demo\u{7}", image)?;
        meta.set_image_instrument_ref("Instrument:0", image)?;
        meta.set_image_experimenter_ref("Experimenter:0", image)?;
        meta.set_pixels_physical_size_x(Quantity::micrometers(0.132), image)?;
        meta.set_pixels_physical_size_y(Quantity::micrometers(0.132), image)?;
        meta.set_pixels_physical_size_z(Quantity::micrometers(0.5), image)?;
        meta.set_objective_settings_id("Objective:0:0", image)?;
        meta.set_stage_label_x(Quantity::micrometers(1250.0 * image as f64), image)?;
        meta.set_stage_label_y(Quantity::micrometers(830.0), image)?;

        for channel in 0..channels {
            let (name, emission, (r, g, b)) = DEMO_CHANNELS[channel % DEMO_CHANNELS.len()];
            meta.set_channel_name(name, image, channel)?;
            meta.set_channel_color(Color::rgb(r, g, b), image, channel)?;
            meta.set_channel_emission_wavelength(Quantity::nanometers(emission), image, channel)?;
            meta.set_channel_acquisition_mode(
                AcquisitionMode::LaserScanningConfocalMicroscopy,
                image,
                channel,
            )?;
            meta.set_channel_light_source_settings_id("LightSource:0:0", image, channel)?;
            meta.set_detector_settings_id("Detector:0:0", image, channel)?;
            meta.set_light_path_emission_filter_ref("Filter:0:0", image, channel, 0)?;
        }

        meta.set_image_roi_ref(create_lsid("ROI", &[image]), image, 0)?;
        meta.set_rectangle_id(create_lsid("Shape", &[image, 0]), image, 0)?;
        meta.set_rectangle_x(64.0, image, 0)?;
        meta.set_rectangle_y(64.0, image, 0)?;
        meta.set_rectangle_width(128.0, image, 0)?;
        meta.set_rectangle_height(96.0, image, 0)?;
        meta.set_rectangle_text("nucleus\u{1b}[0m", image, 0)?;
        meta.set_roi_id(create_lsid("ROI", &[image]), image)?;
        meta.set_roi_name(format!("Region {}", image), image)?;
    }

    // Annotations
    meta.set_map_annotation_id("Annotation:0", 0)?;
    meta.set_map_annotation_namespace("openmicroscopy.org/omero/client/mapAnnotation", 0)?;
    meta.set_map_annotation_value(
        vec![
            MapPair::new("stain", "DAPI"),
            MapPair::new("cell line", "HeLa"),
        ],
        0,
    )?;
    for image in 0..images {
        meta.set_image_annotation_ref("Annotation:0", image, 0)?;
    }

    Ok(())
}
