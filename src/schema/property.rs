//! The property table.
//!
//! Every settable attribute of the schema is one row of `property_table!`:
//! its Rust variant, typed accessor name and index parameters, schema name,
//! owning entity, value type and sanitize policy. Light sources and shapes
//! additionally name the concrete kind a property belongs to.
//!
//! The table is expanded twice: here into the [`Property`] enum, and in
//! [`crate::metadata`] into the typed accessor traits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{Annotated as A, Entity, Entity as E, FilterHolder as H};
use super::enums::{
    AcquisitionMode, ArcType, Binning, ContrastMethod, Correction, DetectorType, DimensionOrder,
    ExperimentType, FilterType, IlluminationType, Immersion, LaserMedium, LaserType, Medium,
    MicroscopeType, NamingConvention, PixelType, Pulse,
};
use super::value_type::ValueType as V;
use super::ValueType;
use crate::model::Dimension;

/// Invokes `$callback!` with every row of the property table.
///
/// Row layout:
/// `Variant ["Kind"]: getter(index, ...) -> RustType = "SchemaName", entity, value_type, policy;`
macro_rules! property_table {
    ($callback:ident) => {
        $callback! {
            BinaryOnlyMetadataFile: binary_only_metadata_file() -> String = "BinaryOnlyMetadataFile", E::BinaryOnly, V::Text, sanitize;
            BinaryOnlyUuid: binary_only_uuid() -> String = "BinaryOnlyUUID", E::BinaryOnly, V::Text, sanitize;
            ImageId: image_id(image) -> String = "ImageID", E::Image, V::Id, sanitize;
            ImageName: image_name(image) -> String = "ImageName", E::Image, V::Text, sanitize;
            ImageDescription: image_description(image) -> String = "ImageDescription", E::Image, V::Text, sanitize;
            ImageAcquisitionDate: image_acquisition_date(image) -> Timestamp = "ImageAcquisitionDate", E::Image, V::Timestamp, verbatim;
            ImageExperimentRef: image_experiment_ref(image) -> String = "ImageExperimentRef", E::Image, V::Reference, verbatim;
            ImageExperimenterRef: image_experimenter_ref(image) -> String = "ImageExperimenterRef", E::Image, V::Reference, verbatim;
            ImageExperimenterGroupRef: image_experimenter_group_ref(image) -> String = "ImageExperimenterGroupRef", E::Image, V::Reference, verbatim;
            ImageInstrumentRef: image_instrument_ref(image) -> String = "ImageInstrumentRef", E::Image, V::Reference, verbatim;
            ImageRoiRef: image_roi_ref(image, roi_ref) -> String = "ImageROIRef", E::RoiRef, V::Reference, verbatim;
            ImageAnnotationRef: image_annotation_ref(image, annotation_ref) -> String = "ImageAnnotationRef", E::AnnotationRef(A::Image), V::Reference, verbatim;
            PixelsId: pixels_id(image) -> String = "PixelsID", E::Pixels, V::Id, sanitize;
            PixelsDimensionOrder: pixels_dimension_order(image) -> DimensionOrder = "PixelsDimensionOrder", E::Pixels, V::Enumeration(DimensionOrder::VALUES), verbatim;
            PixelsType: pixels_type(image) -> PixelType = "PixelsType", E::Pixels, V::Enumeration(PixelType::VALUES), verbatim;
            PixelsSignificantBits: pixels_significant_bits(image) -> i32 = "PixelsSignificantBits", E::Pixels, V::PositiveInteger, verbatim;
            PixelsSizeX: pixels_size_x(image) -> i32 = "PixelsSizeX", E::Pixels, V::PositiveInteger, verbatim;
            PixelsSizeY: pixels_size_y(image) -> i32 = "PixelsSizeY", E::Pixels, V::PositiveInteger, verbatim;
            PixelsSizeZ: pixels_size_z(image) -> i32 = "PixelsSizeZ", E::Pixels, V::PositiveInteger, verbatim;
            PixelsSizeC: pixels_size_c(image) -> i32 = "PixelsSizeC", E::Pixels, V::PositiveInteger, verbatim;
            PixelsSizeT: pixels_size_t(image) -> i32 = "PixelsSizeT", E::Pixels, V::PositiveInteger, verbatim;
            PixelsPhysicalSizeX: pixels_physical_size_x(image) -> Quantity = "PixelsPhysicalSizeX", E::Pixels, V::Quantity(Dimension::Length), verbatim;
            PixelsPhysicalSizeY: pixels_physical_size_y(image) -> Quantity = "PixelsPhysicalSizeY", E::Pixels, V::Quantity(Dimension::Length), verbatim;
            PixelsPhysicalSizeZ: pixels_physical_size_z(image) -> Quantity = "PixelsPhysicalSizeZ", E::Pixels, V::Quantity(Dimension::Length), verbatim;
            PixelsTimeIncrement: pixels_time_increment(image) -> Quantity = "PixelsTimeIncrement", E::Pixels, V::Quantity(Dimension::Time), verbatim;
            PixelsBigEndian: pixels_big_endian(image) -> bool = "PixelsBigEndian", E::Pixels, V::Boolean, verbatim;
            PixelsInterleaved: pixels_interleaved(image) -> bool = "PixelsInterleaved", E::Pixels, V::Boolean, verbatim;
            ChannelId: channel_id(image, channel) -> String = "ChannelID", E::Channel, V::Id, sanitize;
            ChannelName: channel_name(image, channel) -> String = "ChannelName", E::Channel, V::Text, sanitize;
            ChannelColor: channel_color(image, channel) -> Color = "ChannelColor", E::Channel, V::Color, verbatim;
            ChannelSamplesPerPixel: channel_samples_per_pixel(image, channel) -> i32 = "ChannelSamplesPerPixel", E::Channel, V::PositiveInteger, verbatim;
            ChannelAcquisitionMode: channel_acquisition_mode(image, channel) -> AcquisitionMode = "ChannelAcquisitionMode", E::Channel, V::Enumeration(AcquisitionMode::VALUES), verbatim;
            ChannelContrastMethod: channel_contrast_method(image, channel) -> ContrastMethod = "ChannelContrastMethod", E::Channel, V::Enumeration(ContrastMethod::VALUES), verbatim;
            ChannelIlluminationType: channel_illumination_type(image, channel) -> IlluminationType = "ChannelIlluminationType", E::Channel, V::Enumeration(IlluminationType::VALUES), verbatim;
            ChannelFluor: channel_fluor(image, channel) -> String = "ChannelFluor", E::Channel, V::Text, sanitize;
            ChannelEmissionWavelength: channel_emission_wavelength(image, channel) -> Quantity = "ChannelEmissionWavelength", E::Channel, V::Quantity(Dimension::Length), verbatim;
            ChannelExcitationWavelength: channel_excitation_wavelength(image, channel) -> Quantity = "ChannelExcitationWavelength", E::Channel, V::Quantity(Dimension::Length), verbatim;
            ChannelPinholeSize: channel_pinhole_size(image, channel) -> Quantity = "ChannelPinholeSize", E::Channel, V::Quantity(Dimension::Length), verbatim;
            ChannelNdFilter: channel_nd_filter(image, channel) -> f64 = "ChannelNDFilter", E::Channel, V::Float, verbatim;
            ChannelPockelCellSetting: channel_pockel_cell_setting(image, channel) -> i32 = "ChannelPockelCellSetting", E::Channel, V::Integer, verbatim;
            ChannelFilterSetRef: channel_filter_set_ref(image, channel) -> String = "ChannelFilterSetRef", E::Channel, V::Reference, verbatim;
            ChannelAnnotationRef: channel_annotation_ref(image, channel, annotation_ref) -> String = "ChannelAnnotationRef", E::AnnotationRef(A::Channel), V::Reference, verbatim;
            ChannelLightSourceSettingsId: channel_light_source_settings_id(image, channel) -> String = "ChannelLightSourceSettingsID", E::LightSourceSettings, V::Reference, sanitize;
            ChannelLightSourceSettingsAttenuation: channel_light_source_settings_attenuation(image, channel) -> f64 = "ChannelLightSourceSettingsAttenuation", E::LightSourceSettings, V::PercentFraction, verbatim;
            ChannelLightSourceSettingsWavelength: channel_light_source_settings_wavelength(image, channel) -> Quantity = "ChannelLightSourceSettingsWavelength", E::LightSourceSettings, V::Quantity(Dimension::Length), verbatim;
            DetectorSettingsId: detector_settings_id(image, channel) -> String = "DetectorSettingsID", E::DetectorSettings, V::Reference, sanitize;
            DetectorSettingsGain: detector_settings_gain(image, channel) -> f64 = "DetectorSettingsGain", E::DetectorSettings, V::Float, verbatim;
            DetectorSettingsOffset: detector_settings_offset(image, channel) -> f64 = "DetectorSettingsOffset", E::DetectorSettings, V::Float, verbatim;
            DetectorSettingsZoom: detector_settings_zoom(image, channel) -> f64 = "DetectorSettingsZoom", E::DetectorSettings, V::Float, verbatim;
            DetectorSettingsVoltage: detector_settings_voltage(image, channel) -> Quantity = "DetectorSettingsVoltage", E::DetectorSettings, V::Quantity(Dimension::ElectricPotential), verbatim;
            DetectorSettingsReadOutRate: detector_settings_read_out_rate(image, channel) -> Quantity = "DetectorSettingsReadOutRate", E::DetectorSettings, V::Quantity(Dimension::Frequency), verbatim;
            DetectorSettingsBinning: detector_settings_binning(image, channel) -> Binning = "DetectorSettingsBinning", E::DetectorSettings, V::Enumeration(Binning::VALUES), verbatim;
            DetectorSettingsIntegration: detector_settings_integration(image, channel) -> i32 = "DetectorSettingsIntegration", E::DetectorSettings, V::PositiveInteger, verbatim;
            LightPathDichroicRef: light_path_dichroic_ref(image, channel) -> String = "LightPathDichroicRef", E::LightPath, V::Reference, verbatim;
            LightPathEmissionFilterRef: light_path_emission_filter_ref(image, channel, emission_filter_ref) -> String = "LightPathEmissionFilterRef", E::EmissionFilterRef(H::LightPath), V::Reference, verbatim;
            LightPathExcitationFilterRef: light_path_excitation_filter_ref(image, channel, excitation_filter_ref) -> String = "LightPathExcitationFilterRef", E::ExcitationFilterRef(H::LightPath), V::Reference, verbatim;
            LightPathAnnotationRef: light_path_annotation_ref(image, channel, annotation_ref) -> String = "LightPathAnnotationRef", E::AnnotationRef(A::LightPath), V::Reference, verbatim;
            PlaneTheZ: plane_the_z(image, plane) -> i32 = "PlaneTheZ", E::Plane, V::NonNegativeInteger, verbatim;
            PlaneTheT: plane_the_t(image, plane) -> i32 = "PlaneTheT", E::Plane, V::NonNegativeInteger, verbatim;
            PlaneTheC: plane_the_c(image, plane) -> i32 = "PlaneTheC", E::Plane, V::NonNegativeInteger, verbatim;
            PlaneDeltaT: plane_delta_t(image, plane) -> Quantity = "PlaneDeltaT", E::Plane, V::Quantity(Dimension::Time), verbatim;
            PlaneExposureTime: plane_exposure_time(image, plane) -> Quantity = "PlaneExposureTime", E::Plane, V::Quantity(Dimension::Time), verbatim;
            PlanePositionX: plane_position_x(image, plane) -> Quantity = "PlanePositionX", E::Plane, V::Quantity(Dimension::Length), verbatim;
            PlanePositionY: plane_position_y(image, plane) -> Quantity = "PlanePositionY", E::Plane, V::Quantity(Dimension::Length), verbatim;
            PlanePositionZ: plane_position_z(image, plane) -> Quantity = "PlanePositionZ", E::Plane, V::Quantity(Dimension::Length), verbatim;
            PlaneHashSha1: plane_hash_sha1(image, plane) -> String = "PlaneHashSHA1", E::Plane, V::Text, sanitize;
            PlaneAnnotationRef: plane_annotation_ref(image, plane, annotation_ref) -> String = "PlaneAnnotationRef", E::AnnotationRef(A::Plane), V::Reference, verbatim;
            TiffDataFirstZ: tiff_data_first_z(image, tiff_data) -> i32 = "TiffDataFirstZ", E::TiffData, V::NonNegativeInteger, verbatim;
            TiffDataFirstT: tiff_data_first_t(image, tiff_data) -> i32 = "TiffDataFirstT", E::TiffData, V::NonNegativeInteger, verbatim;
            TiffDataFirstC: tiff_data_first_c(image, tiff_data) -> i32 = "TiffDataFirstC", E::TiffData, V::NonNegativeInteger, verbatim;
            TiffDataIfd: tiff_data_ifd(image, tiff_data) -> i32 = "TiffDataIFD", E::TiffData, V::NonNegativeInteger, verbatim;
            TiffDataPlaneCount: tiff_data_plane_count(image, tiff_data) -> i32 = "TiffDataPlaneCount", E::TiffData, V::NonNegativeInteger, verbatim;
            UuidValue: uuid_value(image, tiff_data) -> String = "UUIDValue", E::Uuid, V::Text, sanitize;
            UuidFileName: uuid_file_name(image, tiff_data) -> String = "UUIDFileName", E::Uuid, V::Text, sanitize;
            ImagingEnvironmentTemperature: imaging_environment_temperature(image) -> Quantity = "ImagingEnvironmentTemperature", E::ImagingEnvironment, V::Quantity(Dimension::Temperature), verbatim;
            ImagingEnvironmentAirPressure: imaging_environment_air_pressure(image) -> Quantity = "ImagingEnvironmentAirPressure", E::ImagingEnvironment, V::Quantity(Dimension::Pressure), verbatim;
            ImagingEnvironmentHumidity: imaging_environment_humidity(image) -> f64 = "ImagingEnvironmentHumidity", E::ImagingEnvironment, V::PercentFraction, verbatim;
            ImagingEnvironmentCo2Percent: imaging_environment_co2_percent(image) -> f64 = "ImagingEnvironmentCO2Percent", E::ImagingEnvironment, V::PercentFraction, verbatim;
            ImagingEnvironmentMap: imaging_environment_map(image) -> Vec<MapPair> = "ImagingEnvironmentMap", E::ImagingEnvironment, V::MapPairs, verbatim;
            StageLabelName: stage_label_name(image) -> String = "StageLabelName", E::StageLabel, V::Text, sanitize;
            StageLabelX: stage_label_x(image) -> Quantity = "StageLabelX", E::StageLabel, V::Quantity(Dimension::Length), verbatim;
            StageLabelY: stage_label_y(image) -> Quantity = "StageLabelY", E::StageLabel, V::Quantity(Dimension::Length), verbatim;
            StageLabelZ: stage_label_z(image) -> Quantity = "StageLabelZ", E::StageLabel, V::Quantity(Dimension::Length), verbatim;
            ObjectiveSettingsId: objective_settings_id(image) -> String = "ObjectiveSettingsID", E::ObjectiveSettings, V::Reference, sanitize;
            ObjectiveSettingsCorrectionCollar: objective_settings_correction_collar(image) -> f64 = "ObjectiveSettingsCorrectionCollar", E::ObjectiveSettings, V::Float, verbatim;
            ObjectiveSettingsMedium: objective_settings_medium(image) -> Medium = "ObjectiveSettingsMedium", E::ObjectiveSettings, V::Enumeration(Medium::VALUES), verbatim;
            ObjectiveSettingsRefractiveIndex: objective_settings_refractive_index(image) -> f64 = "ObjectiveSettingsRefractiveIndex", E::ObjectiveSettings, V::Float, verbatim;
            InstrumentId: instrument_id(instrument) -> String = "InstrumentID", E::Instrument, V::Id, sanitize;
            InstrumentAnnotationRef: instrument_annotation_ref(instrument, annotation_ref) -> String = "InstrumentAnnotationRef", E::AnnotationRef(A::Instrument), V::Reference, verbatim;
            MicroscopeManufacturer: microscope_manufacturer(instrument) -> String = "MicroscopeManufacturer", E::Microscope, V::Text, sanitize;
            MicroscopeModel: microscope_model(instrument) -> String = "MicroscopeModel", E::Microscope, V::Text, sanitize;
            MicroscopeSerialNumber: microscope_serial_number(instrument) -> String = "MicroscopeSerialNumber", E::Microscope, V::Text, sanitize;
            MicroscopeLotNumber: microscope_lot_number(instrument) -> String = "MicroscopeLotNumber", E::Microscope, V::Text, sanitize;
            MicroscopeType: microscope_type(instrument) -> MicroscopeType = "MicroscopeType", E::Microscope, V::Enumeration(MicroscopeType::VALUES), verbatim;
            DetectorId: detector_id(instrument, detector) -> String = "DetectorID", E::Detector, V::Id, sanitize;
            DetectorManufacturer: detector_manufacturer(instrument, detector) -> String = "DetectorManufacturer", E::Detector, V::Text, sanitize;
            DetectorModel: detector_model(instrument, detector) -> String = "DetectorModel", E::Detector, V::Text, sanitize;
            DetectorSerialNumber: detector_serial_number(instrument, detector) -> String = "DetectorSerialNumber", E::Detector, V::Text, sanitize;
            DetectorLotNumber: detector_lot_number(instrument, detector) -> String = "DetectorLotNumber", E::Detector, V::Text, sanitize;
            DetectorType: detector_type(instrument, detector) -> DetectorType = "DetectorType", E::Detector, V::Enumeration(DetectorType::VALUES), verbatim;
            DetectorGain: detector_gain(instrument, detector) -> f64 = "DetectorGain", E::Detector, V::Float, verbatim;
            DetectorOffset: detector_offset(instrument, detector) -> f64 = "DetectorOffset", E::Detector, V::Float, verbatim;
            DetectorZoom: detector_zoom(instrument, detector) -> f64 = "DetectorZoom", E::Detector, V::Float, verbatim;
            DetectorAmplificationGain: detector_amplification_gain(instrument, detector) -> f64 = "DetectorAmplificationGain", E::Detector, V::Float, verbatim;
            DetectorVoltage: detector_voltage(instrument, detector) -> Quantity = "DetectorVoltage", E::Detector, V::Quantity(Dimension::ElectricPotential), verbatim;
            DetectorAnnotationRef: detector_annotation_ref(instrument, detector, annotation_ref) -> String = "DetectorAnnotationRef", E::AnnotationRef(A::Detector), V::Reference, verbatim;
            ObjectiveId: objective_id(instrument, objective) -> String = "ObjectiveID", E::Objective, V::Id, sanitize;
            ObjectiveManufacturer: objective_manufacturer(instrument, objective) -> String = "ObjectiveManufacturer", E::Objective, V::Text, sanitize;
            ObjectiveModel: objective_model(instrument, objective) -> String = "ObjectiveModel", E::Objective, V::Text, sanitize;
            ObjectiveSerialNumber: objective_serial_number(instrument, objective) -> String = "ObjectiveSerialNumber", E::Objective, V::Text, sanitize;
            ObjectiveLotNumber: objective_lot_number(instrument, objective) -> String = "ObjectiveLotNumber", E::Objective, V::Text, sanitize;
            ObjectiveCorrection: objective_correction(instrument, objective) -> Correction = "ObjectiveCorrection", E::Objective, V::Enumeration(Correction::VALUES), verbatim;
            ObjectiveImmersion: objective_immersion(instrument, objective) -> Immersion = "ObjectiveImmersion", E::Objective, V::Enumeration(Immersion::VALUES), verbatim;
            ObjectiveLensNa: objective_lens_na(instrument, objective) -> f64 = "ObjectiveLensNA", E::Objective, V::Float, verbatim;
            ObjectiveNominalMagnification: objective_nominal_magnification(instrument, objective) -> f64 = "ObjectiveNominalMagnification", E::Objective, V::Float, verbatim;
            ObjectiveCalibratedMagnification: objective_calibrated_magnification(instrument, objective) -> f64 = "ObjectiveCalibratedMagnification", E::Objective, V::Float, verbatim;
            ObjectiveWorkingDistance: objective_working_distance(instrument, objective) -> Quantity = "ObjectiveWorkingDistance", E::Objective, V::Quantity(Dimension::Length), verbatim;
            ObjectiveIris: objective_iris(instrument, objective) -> bool = "ObjectiveIris", E::Objective, V::Boolean, verbatim;
            ObjectiveAnnotationRef: objective_annotation_ref(instrument, objective, annotation_ref) -> String = "ObjectiveAnnotationRef", E::AnnotationRef(A::Objective), V::Reference, verbatim;
            LaserId ["Laser"]: laser_id(instrument, light_source) -> String = "LaserID", E::LightSource, V::Id, sanitize;
            LaserManufacturer ["Laser"]: laser_manufacturer(instrument, light_source) -> String = "LaserManufacturer", E::LightSource, V::Text, sanitize;
            LaserModel ["Laser"]: laser_model(instrument, light_source) -> String = "LaserModel", E::LightSource, V::Text, sanitize;
            LaserSerialNumber ["Laser"]: laser_serial_number(instrument, light_source) -> String = "LaserSerialNumber", E::LightSource, V::Text, sanitize;
            LaserLotNumber ["Laser"]: laser_lot_number(instrument, light_source) -> String = "LaserLotNumber", E::LightSource, V::Text, sanitize;
            LaserPower ["Laser"]: laser_power(instrument, light_source) -> Quantity = "LaserPower", E::LightSource, V::Quantity(Dimension::Power), verbatim;
            LaserType ["Laser"]: laser_type(instrument, light_source) -> LaserType = "LaserType", E::LightSource, V::Enumeration(LaserType::VALUES), verbatim;
            LaserLaserMedium ["Laser"]: laser_laser_medium(instrument, light_source) -> LaserMedium = "LaserLaserMedium", E::LightSource, V::Enumeration(LaserMedium::VALUES), verbatim;
            LaserWavelength ["Laser"]: laser_wavelength(instrument, light_source) -> Quantity = "LaserWavelength", E::LightSource, V::Quantity(Dimension::Length), verbatim;
            LaserFrequencyMultiplication ["Laser"]: laser_frequency_multiplication(instrument, light_source) -> i32 = "LaserFrequencyMultiplication", E::LightSource, V::PositiveInteger, verbatim;
            LaserTuneable ["Laser"]: laser_tuneable(instrument, light_source) -> bool = "LaserTuneable", E::LightSource, V::Boolean, verbatim;
            LaserPulse ["Laser"]: laser_pulse(instrument, light_source) -> Pulse = "LaserPulse", E::LightSource, V::Enumeration(Pulse::VALUES), verbatim;
            LaserPockelCell ["Laser"]: laser_pockel_cell(instrument, light_source) -> bool = "LaserPockelCell", E::LightSource, V::Boolean, verbatim;
            LaserRepetitionRate ["Laser"]: laser_repetition_rate(instrument, light_source) -> Quantity = "LaserRepetitionRate", E::LightSource, V::Quantity(Dimension::Frequency), verbatim;
            LaserPump ["Laser"]: laser_pump(instrument, light_source) -> String = "LaserPump", E::LightSource, V::Reference, verbatim;
            LaserAnnotationRef ["Laser"]: laser_annotation_ref(instrument, light_source, annotation_ref) -> String = "LaserAnnotationRef", E::AnnotationRef(A::LightSource), V::Reference, verbatim;
            ArcId ["Arc"]: arc_id(instrument, light_source) -> String = "ArcID", E::LightSource, V::Id, sanitize;
            ArcManufacturer ["Arc"]: arc_manufacturer(instrument, light_source) -> String = "ArcManufacturer", E::LightSource, V::Text, sanitize;
            ArcModel ["Arc"]: arc_model(instrument, light_source) -> String = "ArcModel", E::LightSource, V::Text, sanitize;
            ArcSerialNumber ["Arc"]: arc_serial_number(instrument, light_source) -> String = "ArcSerialNumber", E::LightSource, V::Text, sanitize;
            ArcLotNumber ["Arc"]: arc_lot_number(instrument, light_source) -> String = "ArcLotNumber", E::LightSource, V::Text, sanitize;
            ArcPower ["Arc"]: arc_power(instrument, light_source) -> Quantity = "ArcPower", E::LightSource, V::Quantity(Dimension::Power), verbatim;
            ArcType ["Arc"]: arc_type(instrument, light_source) -> ArcType = "ArcType", E::LightSource, V::Enumeration(ArcType::VALUES), verbatim;
            ArcAnnotationRef ["Arc"]: arc_annotation_ref(instrument, light_source, annotation_ref) -> String = "ArcAnnotationRef", E::AnnotationRef(A::LightSource), V::Reference, verbatim;
            LightEmittingDiodeId ["LightEmittingDiode"]: light_emitting_diode_id(instrument, light_source) -> String = "LightEmittingDiodeID", E::LightSource, V::Id, sanitize;
            LightEmittingDiodeManufacturer ["LightEmittingDiode"]: light_emitting_diode_manufacturer(instrument, light_source) -> String = "LightEmittingDiodeManufacturer", E::LightSource, V::Text, sanitize;
            LightEmittingDiodeModel ["LightEmittingDiode"]: light_emitting_diode_model(instrument, light_source) -> String = "LightEmittingDiodeModel", E::LightSource, V::Text, sanitize;
            LightEmittingDiodeSerialNumber ["LightEmittingDiode"]: light_emitting_diode_serial_number(instrument, light_source) -> String = "LightEmittingDiodeSerialNumber", E::LightSource, V::Text, sanitize;
            LightEmittingDiodeLotNumber ["LightEmittingDiode"]: light_emitting_diode_lot_number(instrument, light_source) -> String = "LightEmittingDiodeLotNumber", E::LightSource, V::Text, sanitize;
            LightEmittingDiodePower ["LightEmittingDiode"]: light_emitting_diode_power(instrument, light_source) -> Quantity = "LightEmittingDiodePower", E::LightSource, V::Quantity(Dimension::Power), verbatim;
            LightEmittingDiodeAnnotationRef ["LightEmittingDiode"]: light_emitting_diode_annotation_ref(instrument, light_source, annotation_ref) -> String = "LightEmittingDiodeAnnotationRef", E::AnnotationRef(A::LightSource), V::Reference, verbatim;
            DichroicId: dichroic_id(instrument, dichroic) -> String = "DichroicID", E::Dichroic, V::Id, sanitize;
            DichroicManufacturer: dichroic_manufacturer(instrument, dichroic) -> String = "DichroicManufacturer", E::Dichroic, V::Text, sanitize;
            DichroicModel: dichroic_model(instrument, dichroic) -> String = "DichroicModel", E::Dichroic, V::Text, sanitize;
            DichroicSerialNumber: dichroic_serial_number(instrument, dichroic) -> String = "DichroicSerialNumber", E::Dichroic, V::Text, sanitize;
            DichroicLotNumber: dichroic_lot_number(instrument, dichroic) -> String = "DichroicLotNumber", E::Dichroic, V::Text, sanitize;
            DichroicAnnotationRef: dichroic_annotation_ref(instrument, dichroic, annotation_ref) -> String = "DichroicAnnotationRef", E::AnnotationRef(A::Dichroic), V::Reference, verbatim;
            FilterId: filter_id(instrument, filter) -> String = "FilterID", E::Filter, V::Id, sanitize;
            FilterManufacturer: filter_manufacturer(instrument, filter) -> String = "FilterManufacturer", E::Filter, V::Text, sanitize;
            FilterModel: filter_model(instrument, filter) -> String = "FilterModel", E::Filter, V::Text, sanitize;
            FilterSerialNumber: filter_serial_number(instrument, filter) -> String = "FilterSerialNumber", E::Filter, V::Text, sanitize;
            FilterLotNumber: filter_lot_number(instrument, filter) -> String = "FilterLotNumber", E::Filter, V::Text, sanitize;
            FilterType: filter_type(instrument, filter) -> FilterType = "FilterType", E::Filter, V::Enumeration(FilterType::VALUES), verbatim;
            FilterFilterWheel: filter_filter_wheel(instrument, filter) -> String = "FilterFilterWheel", E::Filter, V::Text, sanitize;
            FilterAnnotationRef: filter_annotation_ref(instrument, filter, annotation_ref) -> String = "FilterAnnotationRef", E::AnnotationRef(A::Filter), V::Reference, verbatim;
            TransmittanceRangeCutIn: transmittance_range_cut_in(instrument, filter) -> Quantity = "TransmittanceRangeCutIn", E::TransmittanceRange, V::Quantity(Dimension::Length), verbatim;
            TransmittanceRangeCutInTolerance: transmittance_range_cut_in_tolerance(instrument, filter) -> Quantity = "TransmittanceRangeCutInTolerance", E::TransmittanceRange, V::Quantity(Dimension::Length), verbatim;
            TransmittanceRangeCutOut: transmittance_range_cut_out(instrument, filter) -> Quantity = "TransmittanceRangeCutOut", E::TransmittanceRange, V::Quantity(Dimension::Length), verbatim;
            TransmittanceRangeCutOutTolerance: transmittance_range_cut_out_tolerance(instrument, filter) -> Quantity = "TransmittanceRangeCutOutTolerance", E::TransmittanceRange, V::Quantity(Dimension::Length), verbatim;
            TransmittanceRangeTransmittance: transmittance_range_transmittance(instrument, filter) -> f64 = "TransmittanceRangeTransmittance", E::TransmittanceRange, V::PercentFraction, verbatim;
            FilterSetId: filter_set_id(instrument, filter_set) -> String = "FilterSetID", E::FilterSet, V::Id, sanitize;
            FilterSetManufacturer: filter_set_manufacturer(instrument, filter_set) -> String = "FilterSetManufacturer", E::FilterSet, V::Text, sanitize;
            FilterSetModel: filter_set_model(instrument, filter_set) -> String = "FilterSetModel", E::FilterSet, V::Text, sanitize;
            FilterSetSerialNumber: filter_set_serial_number(instrument, filter_set) -> String = "FilterSetSerialNumber", E::FilterSet, V::Text, sanitize;
            FilterSetLotNumber: filter_set_lot_number(instrument, filter_set) -> String = "FilterSetLotNumber", E::FilterSet, V::Text, sanitize;
            FilterSetDichroicRef: filter_set_dichroic_ref(instrument, filter_set) -> String = "FilterSetDichroicRef", E::FilterSet, V::Reference, verbatim;
            FilterSetEmissionFilterRef: filter_set_emission_filter_ref(instrument, filter_set, emission_filter_ref) -> String = "FilterSetEmissionFilterRef", E::EmissionFilterRef(H::FilterSet), V::Reference, verbatim;
            FilterSetExcitationFilterRef: filter_set_excitation_filter_ref(instrument, filter_set, excitation_filter_ref) -> String = "FilterSetExcitationFilterRef", E::ExcitationFilterRef(H::FilterSet), V::Reference, verbatim;
            ExperimenterId: experimenter_id(experimenter) -> String = "ExperimenterID", E::Experimenter, V::Id, sanitize;
            ExperimenterFirstName: experimenter_first_name(experimenter) -> String = "ExperimenterFirstName", E::Experimenter, V::Text, sanitize;
            ExperimenterMiddleName: experimenter_middle_name(experimenter) -> String = "ExperimenterMiddleName", E::Experimenter, V::Text, sanitize;
            ExperimenterLastName: experimenter_last_name(experimenter) -> String = "ExperimenterLastName", E::Experimenter, V::Text, sanitize;
            ExperimenterEmail: experimenter_email(experimenter) -> String = "ExperimenterEmail", E::Experimenter, V::Text, sanitize;
            ExperimenterInstitution: experimenter_institution(experimenter) -> String = "ExperimenterInstitution", E::Experimenter, V::Text, sanitize;
            ExperimenterUserName: experimenter_user_name(experimenter) -> String = "ExperimenterUserName", E::Experimenter, V::Text, sanitize;
            ExperimenterAnnotationRef: experimenter_annotation_ref(experimenter, annotation_ref) -> String = "ExperimenterAnnotationRef", E::AnnotationRef(A::Experimenter), V::Reference, verbatim;
            ExperimenterGroupId: experimenter_group_id(experimenter_group) -> String = "ExperimenterGroupID", E::ExperimenterGroup, V::Id, sanitize;
            ExperimenterGroupName: experimenter_group_name(experimenter_group) -> String = "ExperimenterGroupName", E::ExperimenterGroup, V::Text, sanitize;
            ExperimenterGroupDescription: experimenter_group_description(experimenter_group) -> String = "ExperimenterGroupDescription", E::ExperimenterGroup, V::Text, sanitize;
            ExperimenterGroupExperimenterRef: experimenter_group_experimenter_ref(experimenter_group, experimenter_ref) -> String = "ExperimenterGroupExperimenterRef", E::ExperimenterRef, V::Reference, verbatim;
            ExperimenterGroupLeader: experimenter_group_leader(experimenter_group, leader) -> String = "ExperimenterGroupLeader", E::Leader, V::Reference, verbatim;
            ExperimenterGroupAnnotationRef: experimenter_group_annotation_ref(experimenter_group, annotation_ref) -> String = "ExperimenterGroupAnnotationRef", E::AnnotationRef(A::ExperimenterGroup), V::Reference, verbatim;
            ExperimentId: experiment_id(experiment) -> String = "ExperimentID", E::Experiment, V::Id, sanitize;
            ExperimentDescription: experiment_description(experiment) -> String = "ExperimentDescription", E::Experiment, V::Text, sanitize;
            ExperimentType: experiment_type(experiment) -> ExperimentType = "ExperimentType", E::Experiment, V::Enumeration(ExperimentType::VALUES), verbatim;
            ExperimentExperimenterRef: experiment_experimenter_ref(experiment) -> String = "ExperimentExperimenterRef", E::Experiment, V::Reference, verbatim;
            ProjectId: project_id(project) -> String = "ProjectID", E::Project, V::Id, sanitize;
            ProjectName: project_name(project) -> String = "ProjectName", E::Project, V::Text, sanitize;
            ProjectDescription: project_description(project) -> String = "ProjectDescription", E::Project, V::Text, sanitize;
            ProjectExperimenterRef: project_experimenter_ref(project) -> String = "ProjectExperimenterRef", E::Project, V::Reference, verbatim;
            ProjectExperimenterGroupRef: project_experimenter_group_ref(project) -> String = "ProjectExperimenterGroupRef", E::Project, V::Reference, verbatim;
            ProjectDatasetRef: project_dataset_ref(project, dataset_ref) -> String = "ProjectDatasetRef", E::DatasetRef, V::Reference, verbatim;
            ProjectAnnotationRef: project_annotation_ref(project, annotation_ref) -> String = "ProjectAnnotationRef", E::AnnotationRef(A::Project), V::Reference, verbatim;
            DatasetId: dataset_id(dataset) -> String = "DatasetID", E::Dataset, V::Id, sanitize;
            DatasetName: dataset_name(dataset) -> String = "DatasetName", E::Dataset, V::Text, sanitize;
            DatasetDescription: dataset_description(dataset) -> String = "DatasetDescription", E::Dataset, V::Text, sanitize;
            DatasetExperimenterRef: dataset_experimenter_ref(dataset) -> String = "DatasetExperimenterRef", E::Dataset, V::Reference, verbatim;
            DatasetExperimenterGroupRef: dataset_experimenter_group_ref(dataset) -> String = "DatasetExperimenterGroupRef", E::Dataset, V::Reference, verbatim;
            DatasetImageRef: dataset_image_ref(dataset, image_ref) -> String = "DatasetImageRef", E::ImageRef, V::Reference, verbatim;
            DatasetAnnotationRef: dataset_annotation_ref(dataset, annotation_ref) -> String = "DatasetAnnotationRef", E::AnnotationRef(A::Dataset), V::Reference, verbatim;
            ScreenId: screen_id(screen) -> String = "ScreenID", E::Screen, V::Id, sanitize;
            ScreenName: screen_name(screen) -> String = "ScreenName", E::Screen, V::Text, sanitize;
            ScreenDescription: screen_description(screen) -> String = "ScreenDescription", E::Screen, V::Text, sanitize;
            ScreenProtocolDescription: screen_protocol_description(screen) -> String = "ScreenProtocolDescription", E::Screen, V::Text, sanitize;
            ScreenProtocolIdentifier: screen_protocol_identifier(screen) -> String = "ScreenProtocolIdentifier", E::Screen, V::Text, sanitize;
            ScreenReagentSetDescription: screen_reagent_set_description(screen) -> String = "ScreenReagentSetDescription", E::Screen, V::Text, sanitize;
            ScreenReagentSetIdentifier: screen_reagent_set_identifier(screen) -> String = "ScreenReagentSetIdentifier", E::Screen, V::Text, sanitize;
            ScreenType: screen_type(screen) -> String = "ScreenType", E::Screen, V::Text, sanitize;
            ScreenPlateRef: screen_plate_ref(screen, plate_ref) -> String = "ScreenPlateRef", E::PlateRef, V::Reference, verbatim;
            ScreenAnnotationRef: screen_annotation_ref(screen, annotation_ref) -> String = "ScreenAnnotationRef", E::AnnotationRef(A::Screen), V::Reference, verbatim;
            ReagentId: reagent_id(screen, reagent) -> String = "ReagentID", E::Reagent, V::Id, sanitize;
            ReagentName: reagent_name(screen, reagent) -> String = "ReagentName", E::Reagent, V::Text, sanitize;
            ReagentDescription: reagent_description(screen, reagent) -> String = "ReagentDescription", E::Reagent, V::Text, sanitize;
            ReagentReagentIdentifier: reagent_reagent_identifier(screen, reagent) -> String = "ReagentReagentIdentifier", E::Reagent, V::Text, sanitize;
            ReagentAnnotationRef: reagent_annotation_ref(screen, reagent, annotation_ref) -> String = "ReagentAnnotationRef", E::AnnotationRef(A::Reagent), V::Reference, verbatim;
            PlateId: plate_id(plate) -> String = "PlateID", E::Plate, V::Id, sanitize;
            PlateName: plate_name(plate) -> String = "PlateName", E::Plate, V::Text, sanitize;
            PlateDescription: plate_description(plate) -> String = "PlateDescription", E::Plate, V::Text, sanitize;
            PlateStatus: plate_status(plate) -> String = "PlateStatus", E::Plate, V::Text, sanitize;
            PlateExternalIdentifier: plate_external_identifier(plate) -> String = "PlateExternalIdentifier", E::Plate, V::Text, sanitize;
            PlateColumnNamingConvention: plate_column_naming_convention(plate) -> NamingConvention = "PlateColumnNamingConvention", E::Plate, V::Enumeration(NamingConvention::VALUES), verbatim;
            PlateRowNamingConvention: plate_row_naming_convention(plate) -> NamingConvention = "PlateRowNamingConvention", E::Plate, V::Enumeration(NamingConvention::VALUES), verbatim;
            PlateRows: plate_rows(plate) -> i32 = "PlateRows", E::Plate, V::PositiveInteger, verbatim;
            PlateColumns: plate_columns(plate) -> i32 = "PlateColumns", E::Plate, V::PositiveInteger, verbatim;
            PlateFieldIndex: plate_field_index(plate) -> i32 = "PlateFieldIndex", E::Plate, V::NonNegativeInteger, verbatim;
            PlateWellOriginX: plate_well_origin_x(plate) -> Quantity = "PlateWellOriginX", E::Plate, V::Quantity(Dimension::Length), verbatim;
            PlateWellOriginY: plate_well_origin_y(plate) -> Quantity = "PlateWellOriginY", E::Plate, V::Quantity(Dimension::Length), verbatim;
            PlateAnnotationRef: plate_annotation_ref(plate, annotation_ref) -> String = "PlateAnnotationRef", E::AnnotationRef(A::Plate), V::Reference, verbatim;
            PlateAcquisitionId: plate_acquisition_id(plate, plate_acquisition) -> String = "PlateAcquisitionID", E::PlateAcquisition, V::Id, sanitize;
            PlateAcquisitionName: plate_acquisition_name(plate, plate_acquisition) -> String = "PlateAcquisitionName", E::PlateAcquisition, V::Text, sanitize;
            PlateAcquisitionDescription: plate_acquisition_description(plate, plate_acquisition) -> String = "PlateAcquisitionDescription", E::PlateAcquisition, V::Text, sanitize;
            PlateAcquisitionStartTime: plate_acquisition_start_time(plate, plate_acquisition) -> Timestamp = "PlateAcquisitionStartTime", E::PlateAcquisition, V::Timestamp, verbatim;
            PlateAcquisitionEndTime: plate_acquisition_end_time(plate, plate_acquisition) -> Timestamp = "PlateAcquisitionEndTime", E::PlateAcquisition, V::Timestamp, verbatim;
            PlateAcquisitionMaximumFieldCount: plate_acquisition_maximum_field_count(plate, plate_acquisition) -> i32 = "PlateAcquisitionMaximumFieldCount", E::PlateAcquisition, V::PositiveInteger, verbatim;
            PlateAcquisitionWellSampleRef: plate_acquisition_well_sample_ref(plate, plate_acquisition, well_sample_ref) -> String = "PlateAcquisitionWellSampleRef", E::WellSampleRef, V::Reference, verbatim;
            PlateAcquisitionAnnotationRef: plate_acquisition_annotation_ref(plate, plate_acquisition, annotation_ref) -> String = "PlateAcquisitionAnnotationRef", E::AnnotationRef(A::PlateAcquisition), V::Reference, verbatim;
            WellId: well_id(plate, well) -> String = "WellID", E::Well, V::Id, sanitize;
            WellColumn: well_column(plate, well) -> i32 = "WellColumn", E::Well, V::NonNegativeInteger, verbatim;
            WellRow: well_row(plate, well) -> i32 = "WellRow", E::Well, V::NonNegativeInteger, verbatim;
            WellColor: well_color(plate, well) -> Color = "WellColor", E::Well, V::Color, verbatim;
            WellExternalDescription: well_external_description(plate, well) -> String = "WellExternalDescription", E::Well, V::Text, sanitize;
            WellExternalIdentifier: well_external_identifier(plate, well) -> String = "WellExternalIdentifier", E::Well, V::Text, sanitize;
            WellType: well_type(plate, well) -> String = "WellType", E::Well, V::Text, sanitize;
            WellReagentRef: well_reagent_ref(plate, well) -> String = "WellReagentRef", E::Well, V::Reference, verbatim;
            WellAnnotationRef: well_annotation_ref(plate, well, annotation_ref) -> String = "WellAnnotationRef", E::AnnotationRef(A::Well), V::Reference, verbatim;
            WellSampleId: well_sample_id(plate, well, well_sample) -> String = "WellSampleID", E::WellSample, V::Id, sanitize;
            WellSampleIndex: well_sample_index(plate, well, well_sample) -> i32 = "WellSampleIndex", E::WellSample, V::NonNegativeInteger, verbatim;
            WellSamplePositionX: well_sample_position_x(plate, well, well_sample) -> Quantity = "WellSamplePositionX", E::WellSample, V::Quantity(Dimension::Length), verbatim;
            WellSamplePositionY: well_sample_position_y(plate, well, well_sample) -> Quantity = "WellSamplePositionY", E::WellSample, V::Quantity(Dimension::Length), verbatim;
            WellSampleTimepoint: well_sample_timepoint(plate, well, well_sample) -> Timestamp = "WellSampleTimepoint", E::WellSample, V::Timestamp, verbatim;
            WellSampleImageRef: well_sample_image_ref(plate, well, well_sample) -> String = "WellSampleImageRef", E::WellSample, V::Reference, verbatim;
            RoiId: roi_id(roi) -> String = "ROIID", E::Roi, V::Id, sanitize;
            RoiName: roi_name(roi) -> String = "ROIName", E::Roi, V::Text, sanitize;
            RoiDescription: roi_description(roi) -> String = "ROIDescription", E::Roi, V::Text, sanitize;
            RoiNamespace: roi_namespace(roi) -> String = "ROINamespace", E::Roi, V::Text, sanitize;
            RoiAnnotationRef: roi_annotation_ref(roi, annotation_ref) -> String = "ROIAnnotationRef", E::AnnotationRef(A::Roi), V::Reference, verbatim;
            RectangleId ["Rectangle"]: rectangle_id(roi, shape) -> String = "RectangleID", E::Shape, V::Id, sanitize;
            RectangleText ["Rectangle"]: rectangle_text(roi, shape) -> String = "RectangleText", E::Shape, V::Text, sanitize;
            RectangleTheZ ["Rectangle"]: rectangle_the_z(roi, shape) -> i32 = "RectangleTheZ", E::Shape, V::NonNegativeInteger, verbatim;
            RectangleTheT ["Rectangle"]: rectangle_the_t(roi, shape) -> i32 = "RectangleTheT", E::Shape, V::NonNegativeInteger, verbatim;
            RectangleTheC ["Rectangle"]: rectangle_the_c(roi, shape) -> i32 = "RectangleTheC", E::Shape, V::NonNegativeInteger, verbatim;
            RectangleFillColor ["Rectangle"]: rectangle_fill_color(roi, shape) -> Color = "RectangleFillColor", E::Shape, V::Color, verbatim;
            RectangleStrokeColor ["Rectangle"]: rectangle_stroke_color(roi, shape) -> Color = "RectangleStrokeColor", E::Shape, V::Color, verbatim;
            RectangleStrokeWidth ["Rectangle"]: rectangle_stroke_width(roi, shape) -> Quantity = "RectangleStrokeWidth", E::Shape, V::Quantity(Dimension::Length), verbatim;
            RectangleStrokeDashArray ["Rectangle"]: rectangle_stroke_dash_array(roi, shape) -> String = "RectangleStrokeDashArray", E::Shape, V::Text, sanitize;
            RectangleFontSize ["Rectangle"]: rectangle_font_size(roi, shape) -> Quantity = "RectangleFontSize", E::Shape, V::Quantity(Dimension::Length), verbatim;
            RectangleLocked ["Rectangle"]: rectangle_locked(roi, shape) -> bool = "RectangleLocked", E::Shape, V::Boolean, verbatim;
            RectangleX ["Rectangle"]: rectangle_x(roi, shape) -> f64 = "RectangleX", E::Shape, V::Float, verbatim;
            RectangleY ["Rectangle"]: rectangle_y(roi, shape) -> f64 = "RectangleY", E::Shape, V::Float, verbatim;
            RectangleWidth ["Rectangle"]: rectangle_width(roi, shape) -> f64 = "RectangleWidth", E::Shape, V::Float, verbatim;
            RectangleHeight ["Rectangle"]: rectangle_height(roi, shape) -> f64 = "RectangleHeight", E::Shape, V::Float, verbatim;
            RectangleAnnotationRef ["Rectangle"]: rectangle_annotation_ref(roi, shape, annotation_ref) -> String = "RectangleAnnotationRef", E::AnnotationRef(A::Shape), V::Reference, verbatim;
            EllipseId ["Ellipse"]: ellipse_id(roi, shape) -> String = "EllipseID", E::Shape, V::Id, sanitize;
            EllipseText ["Ellipse"]: ellipse_text(roi, shape) -> String = "EllipseText", E::Shape, V::Text, sanitize;
            EllipseTheZ ["Ellipse"]: ellipse_the_z(roi, shape) -> i32 = "EllipseTheZ", E::Shape, V::NonNegativeInteger, verbatim;
            EllipseTheT ["Ellipse"]: ellipse_the_t(roi, shape) -> i32 = "EllipseTheT", E::Shape, V::NonNegativeInteger, verbatim;
            EllipseTheC ["Ellipse"]: ellipse_the_c(roi, shape) -> i32 = "EllipseTheC", E::Shape, V::NonNegativeInteger, verbatim;
            EllipseFillColor ["Ellipse"]: ellipse_fill_color(roi, shape) -> Color = "EllipseFillColor", E::Shape, V::Color, verbatim;
            EllipseStrokeColor ["Ellipse"]: ellipse_stroke_color(roi, shape) -> Color = "EllipseStrokeColor", E::Shape, V::Color, verbatim;
            EllipseStrokeWidth ["Ellipse"]: ellipse_stroke_width(roi, shape) -> Quantity = "EllipseStrokeWidth", E::Shape, V::Quantity(Dimension::Length), verbatim;
            EllipseStrokeDashArray ["Ellipse"]: ellipse_stroke_dash_array(roi, shape) -> String = "EllipseStrokeDashArray", E::Shape, V::Text, sanitize;
            EllipseFontSize ["Ellipse"]: ellipse_font_size(roi, shape) -> Quantity = "EllipseFontSize", E::Shape, V::Quantity(Dimension::Length), verbatim;
            EllipseLocked ["Ellipse"]: ellipse_locked(roi, shape) -> bool = "EllipseLocked", E::Shape, V::Boolean, verbatim;
            EllipseX ["Ellipse"]: ellipse_x(roi, shape) -> f64 = "EllipseX", E::Shape, V::Float, verbatim;
            EllipseY ["Ellipse"]: ellipse_y(roi, shape) -> f64 = "EllipseY", E::Shape, V::Float, verbatim;
            EllipseRadiusX ["Ellipse"]: ellipse_radius_x(roi, shape) -> f64 = "EllipseRadiusX", E::Shape, V::Float, verbatim;
            EllipseRadiusY ["Ellipse"]: ellipse_radius_y(roi, shape) -> f64 = "EllipseRadiusY", E::Shape, V::Float, verbatim;
            EllipseAnnotationRef ["Ellipse"]: ellipse_annotation_ref(roi, shape, annotation_ref) -> String = "EllipseAnnotationRef", E::AnnotationRef(A::Shape), V::Reference, verbatim;
            PointId ["Point"]: point_id(roi, shape) -> String = "PointID", E::Shape, V::Id, sanitize;
            PointText ["Point"]: point_text(roi, shape) -> String = "PointText", E::Shape, V::Text, sanitize;
            PointTheZ ["Point"]: point_the_z(roi, shape) -> i32 = "PointTheZ", E::Shape, V::NonNegativeInteger, verbatim;
            PointTheT ["Point"]: point_the_t(roi, shape) -> i32 = "PointTheT", E::Shape, V::NonNegativeInteger, verbatim;
            PointTheC ["Point"]: point_the_c(roi, shape) -> i32 = "PointTheC", E::Shape, V::NonNegativeInteger, verbatim;
            PointFillColor ["Point"]: point_fill_color(roi, shape) -> Color = "PointFillColor", E::Shape, V::Color, verbatim;
            PointStrokeColor ["Point"]: point_stroke_color(roi, shape) -> Color = "PointStrokeColor", E::Shape, V::Color, verbatim;
            PointStrokeWidth ["Point"]: point_stroke_width(roi, shape) -> Quantity = "PointStrokeWidth", E::Shape, V::Quantity(Dimension::Length), verbatim;
            PointStrokeDashArray ["Point"]: point_stroke_dash_array(roi, shape) -> String = "PointStrokeDashArray", E::Shape, V::Text, sanitize;
            PointFontSize ["Point"]: point_font_size(roi, shape) -> Quantity = "PointFontSize", E::Shape, V::Quantity(Dimension::Length), verbatim;
            PointLocked ["Point"]: point_locked(roi, shape) -> bool = "PointLocked", E::Shape, V::Boolean, verbatim;
            PointX ["Point"]: point_x(roi, shape) -> f64 = "PointX", E::Shape, V::Float, verbatim;
            PointY ["Point"]: point_y(roi, shape) -> f64 = "PointY", E::Shape, V::Float, verbatim;
            PointAnnotationRef ["Point"]: point_annotation_ref(roi, shape, annotation_ref) -> String = "PointAnnotationRef", E::AnnotationRef(A::Shape), V::Reference, verbatim;
            LineId ["Line"]: line_id(roi, shape) -> String = "LineID", E::Shape, V::Id, sanitize;
            LineText ["Line"]: line_text(roi, shape) -> String = "LineText", E::Shape, V::Text, sanitize;
            LineTheZ ["Line"]: line_the_z(roi, shape) -> i32 = "LineTheZ", E::Shape, V::NonNegativeInteger, verbatim;
            LineTheT ["Line"]: line_the_t(roi, shape) -> i32 = "LineTheT", E::Shape, V::NonNegativeInteger, verbatim;
            LineTheC ["Line"]: line_the_c(roi, shape) -> i32 = "LineTheC", E::Shape, V::NonNegativeInteger, verbatim;
            LineFillColor ["Line"]: line_fill_color(roi, shape) -> Color = "LineFillColor", E::Shape, V::Color, verbatim;
            LineStrokeColor ["Line"]: line_stroke_color(roi, shape) -> Color = "LineStrokeColor", E::Shape, V::Color, verbatim;
            LineStrokeWidth ["Line"]: line_stroke_width(roi, shape) -> Quantity = "LineStrokeWidth", E::Shape, V::Quantity(Dimension::Length), verbatim;
            LineStrokeDashArray ["Line"]: line_stroke_dash_array(roi, shape) -> String = "LineStrokeDashArray", E::Shape, V::Text, sanitize;
            LineFontSize ["Line"]: line_font_size(roi, shape) -> Quantity = "LineFontSize", E::Shape, V::Quantity(Dimension::Length), verbatim;
            LineLocked ["Line"]: line_locked(roi, shape) -> bool = "LineLocked", E::Shape, V::Boolean, verbatim;
            LineX1 ["Line"]: line_x1(roi, shape) -> f64 = "LineX1", E::Shape, V::Float, verbatim;
            LineY1 ["Line"]: line_y1(roi, shape) -> f64 = "LineY1", E::Shape, V::Float, verbatim;
            LineX2 ["Line"]: line_x2(roi, shape) -> f64 = "LineX2", E::Shape, V::Float, verbatim;
            LineY2 ["Line"]: line_y2(roi, shape) -> f64 = "LineY2", E::Shape, V::Float, verbatim;
            LineAnnotationRef ["Line"]: line_annotation_ref(roi, shape, annotation_ref) -> String = "LineAnnotationRef", E::AnnotationRef(A::Shape), V::Reference, verbatim;
            LabelId ["Label"]: label_id(roi, shape) -> String = "LabelID", E::Shape, V::Id, sanitize;
            LabelText ["Label"]: label_text(roi, shape) -> String = "LabelText", E::Shape, V::Text, sanitize;
            LabelTheZ ["Label"]: label_the_z(roi, shape) -> i32 = "LabelTheZ", E::Shape, V::NonNegativeInteger, verbatim;
            LabelTheT ["Label"]: label_the_t(roi, shape) -> i32 = "LabelTheT", E::Shape, V::NonNegativeInteger, verbatim;
            LabelTheC ["Label"]: label_the_c(roi, shape) -> i32 = "LabelTheC", E::Shape, V::NonNegativeInteger, verbatim;
            LabelFillColor ["Label"]: label_fill_color(roi, shape) -> Color = "LabelFillColor", E::Shape, V::Color, verbatim;
            LabelStrokeColor ["Label"]: label_stroke_color(roi, shape) -> Color = "LabelStrokeColor", E::Shape, V::Color, verbatim;
            LabelStrokeWidth ["Label"]: label_stroke_width(roi, shape) -> Quantity = "LabelStrokeWidth", E::Shape, V::Quantity(Dimension::Length), verbatim;
            LabelStrokeDashArray ["Label"]: label_stroke_dash_array(roi, shape) -> String = "LabelStrokeDashArray", E::Shape, V::Text, sanitize;
            LabelFontSize ["Label"]: label_font_size(roi, shape) -> Quantity = "LabelFontSize", E::Shape, V::Quantity(Dimension::Length), verbatim;
            LabelLocked ["Label"]: label_locked(roi, shape) -> bool = "LabelLocked", E::Shape, V::Boolean, verbatim;
            LabelX ["Label"]: label_x(roi, shape) -> f64 = "LabelX", E::Shape, V::Float, verbatim;
            LabelY ["Label"]: label_y(roi, shape) -> f64 = "LabelY", E::Shape, V::Float, verbatim;
            LabelAnnotationRef ["Label"]: label_annotation_ref(roi, shape, annotation_ref) -> String = "LabelAnnotationRef", E::AnnotationRef(A::Shape), V::Reference, verbatim;
            PolygonId ["Polygon"]: polygon_id(roi, shape) -> String = "PolygonID", E::Shape, V::Id, sanitize;
            PolygonText ["Polygon"]: polygon_text(roi, shape) -> String = "PolygonText", E::Shape, V::Text, sanitize;
            PolygonTheZ ["Polygon"]: polygon_the_z(roi, shape) -> i32 = "PolygonTheZ", E::Shape, V::NonNegativeInteger, verbatim;
            PolygonTheT ["Polygon"]: polygon_the_t(roi, shape) -> i32 = "PolygonTheT", E::Shape, V::NonNegativeInteger, verbatim;
            PolygonTheC ["Polygon"]: polygon_the_c(roi, shape) -> i32 = "PolygonTheC", E::Shape, V::NonNegativeInteger, verbatim;
            PolygonFillColor ["Polygon"]: polygon_fill_color(roi, shape) -> Color = "PolygonFillColor", E::Shape, V::Color, verbatim;
            PolygonStrokeColor ["Polygon"]: polygon_stroke_color(roi, shape) -> Color = "PolygonStrokeColor", E::Shape, V::Color, verbatim;
            PolygonStrokeWidth ["Polygon"]: polygon_stroke_width(roi, shape) -> Quantity = "PolygonStrokeWidth", E::Shape, V::Quantity(Dimension::Length), verbatim;
            PolygonStrokeDashArray ["Polygon"]: polygon_stroke_dash_array(roi, shape) -> String = "PolygonStrokeDashArray", E::Shape, V::Text, sanitize;
            PolygonFontSize ["Polygon"]: polygon_font_size(roi, shape) -> Quantity = "PolygonFontSize", E::Shape, V::Quantity(Dimension::Length), verbatim;
            PolygonLocked ["Polygon"]: polygon_locked(roi, shape) -> bool = "PolygonLocked", E::Shape, V::Boolean, verbatim;
            PolygonPoints ["Polygon"]: polygon_points(roi, shape) -> String = "PolygonPoints", E::Shape, V::Text, sanitize;
            PolygonAnnotationRef ["Polygon"]: polygon_annotation_ref(roi, shape, annotation_ref) -> String = "PolygonAnnotationRef", E::AnnotationRef(A::Shape), V::Reference, verbatim;
            BooleanAnnotationId: boolean_annotation_id(boolean_annotation) -> String = "BooleanAnnotationID", E::BooleanAnnotation, V::Id, sanitize;
            BooleanAnnotationNamespace: boolean_annotation_namespace(boolean_annotation) -> String = "BooleanAnnotationNamespace", E::BooleanAnnotation, V::Text, sanitize;
            BooleanAnnotationDescription: boolean_annotation_description(boolean_annotation) -> String = "BooleanAnnotationDescription", E::BooleanAnnotation, V::Text, sanitize;
            BooleanAnnotationAnnotator: boolean_annotation_annotator(boolean_annotation) -> String = "BooleanAnnotationAnnotator", E::BooleanAnnotation, V::Reference, sanitize;
            BooleanAnnotationValue: boolean_annotation_value(boolean_annotation) -> bool = "BooleanAnnotationValue", E::BooleanAnnotation, V::Boolean, verbatim;
            BooleanAnnotationAnnotationRef: boolean_annotation_annotation_ref(boolean_annotation, annotation_ref) -> String = "BooleanAnnotationAnnotationRef", E::AnnotationRef(A::BooleanAnnotation), V::Reference, verbatim;
            CommentAnnotationId: comment_annotation_id(comment_annotation) -> String = "CommentAnnotationID", E::CommentAnnotation, V::Id, sanitize;
            CommentAnnotationNamespace: comment_annotation_namespace(comment_annotation) -> String = "CommentAnnotationNamespace", E::CommentAnnotation, V::Text, sanitize;
            CommentAnnotationDescription: comment_annotation_description(comment_annotation) -> String = "CommentAnnotationDescription", E::CommentAnnotation, V::Text, sanitize;
            CommentAnnotationAnnotator: comment_annotation_annotator(comment_annotation) -> String = "CommentAnnotationAnnotator", E::CommentAnnotation, V::Reference, sanitize;
            CommentAnnotationValue: comment_annotation_value(comment_annotation) -> String = "CommentAnnotationValue", E::CommentAnnotation, V::Text, sanitize;
            CommentAnnotationAnnotationRef: comment_annotation_annotation_ref(comment_annotation, annotation_ref) -> String = "CommentAnnotationAnnotationRef", E::AnnotationRef(A::CommentAnnotation), V::Reference, verbatim;
            DoubleAnnotationId: double_annotation_id(double_annotation) -> String = "DoubleAnnotationID", E::DoubleAnnotation, V::Id, sanitize;
            DoubleAnnotationNamespace: double_annotation_namespace(double_annotation) -> String = "DoubleAnnotationNamespace", E::DoubleAnnotation, V::Text, sanitize;
            DoubleAnnotationDescription: double_annotation_description(double_annotation) -> String = "DoubleAnnotationDescription", E::DoubleAnnotation, V::Text, sanitize;
            DoubleAnnotationAnnotator: double_annotation_annotator(double_annotation) -> String = "DoubleAnnotationAnnotator", E::DoubleAnnotation, V::Reference, sanitize;
            DoubleAnnotationValue: double_annotation_value(double_annotation) -> f64 = "DoubleAnnotationValue", E::DoubleAnnotation, V::Float, verbatim;
            DoubleAnnotationAnnotationRef: double_annotation_annotation_ref(double_annotation, annotation_ref) -> String = "DoubleAnnotationAnnotationRef", E::AnnotationRef(A::DoubleAnnotation), V::Reference, verbatim;
            FileAnnotationId: file_annotation_id(file_annotation) -> String = "FileAnnotationID", E::FileAnnotation, V::Id, sanitize;
            FileAnnotationNamespace: file_annotation_namespace(file_annotation) -> String = "FileAnnotationNamespace", E::FileAnnotation, V::Text, sanitize;
            FileAnnotationDescription: file_annotation_description(file_annotation) -> String = "FileAnnotationDescription", E::FileAnnotation, V::Text, sanitize;
            FileAnnotationAnnotator: file_annotation_annotator(file_annotation) -> String = "FileAnnotationAnnotator", E::FileAnnotation, V::Reference, sanitize;
            FileAnnotationAnnotationRef: file_annotation_annotation_ref(file_annotation, annotation_ref) -> String = "FileAnnotationAnnotationRef", E::AnnotationRef(A::FileAnnotation), V::Reference, verbatim;
            BinaryFileFileName: binary_file_file_name(file_annotation) -> String = "BinaryFileFileName", E::BinaryFile, V::Text, sanitize;
            BinaryFileMimeType: binary_file_mime_type(file_annotation) -> String = "BinaryFileMIMEType", E::BinaryFile, V::Text, sanitize;
            BinaryFileSize: binary_file_size(file_annotation) -> i64 = "BinaryFileSize", E::BinaryFile, V::NonNegativeLong, verbatim;
            LongAnnotationId: long_annotation_id(long_annotation) -> String = "LongAnnotationID", E::LongAnnotation, V::Id, sanitize;
            LongAnnotationNamespace: long_annotation_namespace(long_annotation) -> String = "LongAnnotationNamespace", E::LongAnnotation, V::Text, sanitize;
            LongAnnotationDescription: long_annotation_description(long_annotation) -> String = "LongAnnotationDescription", E::LongAnnotation, V::Text, sanitize;
            LongAnnotationAnnotator: long_annotation_annotator(long_annotation) -> String = "LongAnnotationAnnotator", E::LongAnnotation, V::Reference, sanitize;
            LongAnnotationValue: long_annotation_value(long_annotation) -> i64 = "LongAnnotationValue", E::LongAnnotation, V::Long, verbatim;
            LongAnnotationAnnotationRef: long_annotation_annotation_ref(long_annotation, annotation_ref) -> String = "LongAnnotationAnnotationRef", E::AnnotationRef(A::LongAnnotation), V::Reference, verbatim;
            MapAnnotationId: map_annotation_id(map_annotation) -> String = "MapAnnotationID", E::MapAnnotation, V::Id, sanitize;
            MapAnnotationNamespace: map_annotation_namespace(map_annotation) -> String = "MapAnnotationNamespace", E::MapAnnotation, V::Text, sanitize;
            MapAnnotationDescription: map_annotation_description(map_annotation) -> String = "MapAnnotationDescription", E::MapAnnotation, V::Text, sanitize;
            MapAnnotationAnnotator: map_annotation_annotator(map_annotation) -> String = "MapAnnotationAnnotator", E::MapAnnotation, V::Reference, sanitize;
            MapAnnotationValue: map_annotation_value(map_annotation) -> Vec<MapPair> = "MapAnnotationValue", E::MapAnnotation, V::MapPairs, verbatim;
            MapAnnotationAnnotationRef: map_annotation_annotation_ref(map_annotation, annotation_ref) -> String = "MapAnnotationAnnotationRef", E::AnnotationRef(A::MapAnnotation), V::Reference, verbatim;
            TagAnnotationId: tag_annotation_id(tag_annotation) -> String = "TagAnnotationID", E::TagAnnotation, V::Id, sanitize;
            TagAnnotationNamespace: tag_annotation_namespace(tag_annotation) -> String = "TagAnnotationNamespace", E::TagAnnotation, V::Text, sanitize;
            TagAnnotationDescription: tag_annotation_description(tag_annotation) -> String = "TagAnnotationDescription", E::TagAnnotation, V::Text, sanitize;
            TagAnnotationAnnotator: tag_annotation_annotator(tag_annotation) -> String = "TagAnnotationAnnotator", E::TagAnnotation, V::Reference, sanitize;
            TagAnnotationValue: tag_annotation_value(tag_annotation) -> String = "TagAnnotationValue", E::TagAnnotation, V::Text, sanitize;
            TagAnnotationAnnotationRef: tag_annotation_annotation_ref(tag_annotation, annotation_ref) -> String = "TagAnnotationAnnotationRef", E::AnnotationRef(A::TagAnnotation), V::Reference, verbatim;
            TermAnnotationId: term_annotation_id(term_annotation) -> String = "TermAnnotationID", E::TermAnnotation, V::Id, sanitize;
            TermAnnotationNamespace: term_annotation_namespace(term_annotation) -> String = "TermAnnotationNamespace", E::TermAnnotation, V::Text, sanitize;
            TermAnnotationDescription: term_annotation_description(term_annotation) -> String = "TermAnnotationDescription", E::TermAnnotation, V::Text, sanitize;
            TermAnnotationAnnotator: term_annotation_annotator(term_annotation) -> String = "TermAnnotationAnnotator", E::TermAnnotation, V::Reference, sanitize;
            TermAnnotationValue: term_annotation_value(term_annotation) -> String = "TermAnnotationValue", E::TermAnnotation, V::Text, sanitize;
            TermAnnotationAnnotationRef: term_annotation_annotation_ref(term_annotation, annotation_ref) -> String = "TermAnnotationAnnotationRef", E::AnnotationRef(A::TermAnnotation), V::Reference, verbatim;
            TimestampAnnotationId: timestamp_annotation_id(timestamp_annotation) -> String = "TimestampAnnotationID", E::TimestampAnnotation, V::Id, sanitize;
            TimestampAnnotationNamespace: timestamp_annotation_namespace(timestamp_annotation) -> String = "TimestampAnnotationNamespace", E::TimestampAnnotation, V::Text, sanitize;
            TimestampAnnotationDescription: timestamp_annotation_description(timestamp_annotation) -> String = "TimestampAnnotationDescription", E::TimestampAnnotation, V::Text, sanitize;
            TimestampAnnotationAnnotator: timestamp_annotation_annotator(timestamp_annotation) -> String = "TimestampAnnotationAnnotator", E::TimestampAnnotation, V::Reference, sanitize;
            TimestampAnnotationValue: timestamp_annotation_value(timestamp_annotation) -> Timestamp = "TimestampAnnotationValue", E::TimestampAnnotation, V::Timestamp, verbatim;
            TimestampAnnotationAnnotationRef: timestamp_annotation_annotation_ref(timestamp_annotation, annotation_ref) -> String = "TimestampAnnotationAnnotationRef", E::AnnotationRef(A::TimestampAnnotation), V::Reference, verbatim;
            XmlAnnotationId: xml_annotation_id(xml_annotation) -> String = "XMLAnnotationID", E::XmlAnnotation, V::Id, sanitize;
            XmlAnnotationNamespace: xml_annotation_namespace(xml_annotation) -> String = "XMLAnnotationNamespace", E::XmlAnnotation, V::Text, sanitize;
            XmlAnnotationDescription: xml_annotation_description(xml_annotation) -> String = "XMLAnnotationDescription", E::XmlAnnotation, V::Text, sanitize;
            XmlAnnotationAnnotator: xml_annotation_annotator(xml_annotation) -> String = "XMLAnnotationAnnotator", E::XmlAnnotation, V::Reference, sanitize;
            XmlAnnotationValue: xml_annotation_value(xml_annotation) -> String = "XMLAnnotationValue", E::XmlAnnotation, V::Text, sanitize;
            XmlAnnotationAnnotationRef: xml_annotation_annotation_ref(xml_annotation, annotation_ref) -> String = "XMLAnnotationAnnotationRef", E::AnnotationRef(A::XmlAnnotation), V::Reference, verbatim;
        }
    };
}

pub(crate) use property_table;

macro_rules! define_properties {
    (@policy sanitize) => { true };
    (@policy verbatim) => { false };
    (@kind) => { None };
    (@kind $kind:literal) => { Some($kind) };
    ($(
        $variant:ident $([$kind:literal])? : $getter:ident ( $($idx:ident),* ) -> $ty:ty
            = $name:literal, $entity:expr, $vt:expr, $policy:ident;
    )*) => {
        /// One settable property of the schema
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(into = "String", try_from = "String")]
        pub enum Property {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Property {
            /// Every property, in schema order
            pub const ALL: &'static [Property] = &[$( Property::$variant, )*];

            /// Flattened schema name, e.g. `ChannelLightSourceSettingsID`
            pub fn name(self) -> &'static str {
                match self {
                    $( Property::$variant => $name, )*
                }
            }

            /// Name of the typed getter, e.g. `channel_name`
            pub fn accessor(self) -> &'static str {
                match self {
                    $( Property::$variant => stringify!($getter), )*
                }
            }

            /// Entity whose instances carry this property
            pub fn entity(self) -> Entity {
                match self {
                    $( Property::$variant => $entity, )*
                }
            }

            /// Values this property accepts
            pub fn value_type(self) -> ValueType {
                match self {
                    $( Property::$variant => $vt, )*
                }
            }

            /// Whether text values are passed through the sanitizer
            pub fn sanitized(self) -> bool {
                match self {
                    $( Property::$variant => define_properties!(@policy $policy), )*
                }
            }

            /// Concrete light source or shape kind this property belongs to
            pub fn kind(self) -> Option<&'static str> {
                match self {
                    $( Property::$variant => define_properties!(@kind $($kind)?), )*
                }
            }
        }
    };
}

property_table!(define_properties);

impl Property {
    /// Number of indices addressing the property
    pub fn arity(self) -> usize {
        self.entity().depth()
    }

    /// Properties of `entity`, in schema order.
    pub fn of(entity: Entity) -> impl Iterator<Item = Property> {
        Self::ALL.iter().copied().filter(move |p| p.entity() == entity)
    }

    /// True for `ID` properties, which name the instance they belong to.
    pub fn is_id(self) -> bool {
        matches!(self.value_type(), ValueType::Id)
    }

    /// True for properties holding the identifier of another instance.
    pub fn is_reference(self) -> bool {
        matches!(self.value_type(), ValueType::Reference)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks a property up by schema name, falling back to a case-insensitive match.
impl FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .or_else(|| Self::ALL.iter().copied().find(|p| p.name().eq_ignore_ascii_case(s)))
            .ok_or_else(|| format!("unknown property '{s}'"))
    }
}

impl From<Property> for String {
    fn from(property: Property) -> Self {
        property.name().to_string()
    }
}

impl TryFrom<String> for Property {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
