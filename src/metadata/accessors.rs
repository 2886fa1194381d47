//! Typed accessors generated from the property table.
//!
//! [`RetrieveAccessors`] carries one getter per property
//! (`channel_name(image, channel)`) plus one count per indexed entity
//! (`channel_count(image)`); [`StoreAccessors`] carries the matching setters
//! (`set_channel_name(value, image, channel)`). Both are implemented for
//! every store, including trait objects.

use crate::model::{Color, FromMetadataValue, IndexPath, MapPair, MetadataValue, Quantity, Timestamp};
use crate::schema::{
    property_table, AcquisitionMode, Annotated, ArcType, Binning, ContrastMethod, Correction,
    DetectorType, DimensionOrder, Entity, ExperimentType, FilterHolder, FilterType,
    IlluminationType, Immersion, LaserMedium, LaserType, Medium, MicroscopeType, NamingConvention,
    PixelType, Property, Pulse,
};

use super::{MetadataError, MetadataRetrieve, MetadataStore};

macro_rules! define_getters {
    ($(
        $variant:ident $([$kind:literal])? : $getter:ident ( $($idx:ident),* ) -> $ty:ty
            = $name:literal, $entity:expr, $vt:expr, $policy:ident;
    )*) => {
        $(
            #[doc = concat!("`", $name, "`, or `None` when unset")]
            fn $getter(&self, $($idx: usize),*) -> Option<$ty> {
                self.value(Property::$variant, &IndexPath::new([$($idx),*]))
                    .and_then(<$ty as FromMetadataValue>::from_value)
            }
        )*
    };
}

macro_rules! define_setters {
    ($(
        $variant:ident $([$kind:literal])? : $getter:ident ( $($idx:ident),* ) -> $ty:ty
            = $name:literal, $entity:expr, $vt:expr, $policy:ident;
    )*) => {
        paste::paste! {
            $(
                #[doc = concat!("Set `", $name, "`")]
                fn [<set_ $getter>](
                    &mut self,
                    value: impl Into<$ty>,
                    $($idx: usize),*
                ) -> Result<(), MetadataError> {
                    let value: $ty = value.into();
                    self.set_value(
                        Property::$variant,
                        IndexPath::new([$($idx),*]),
                        MetadataValue::from(value),
                    )
                }
            )*
        }
    };
}

/// Count accessors, one per indexed entity: `name(parent indices) = entity;`
macro_rules! count_table {
    ($callback:ident) => {
        $callback! {
            image_count() = Entity::Image;
            channel_count(image) = Entity::Channel;
            plane_count(image) = Entity::Plane;
            tiff_data_count(image) = Entity::TiffData;
            image_roi_ref_count(image) = Entity::RoiRef;
            image_annotation_ref_count(image) = Entity::AnnotationRef(Annotated::Image);
            channel_annotation_ref_count(image, channel) = Entity::AnnotationRef(Annotated::Channel);
            light_path_emission_filter_ref_count(image, channel) = Entity::EmissionFilterRef(FilterHolder::LightPath);
            light_path_excitation_filter_ref_count(image, channel) = Entity::ExcitationFilterRef(FilterHolder::LightPath);
            light_path_annotation_ref_count(image, channel) = Entity::AnnotationRef(Annotated::LightPath);
            plane_annotation_ref_count(image, plane) = Entity::AnnotationRef(Annotated::Plane);
            instrument_count() = Entity::Instrument;
            instrument_annotation_ref_count(instrument) = Entity::AnnotationRef(Annotated::Instrument);
            detector_count(instrument) = Entity::Detector;
            detector_annotation_ref_count(instrument, detector) = Entity::AnnotationRef(Annotated::Detector);
            objective_count(instrument) = Entity::Objective;
            objective_annotation_ref_count(instrument, objective) = Entity::AnnotationRef(Annotated::Objective);
            light_source_count(instrument) = Entity::LightSource;
            light_source_annotation_ref_count(instrument, light_source) = Entity::AnnotationRef(Annotated::LightSource);
            dichroic_count(instrument) = Entity::Dichroic;
            dichroic_annotation_ref_count(instrument, dichroic) = Entity::AnnotationRef(Annotated::Dichroic);
            filter_count(instrument) = Entity::Filter;
            filter_annotation_ref_count(instrument, filter) = Entity::AnnotationRef(Annotated::Filter);
            filter_set_count(instrument) = Entity::FilterSet;
            filter_set_emission_filter_ref_count(instrument, filter_set) = Entity::EmissionFilterRef(FilterHolder::FilterSet);
            filter_set_excitation_filter_ref_count(instrument, filter_set) = Entity::ExcitationFilterRef(FilterHolder::FilterSet);
            experimenter_count() = Entity::Experimenter;
            experimenter_annotation_ref_count(experimenter) = Entity::AnnotationRef(Annotated::Experimenter);
            experimenter_group_count() = Entity::ExperimenterGroup;
            experimenter_group_experimenter_ref_count(experimenter_group) = Entity::ExperimenterRef;
            experimenter_group_leader_count(experimenter_group) = Entity::Leader;
            experimenter_group_annotation_ref_count(experimenter_group) = Entity::AnnotationRef(Annotated::ExperimenterGroup);
            experiment_count() = Entity::Experiment;
            project_count() = Entity::Project;
            project_dataset_ref_count(project) = Entity::DatasetRef;
            project_annotation_ref_count(project) = Entity::AnnotationRef(Annotated::Project);
            dataset_count() = Entity::Dataset;
            dataset_image_ref_count(dataset) = Entity::ImageRef;
            dataset_annotation_ref_count(dataset) = Entity::AnnotationRef(Annotated::Dataset);
            screen_count() = Entity::Screen;
            screen_plate_ref_count(screen) = Entity::PlateRef;
            screen_annotation_ref_count(screen) = Entity::AnnotationRef(Annotated::Screen);
            reagent_count(screen) = Entity::Reagent;
            reagent_annotation_ref_count(screen, reagent) = Entity::AnnotationRef(Annotated::Reagent);
            plate_count() = Entity::Plate;
            plate_annotation_ref_count(plate) = Entity::AnnotationRef(Annotated::Plate);
            plate_acquisition_count(plate) = Entity::PlateAcquisition;
            plate_acquisition_well_sample_ref_count(plate, plate_acquisition) = Entity::WellSampleRef;
            plate_acquisition_annotation_ref_count(plate, plate_acquisition) = Entity::AnnotationRef(Annotated::PlateAcquisition);
            well_count(plate) = Entity::Well;
            well_annotation_ref_count(plate, well) = Entity::AnnotationRef(Annotated::Well);
            well_sample_count(plate, well) = Entity::WellSample;
            roi_count() = Entity::Roi;
            roi_annotation_ref_count(roi) = Entity::AnnotationRef(Annotated::Roi);
            shape_count(roi) = Entity::Shape;
            shape_annotation_ref_count(roi, shape) = Entity::AnnotationRef(Annotated::Shape);
            boolean_annotation_count() = Entity::BooleanAnnotation;
            boolean_annotation_annotation_ref_count(boolean_annotation) = Entity::AnnotationRef(Annotated::BooleanAnnotation);
            comment_annotation_count() = Entity::CommentAnnotation;
            comment_annotation_annotation_ref_count(comment_annotation) = Entity::AnnotationRef(Annotated::CommentAnnotation);
            double_annotation_count() = Entity::DoubleAnnotation;
            double_annotation_annotation_ref_count(double_annotation) = Entity::AnnotationRef(Annotated::DoubleAnnotation);
            file_annotation_count() = Entity::FileAnnotation;
            file_annotation_annotation_ref_count(file_annotation) = Entity::AnnotationRef(Annotated::FileAnnotation);
            long_annotation_count() = Entity::LongAnnotation;
            long_annotation_annotation_ref_count(long_annotation) = Entity::AnnotationRef(Annotated::LongAnnotation);
            map_annotation_count() = Entity::MapAnnotation;
            map_annotation_annotation_ref_count(map_annotation) = Entity::AnnotationRef(Annotated::MapAnnotation);
            tag_annotation_count() = Entity::TagAnnotation;
            tag_annotation_annotation_ref_count(tag_annotation) = Entity::AnnotationRef(Annotated::TagAnnotation);
            term_annotation_count() = Entity::TermAnnotation;
            term_annotation_annotation_ref_count(term_annotation) = Entity::AnnotationRef(Annotated::TermAnnotation);
            timestamp_annotation_count() = Entity::TimestampAnnotation;
            timestamp_annotation_annotation_ref_count(timestamp_annotation) = Entity::AnnotationRef(Annotated::TimestampAnnotation);
            xml_annotation_count() = Entity::XmlAnnotation;
            xml_annotation_annotation_ref_count(xml_annotation) = Entity::AnnotationRef(Annotated::XmlAnnotation);
        }
    };
}

macro_rules! define_counts {
    ($( $method:ident ( $($idx:ident),* ) = $entity:expr; )*) => {
        $(
            #[doc = concat!("Number of `", stringify!($entity), "` instances, or `None` if the store does not track them")]
            fn $method(&self, $($idx: usize),*) -> Option<usize> {
                self.count($entity, &IndexPath::new([$($idx),*]))
            }
        )*
    };
}

/// Typed getters and counts over any [`MetadataRetrieve`]
pub trait RetrieveAccessors: MetadataRetrieve {
    property_table!(define_getters);
    count_table!(define_counts);

    /// Concrete kind of a light source: `Laser`, `Arc` or `LightEmittingDiode`
    fn light_source_type(&self, instrument: usize, light_source: usize) -> Option<&'static str> {
        self.kind(Entity::LightSource, &IndexPath::new([instrument, light_source]))
    }

    /// Concrete kind of a shape: `Rectangle`, `Ellipse`, `Point`, `Line`, `Label` or `Polygon`
    fn shape_type(&self, roi: usize, shape: usize) -> Option<&'static str> {
        self.kind(Entity::Shape, &IndexPath::new([roi, shape]))
    }
}

impl<T: MetadataRetrieve + ?Sized> RetrieveAccessors for T {}

/// Typed setters over any [`MetadataStore`]
pub trait StoreAccessors: MetadataStore {
    property_table!(define_setters);
}

impl<T: MetadataStore + ?Sized> StoreAccessors for T {}

#[cfg(test)]
pub(crate) mod table {
    //! The accessor table as data, for consistency checks.

    use super::*;

    /// `(property, getter name, index parameter count)`
    pub(crate) type AccessorRow = (Property, &'static str, usize);

    macro_rules! collect_rows {
        ($(
            $variant:ident $([$kind:literal])? : $getter:ident ( $($idx:ident),* ) -> $ty:ty
                = $name:literal, $entity:expr, $vt:expr, $policy:ident;
        )*) => {
            vec![$(
                (Property::$variant, stringify!($getter), <[&str]>::len(&[$(stringify!($idx)),*])),
            )*]
        };
    }

    macro_rules! collect_counts {
        ($( $method:ident ( $($idx:ident),* ) = $entity:expr; )*) => {
            vec![$( ($entity, <[&str]>::len(&[$(stringify!($idx)),*])), )*]
        };
    }

    pub(crate) fn accessor_rows() -> Vec<AccessorRow> {
        property_table!(collect_rows)
    }

    pub(crate) fn count_rows() -> Vec<(Entity, usize)> {
        count_table!(collect_counts)
    }

    /// Round-trip a sample value through the typed getter's Rust type.
    pub(crate) fn typed_sample_survives(property: Property) -> bool {
        macro_rules! check_sample {
            ($(
                $variant:ident $([$kind:literal])? : $getter:ident ( $($idx:ident),* ) -> $ty:ty
                    = $name:literal, $entity:expr, $vt:expr, $policy:ident;
            )*) => {
                match property {
                    $(
                        Property::$variant => {
                            let sample = property.value_type().sample();
                            <$ty as FromMetadataValue>::from_value(sample.clone())
                                .map(MetadataValue::from)
                                == Some(sample)
                        }
                    )*
                }
            };
        }
        property_table!(check_sample)
    }
}
