use std::fmt;

/// Parent types that can carry an `AnnotationRef` list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Annotated {
    /// `Image/AnnotationRef`
    Image,
    /// `Channel/AnnotationRef`
    Channel,
    /// `Plane/AnnotationRef`
    Plane,
    /// `Instrument/AnnotationRef`
    Instrument,
    /// `Detector/AnnotationRef`
    Detector,
    /// `Objective/AnnotationRef`
    Objective,
    /// `LightSource/AnnotationRef`
    LightSource,
    /// `Dichroic/AnnotationRef`
    Dichroic,
    /// `Filter/AnnotationRef`
    Filter,
    /// `LightPath/AnnotationRef`
    LightPath,
    /// `Experimenter/AnnotationRef`
    Experimenter,
    /// `ExperimenterGroup/AnnotationRef`
    ExperimenterGroup,
    /// `Project/AnnotationRef`
    Project,
    /// `Dataset/AnnotationRef`
    Dataset,
    /// `Screen/AnnotationRef`
    Screen,
    /// `Reagent/AnnotationRef`
    Reagent,
    /// `Plate/AnnotationRef`
    Plate,
    /// `PlateAcquisition/AnnotationRef`
    PlateAcquisition,
    /// `Well/AnnotationRef`
    Well,
    /// `ROI/AnnotationRef`
    Roi,
    /// `Shape/AnnotationRef`
    Shape,
    /// `BooleanAnnotation/AnnotationRef`
    BooleanAnnotation,
    /// `CommentAnnotation/AnnotationRef`
    CommentAnnotation,
    /// `DoubleAnnotation/AnnotationRef`
    DoubleAnnotation,
    /// `FileAnnotation/AnnotationRef`
    FileAnnotation,
    /// `LongAnnotation/AnnotationRef`
    LongAnnotation,
    /// `MapAnnotation/AnnotationRef`
    MapAnnotation,
    /// `TagAnnotation/AnnotationRef`
    TagAnnotation,
    /// `TermAnnotation/AnnotationRef`
    TermAnnotation,
    /// `TimestampAnnotation/AnnotationRef`
    TimestampAnnotation,
    /// `XMLAnnotation/AnnotationRef`
    XmlAnnotation,
}

impl Annotated {
    /// Every annotatable parent type
    pub const ALL: &'static [Annotated] = &[
        Annotated::Image,
        Annotated::Channel,
        Annotated::Plane,
        Annotated::Instrument,
        Annotated::Detector,
        Annotated::Objective,
        Annotated::LightSource,
        Annotated::Dichroic,
        Annotated::Filter,
        Annotated::LightPath,
        Annotated::Experimenter,
        Annotated::ExperimenterGroup,
        Annotated::Project,
        Annotated::Dataset,
        Annotated::Screen,
        Annotated::Reagent,
        Annotated::Plate,
        Annotated::PlateAcquisition,
        Annotated::Well,
        Annotated::Roi,
        Annotated::Shape,
        Annotated::BooleanAnnotation,
        Annotated::CommentAnnotation,
        Annotated::DoubleAnnotation,
        Annotated::FileAnnotation,
        Annotated::LongAnnotation,
        Annotated::MapAnnotation,
        Annotated::TagAnnotation,
        Annotated::TermAnnotation,
        Annotated::TimestampAnnotation,
        Annotated::XmlAnnotation,
    ];

    /// The entity owning the reference list
    pub fn entity(self) -> Entity {
        match self {
            Annotated::Image => Entity::Image,
            Annotated::Channel => Entity::Channel,
            Annotated::Plane => Entity::Plane,
            Annotated::Instrument => Entity::Instrument,
            Annotated::Detector => Entity::Detector,
            Annotated::Objective => Entity::Objective,
            Annotated::LightSource => Entity::LightSource,
            Annotated::Dichroic => Entity::Dichroic,
            Annotated::Filter => Entity::Filter,
            Annotated::LightPath => Entity::LightPath,
            Annotated::Experimenter => Entity::Experimenter,
            Annotated::ExperimenterGroup => Entity::ExperimenterGroup,
            Annotated::Project => Entity::Project,
            Annotated::Dataset => Entity::Dataset,
            Annotated::Screen => Entity::Screen,
            Annotated::Reagent => Entity::Reagent,
            Annotated::Plate => Entity::Plate,
            Annotated::PlateAcquisition => Entity::PlateAcquisition,
            Annotated::Well => Entity::Well,
            Annotated::Roi => Entity::Roi,
            Annotated::Shape => Entity::Shape,
            Annotated::BooleanAnnotation => Entity::BooleanAnnotation,
            Annotated::CommentAnnotation => Entity::CommentAnnotation,
            Annotated::DoubleAnnotation => Entity::DoubleAnnotation,
            Annotated::FileAnnotation => Entity::FileAnnotation,
            Annotated::LongAnnotation => Entity::LongAnnotation,
            Annotated::MapAnnotation => Entity::MapAnnotation,
            Annotated::TagAnnotation => Entity::TagAnnotation,
            Annotated::TermAnnotation => Entity::TermAnnotation,
            Annotated::TimestampAnnotation => Entity::TimestampAnnotation,
            Annotated::XmlAnnotation => Entity::XmlAnnotation,
        }
    }
}

/// Parent types that can reference emission and excitation filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterHolder {
    /// Filters mounted in an instrument filter set
    FilterSet,
    /// Filters in a channel's light path
    LightPath,
}

impl FilterHolder {
    /// The entity owning the reference list
    pub fn entity(self) -> Entity {
        match self {
            FilterHolder::FilterSet => Entity::FilterSet,
            FilterHolder::LightPath => Entity::LightPath,
        }
    }
}

/// A node in the schema's containment hierarchy.
///
/// Indexed entities add one index to their parent's path; singleton children
/// such as `Pixels` or `LightPath` share their parent's path. Multi-path
/// entities carry their parent type, so `AnnotationRef(Annotated::Channel)`
/// and `AnnotationRef(Annotated::Image)` are distinct nodes with distinct
/// index arities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entity {
    /// Document-level pointer to an external metadata file
    BinaryOnly,
    /// An acquired image
    Image,
    /// Pixel layout of an image
    Pixels,
    /// One channel of an image
    Channel,
    /// Light source settings used for a channel
    LightSourceSettings,
    /// Detector settings used for a channel
    DetectorSettings,
    /// Optical path of a channel
    LightPath,
    /// One plane of an image
    Plane,
    /// Mapping of planes onto TIFF IFDs
    TiffData,
    /// File reference of a `TiffData` block
    Uuid,
    /// Environment during acquisition
    ImagingEnvironment,
    /// Stage position label
    StageLabel,
    /// Objective settings used for an image
    ObjectiveSettings,
    /// `ROIRef` list of an image
    RoiRef,
    /// A microscope setup
    Instrument,
    /// Microscope stand of an instrument
    Microscope,
    /// A detector
    Detector,
    /// An objective lens
    Objective,
    /// A light source; its concrete kind is `Laser`, `Arc` or `LightEmittingDiode`
    LightSource,
    /// A dichroic mirror
    Dichroic,
    /// A filter
    Filter,
    /// Spectral range of a filter
    TransmittanceRange,
    /// A filter cube
    FilterSet,
    /// `EmissionFilterRef` list
    EmissionFilterRef(FilterHolder),
    /// `ExcitationFilterRef` list
    ExcitationFilterRef(FilterHolder),
    /// A person
    Experimenter,
    /// A group of people
    ExperimenterGroup,
    /// `ExperimenterRef` list of a group
    ExperimenterRef,
    /// `Leader` list of a group
    Leader,
    /// An experiment description
    Experiment,
    /// A project
    Project,
    /// `DatasetRef` list of a project
    DatasetRef,
    /// A dataset
    Dataset,
    /// `ImageRef` list of a dataset
    ImageRef,
    /// A screen
    Screen,
    /// `PlateRef` list of a screen
    PlateRef,
    /// A reagent used in a screen
    Reagent,
    /// A multi-well plate
    Plate,
    /// One acquisition run over a plate
    PlateAcquisition,
    /// `WellSampleRef` list of a plate acquisition
    WellSampleRef,
    /// A well on a plate
    Well,
    /// A field imaged within a well
    WellSample,
    /// A region of interest
    Roi,
    /// Shape container of a region of interest
    Union,
    /// A shape; its concrete kind is `Rectangle`, `Ellipse`, `Point`, `Line`, `Label` or `Polygon`
    Shape,
    /// Boolean structured annotation
    BooleanAnnotation,
    /// Comment structured annotation
    CommentAnnotation,
    /// Floating point structured annotation
    DoubleAnnotation,
    /// File structured annotation
    FileAnnotation,
    /// Attached file of a file annotation
    BinaryFile,
    /// Integer structured annotation
    LongAnnotation,
    /// Key/value structured annotation
    MapAnnotation,
    /// Tag structured annotation
    TagAnnotation,
    /// Ontology term structured annotation
    TermAnnotation,
    /// Timestamp structured annotation
    TimestampAnnotation,
    /// XML structured annotation
    XmlAnnotation,
    /// `AnnotationRef` list, keyed by the annotated parent type
    AnnotationRef(Annotated),
}

impl Entity {
    /// Entities with a fixed parent, in schema order
    const FIXED: &'static [Entity] = &[
        Entity::BinaryOnly,
        Entity::Image,
        Entity::Pixels,
        Entity::Channel,
        Entity::LightSourceSettings,
        Entity::DetectorSettings,
        Entity::LightPath,
        Entity::Plane,
        Entity::TiffData,
        Entity::Uuid,
        Entity::ImagingEnvironment,
        Entity::StageLabel,
        Entity::ObjectiveSettings,
        Entity::RoiRef,
        Entity::Instrument,
        Entity::Microscope,
        Entity::Detector,
        Entity::Objective,
        Entity::LightSource,
        Entity::Dichroic,
        Entity::Filter,
        Entity::TransmittanceRange,
        Entity::FilterSet,
        Entity::EmissionFilterRef(FilterHolder::FilterSet),
        Entity::ExcitationFilterRef(FilterHolder::FilterSet),
        Entity::EmissionFilterRef(FilterHolder::LightPath),
        Entity::ExcitationFilterRef(FilterHolder::LightPath),
        Entity::Experimenter,
        Entity::ExperimenterGroup,
        Entity::ExperimenterRef,
        Entity::Leader,
        Entity::Experiment,
        Entity::Project,
        Entity::DatasetRef,
        Entity::Dataset,
        Entity::ImageRef,
        Entity::Screen,
        Entity::PlateRef,
        Entity::Reagent,
        Entity::Plate,
        Entity::PlateAcquisition,
        Entity::WellSampleRef,
        Entity::Well,
        Entity::WellSample,
        Entity::Roi,
        Entity::Union,
        Entity::Shape,
        Entity::BooleanAnnotation,
        Entity::CommentAnnotation,
        Entity::DoubleAnnotation,
        Entity::FileAnnotation,
        Entity::BinaryFile,
        Entity::LongAnnotation,
        Entity::MapAnnotation,
        Entity::TagAnnotation,
        Entity::TermAnnotation,
        Entity::TimestampAnnotation,
        Entity::XmlAnnotation,
    ];

    /// Every node of the containment tree.
    pub fn all() -> impl Iterator<Item = Entity> {
        Self::FIXED
            .iter()
            .copied()
            .chain(Annotated::ALL.iter().map(|&a| Entity::AnnotationRef(a)))
    }

    /// Entities directly under the document root.
    pub fn roots() -> impl Iterator<Item = Entity> {
        Self::all().filter(|e| e.parent().is_none())
    }

    /// Direct children of this entity.
    pub fn children(self) -> impl Iterator<Item = Entity> {
        Self::all().filter(move |e| e.parent() == Some(self))
    }

    /// Enclosing entity, or `None` for entities directly under the document root
    pub fn parent(self) -> Option<Entity> {
        use Entity::*;
        match self {
            BinaryOnly | Image | Instrument | Experimenter | ExperimenterGroup | Experiment
            | Project | Dataset | Screen | Plate | Roi | BooleanAnnotation | CommentAnnotation
            | DoubleAnnotation | FileAnnotation | LongAnnotation | MapAnnotation
            | TagAnnotation | TermAnnotation | TimestampAnnotation | XmlAnnotation => None,
            Pixels | Channel | Plane | TiffData | ImagingEnvironment | StageLabel
            | ObjectiveSettings | RoiRef => Some(Image),
            LightSourceSettings | DetectorSettings | LightPath => Some(Channel),
            Uuid => Some(TiffData),
            TransmittanceRange => Some(Filter),
            Microscope | Detector | Objective | LightSource | Dichroic | Filter | FilterSet => {
                Some(Instrument)
            }
            EmissionFilterRef(holder) | ExcitationFilterRef(holder) => Some(holder.entity()),
            ExperimenterRef | Leader => Some(ExperimenterGroup),
            DatasetRef => Some(Project),
            ImageRef => Some(Dataset),
            PlateRef | Reagent => Some(Screen),
            PlateAcquisition | Well => Some(Plate),
            WellSampleRef => Some(PlateAcquisition),
            WellSample => Some(Well),
            Union => Some(Roi),
            Shape => Some(Union),
            BinaryFile => Some(FileAnnotation),
            AnnotationRef(annotated) => Some(annotated.entity()),
        }
    }

    /// False for singleton children that share their parent's index path.
    pub fn is_indexed(self) -> bool {
        !matches!(
            self,
            Entity::BinaryOnly
                | Entity::Pixels
                | Entity::LightSourceSettings
                | Entity::DetectorSettings
                | Entity::LightPath
                | Entity::Uuid
                | Entity::ImagingEnvironment
                | Entity::StageLabel
                | Entity::ObjectiveSettings
                | Entity::Microscope
                | Entity::TransmittanceRange
                | Entity::Union
                | Entity::BinaryFile
        )
    }

    /// True for lists whose only content is an identifier reference.
    pub fn is_reference_list(self) -> bool {
        matches!(
            self,
            Entity::RoiRef
                | Entity::EmissionFilterRef(_)
                | Entity::ExcitationFilterRef(_)
                | Entity::ExperimenterRef
                | Entity::Leader
                | Entity::DatasetRef
                | Entity::ImageRef
                | Entity::PlateRef
                | Entity::WellSampleRef
                | Entity::AnnotationRef(_)
        )
    }

    /// Number of indices addressing one instance
    pub fn depth(self) -> usize {
        let own = usize::from(self.is_indexed());
        self.parent().map_or(own, |parent| parent.depth() + own)
    }

    /// Nearest ancestor-or-self that carries an index, i.e. the entity whose
    /// instances this entity's index path actually enumerates.
    pub fn indexed_ancestor(self) -> Option<Entity> {
        if self.is_indexed() {
            Some(self)
        } else {
            self.parent().and_then(Entity::indexed_ancestor)
        }
    }

    /// True for abstract entities whose instances carry a concrete kind.
    pub fn is_polymorphic(self) -> bool {
        matches!(self, Entity::LightSource | Entity::Shape)
    }

    /// Nearest polymorphic ancestor-or-self.
    pub fn polymorphic_ancestor(self) -> Option<Entity> {
        if self.is_polymorphic() {
            Some(self)
        } else {
            self.parent().and_then(Entity::polymorphic_ancestor)
        }
    }

    /// Element name in the schema
    pub fn name(self) -> &'static str {
        use Entity::*;
        match self {
            BinaryOnly => "BinaryOnly",
            Image => "Image",
            Pixels => "Pixels",
            Channel => "Channel",
            LightSourceSettings => "LightSourceSettings",
            DetectorSettings => "DetectorSettings",
            LightPath => "LightPath",
            Plane => "Plane",
            TiffData => "TiffData",
            Uuid => "UUID",
            ImagingEnvironment => "ImagingEnvironment",
            StageLabel => "StageLabel",
            ObjectiveSettings => "ObjectiveSettings",
            RoiRef => "ROIRef",
            Instrument => "Instrument",
            Microscope => "Microscope",
            Detector => "Detector",
            Objective => "Objective",
            LightSource => "LightSource",
            Dichroic => "Dichroic",
            Filter => "Filter",
            TransmittanceRange => "TransmittanceRange",
            FilterSet => "FilterSet",
            EmissionFilterRef(_) => "EmissionFilterRef",
            ExcitationFilterRef(_) => "ExcitationFilterRef",
            Experimenter => "Experimenter",
            ExperimenterGroup => "ExperimenterGroup",
            ExperimenterRef => "ExperimenterRef",
            Leader => "Leader",
            Experiment => "Experiment",
            Project => "Project",
            DatasetRef => "DatasetRef",
            Dataset => "Dataset",
            ImageRef => "ImageRef",
            Screen => "Screen",
            PlateRef => "PlateRef",
            Reagent => "Reagent",
            Plate => "Plate",
            PlateAcquisition => "PlateAcquisition",
            WellSampleRef => "WellSampleRef",
            Well => "Well",
            WellSample => "WellSample",
            Roi => "ROI",
            Union => "Union",
            Shape => "Shape",
            BooleanAnnotation => "BooleanAnnotation",
            CommentAnnotation => "CommentAnnotation",
            DoubleAnnotation => "DoubleAnnotation",
            FileAnnotation => "FileAnnotation",
            BinaryFile => "BinaryFile",
            LongAnnotation => "LongAnnotation",
            MapAnnotation => "MapAnnotation",
            TagAnnotation => "TagAnnotation",
            TermAnnotation => "TermAnnotation",
            TimestampAnnotation => "TimestampAnnotation",
            XmlAnnotation => "XMLAnnotation",
            AnnotationRef(_) => "AnnotationRef",
        }
    }

    /// Prefix of the flattened accessor names, e.g. `ChannelAnnotationRef`.
    pub fn accessor_name(self) -> String {
        match self {
            Entity::LightSourceSettings => "ChannelLightSourceSettings".to_string(),
            e if e.is_reference_list() => match e.parent() {
                Some(parent) => format!("{}{}", parent.accessor_name(), e.name()),
                None => e.name().to_string(),
            },
            e => e.name().to_string(),
        }
    }
}

/// Multi-path entities display their parent, e.g. `AnnotationRef(Channel)`.
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::AnnotationRef(_) | Entity::EmissionFilterRef(_) | Entity::ExcitationFilterRef(_) => {
                match self.parent() {
                    Some(parent) => write!(f, "{}({})", self.name(), parent.name()),
                    None => f.write_str(self.name()),
                }
            }
            _ => f.write_str(self.name()),
        }
    }
}
