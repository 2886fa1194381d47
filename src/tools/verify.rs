use log::{debug, info, warn};

use crate::metadata::{Metadata, MetadataError, MetadataRetrieve, RetrieveAccessors};
use crate::model::{IndexPath, MetadataValue};
use crate::schema::{
    Correction, DetectorType, Entity, ExperimentType, Immersion, LaserMedium, LaserType, Property,
};

use super::{create_lsid, zct_coords};

const MINIMUM_PIXELS: &[Property] = &[
    Property::ImageId,
    Property::PixelsId,
    Property::PixelsBigEndian,
    Property::PixelsDimensionOrder,
    Property::PixelsType,
    Property::PixelsSizeC,
    Property::PixelsSizeT,
    Property::PixelsSizeX,
    Property::PixelsSizeY,
    Property::PixelsSizeZ,
];

/// Check that `image` carries everything needed to interpret its pixels.
pub fn verify_minimum_populated<R>(src: &R, image: usize) -> Result<(), MetadataError>
where
    R: MetadataRetrieve + ?Sized,
{
    let path = IndexPath::new([image]);
    for &property in MINIMUM_PIXELS {
        if src.value(property, &path).is_none() {
            return Err(MetadataError::MissingField {
                field: property.name(),
                image,
            });
        }
    }
    for channel in 0..src.channel_count(image).unwrap_or(0) {
        if src.channel_id(image, channel).is_none() {
            return Err(MetadataError::MissingField {
                field: Property::ChannelId.name(),
                image,
            });
        }
    }
    Ok(())
}

/// Fills in required values that are absent, counting what it wrote.
struct Defaults<'a, M: ?Sized> {
    meta: &'a mut M,
    written: usize,
}

impl<M: Metadata + ?Sized> Defaults<'_, M> {
    fn fill(
        &mut self,
        property: Property,
        path: IndexPath,
        value: impl Into<MetadataValue>,
    ) -> Result<(), MetadataError> {
        if self.meta.value(property, &path).is_none() {
            let value = value.into();
            debug!("Defaulting {property}[{path}] to {value}");
            self.meta.set_value(property, path, value)?;
            self.written += 1;
        }
        Ok(())
    }

    fn fill_id(&mut self, property: Property, kind: &str, path: IndexPath) -> Result<(), MetadataError> {
        self.fill(property, path, create_lsid(kind, path.as_slice()))
    }

    fn count(&self, entity: Entity, parent: IndexPath) -> usize {
        self.meta.count(entity, &parent).unwrap_or(0)
    }

    fn has(&self, property: Property, path: IndexPath) -> bool {
        self.meta.value(property, &path).is_some()
    }
}

fn light_source_id(kind: &str) -> Option<Property> {
    match kind {
        "Laser" => Some(Property::LaserId),
        "Arc" => Some(Property::ArcId),
        "LightEmittingDiode" => Some(Property::LightEmittingDiodeId),
        _ => None,
    }
}

fn shape_id(kind: &str) -> Option<Property> {
    match kind {
        "Rectangle" => Some(Property::RectangleId),
        "Ellipse" => Some(Property::EllipseId),
        "Point" => Some(Property::PointId),
        "Line" => Some(Property::LineId),
        "Label" => Some(Property::LabelId),
        "Polygon" => Some(Property::PolygonId),
        _ => None,
    }
}

/// Insert the defaults a schema-valid document needs: identifiers for every
/// populated instance, `Other` for required enumerations, placeholder names
/// and plane coordinates. Returns the number of values written.
pub fn ensure_valid<M>(meta: &mut M) -> Result<usize, MetadataError>
where
    M: Metadata + ?Sized,
{
    let mut defaults = Defaults { meta, written: 0 };
    let root = IndexPath::ROOT;

    for e in 0..defaults.count(Entity::Experimenter, root) {
        let path = IndexPath::new([e]);
        defaults.fill_id(Property::ExperimenterId, "Experimenter", path)?;
        let named = [
            Property::ExperimenterFirstName,
            Property::ExperimenterLastName,
            Property::ExperimenterEmail,
            Property::ExperimenterInstitution,
            Property::ExperimenterUserName,
        ]
        .into_iter()
        .any(|p| defaults.has(p, path));
        if !named {
            defaults.fill(Property::ExperimenterInstitution, path, "Unknown")?;
        }
    }

    for g in 0..defaults.count(Entity::ExperimenterGroup, root) {
        defaults.fill_id(Property::ExperimenterGroupId, "ExperimenterGroup", IndexPath::new([g]))?;
    }

    for i in 0..defaults.count(Entity::Instrument, root) {
        let instrument = IndexPath::new([i]);
        defaults.fill_id(Property::InstrumentId, "Instrument", instrument)?;

        for o in 0..defaults.count(Entity::Objective, instrument) {
            let path = IndexPath::new([i, o]);
            defaults.fill_id(Property::ObjectiveId, "Objective", path)?;
            defaults.fill(Property::ObjectiveCorrection, path, Correction::Other)?;
            defaults.fill(Property::ObjectiveImmersion, path, Immersion::Other)?;
        }
        for f in 0..defaults.count(Entity::Filter, instrument) {
            defaults.fill_id(Property::FilterId, "Filter", IndexPath::new([i, f]))?;
        }
        for f in 0..defaults.count(Entity::FilterSet, instrument) {
            defaults.fill_id(Property::FilterSetId, "FilterSet", IndexPath::new([i, f]))?;
        }
        for d in 0..defaults.count(Entity::Detector, instrument) {
            let path = IndexPath::new([i, d]);
            defaults.fill_id(Property::DetectorId, "Detector", path)?;
            defaults.fill(Property::DetectorType, path, DetectorType::Other)?;
        }
        for d in 0..defaults.count(Entity::Dichroic, instrument) {
            defaults.fill_id(Property::DichroicId, "Dichroic", IndexPath::new([i, d]))?;
        }
        for l in 0..defaults.count(Entity::LightSource, instrument) {
            let path = IndexPath::new([i, l]);
            let kind = defaults.meta.kind(Entity::LightSource, &path);
            let Some(id) = kind.and_then(light_source_id) else {
                continue;
            };
            defaults.fill_id(id, "LightSource", path)?;
            if kind == Some("Laser") {
                defaults.fill(Property::LaserType, path, LaserType::Other)?;
                defaults.fill(Property::LaserLaserMedium, path, LaserMedium::Other)?;
            }
        }
    }

    for p in 0..defaults.count(Entity::Project, root) {
        defaults.fill_id(Property::ProjectId, "Project", IndexPath::new([p]))?;
    }
    for d in 0..defaults.count(Entity::Dataset, root) {
        defaults.fill_id(Property::DatasetId, "Dataset", IndexPath::new([d]))?;
    }
    for e in 0..defaults.count(Entity::Experiment, root) {
        let path = IndexPath::new([e]);
        defaults.fill_id(Property::ExperimentId, "Experiment", path)?;
        defaults.fill(Property::ExperimentType, path, ExperimentType::Other)?;
    }

    for image in 0..defaults.count(Entity::Image, root) {
        ensure_valid_image(&mut defaults, image)?;
    }

    for r in 0..defaults.count(Entity::Roi, root) {
        let roi = IndexPath::new([r]);
        defaults.fill_id(Property::RoiId, "ROI", roi)?;
        for s in 0..defaults.count(Entity::Shape, roi) {
            let path = IndexPath::new([r, s]);
            let Some(id) = defaults.meta.kind(Entity::Shape, &path).and_then(shape_id) else {
                continue;
            };
            defaults.fill_id(id, "Shape", path)?;
        }
    }

    info!("Inserted {} default value(s)", defaults.written);
    Ok(defaults.written)
}

fn ensure_valid_image<M>(defaults: &mut Defaults<'_, M>, image: usize) -> Result<(), MetadataError>
where
    M: Metadata + ?Sized,
{
    let path = IndexPath::new([image]);
    defaults.fill_id(Property::ImageId, "Image", path)?;
    defaults.fill_id(Property::PixelsId, "Pixels", path)?;

    for c in 0..defaults.count(Entity::Channel, path) {
        defaults.fill_id(Property::ChannelId, "Channel", IndexPath::new([image, c]))?;
    }

    let positioned = [Property::StageLabelX, Property::StageLabelY, Property::StageLabelZ]
        .into_iter()
        .any(|p| defaults.has(p, path));
    if positioned {
        defaults.fill(Property::StageLabelName, path, "unknown")?;
    }

    let planes = defaults.count(Entity::Plane, path);
    if planes == 0 {
        return Ok(());
    }
    let meta = &*defaults.meta;
    let geometry = (
        meta.pixels_dimension_order(image),
        meta.pixels_size_z(image),
        meta.pixels_size_c(image),
        meta.pixels_size_t(image),
    );
    let samples = meta.channel_samples_per_pixel(image, 0).unwrap_or(1).max(1);

    for plane in 0..planes {
        let plane_path = IndexPath::new([image, plane]);
        let complete = [Property::PlaneTheZ, Property::PlaneTheC, Property::PlaneTheT]
            .into_iter()
            .all(|p| defaults.has(p, plane_path));
        if complete {
            continue;
        }

        let (Some(order), Some(size_z), Some(size_c), Some(size_t)) = geometry else {
            warn!("Image {image} lacks pixel dimensions; plane {plane} left without Z/C/T");
            continue;
        };
        let dims = [size_z, size_c / samples, size_t].map(|n| usize::try_from(n).unwrap_or(0));
        match zct_coords(order, dims[0], dims[1], dims[2], plane) {
            Ok([z, c, t]) => {
                // Coordinates are below sizes that fit an i32.
                defaults.fill(Property::PlaneTheZ, plane_path, z as i32)?;
                defaults.fill(Property::PlaneTheC, plane_path, c as i32)?;
                defaults.fill(Property::PlaneTheT, plane_path, t as i32)?;
            }
            Err(e) => warn!("Image {image}: {e}"),
        }
    }
    Ok(())
}
