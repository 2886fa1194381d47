use log::{debug, info};

use crate::metadata::{MetadataError, MetadataRetrieve, MetadataStore};
use crate::model::{IndexPath, MetadataValue, MAX_INDEX};
use crate::schema::{Entity, Property};

/// Visit every populated slot of `src`, outer instances before inner ones.
///
/// Instances are discovered by walking the containment tree with
/// [`MetadataRetrieve::count`]; stores that report no counts yield only
/// document-level slots.
pub fn for_each_slot<R, F>(src: &R, mut visit: F) -> Result<(), MetadataError>
where
    R: MetadataRetrieve + ?Sized,
    F: FnMut(Property, IndexPath, MetadataValue) -> Result<(), MetadataError>,
{
    for entity in Entity::roots() {
        walk(src, entity, IndexPath::ROOT, &mut visit)?;
    }
    Ok(())
}

fn walk<R, F>(src: &R, entity: Entity, parent: IndexPath, visit: &mut F) -> Result<(), MetadataError>
where
    R: MetadataRetrieve + ?Sized,
    F: FnMut(Property, IndexPath, MetadataValue) -> Result<(), MetadataError>,
{
    if !entity.is_indexed() {
        if src.count(entity, &parent).unwrap_or(0) == 0 {
            return Ok(());
        }
        return visit_instance(src, entity, parent, visit);
    }

    let instances = src.count(entity, &parent).unwrap_or(0);
    if instances > MAX_INDEX + 1 {
        return Err(MetadataError::Unsupported(format!(
            "{instances} {entity} instances under [{parent}] exceed the index limit"
        )));
    }
    for index in 0..instances {
        let Some(path) = parent.child(index) else {
            return Err(MetadataError::Unsupported(format!(
                "{entity} nested deeper than an index path allows"
            )));
        };
        visit_instance(src, entity, path, visit)?;
    }
    Ok(())
}

fn visit_instance<R, F>(
    src: &R,
    entity: Entity,
    path: IndexPath,
    visit: &mut F,
) -> Result<(), MetadataError>
where
    R: MetadataRetrieve + ?Sized,
    F: FnMut(Property, IndexPath, MetadataValue) -> Result<(), MetadataError>,
{
    for property in Property::of(entity) {
        if let Some(value) = src.value(property, &path) {
            visit(property, path, value)?;
        }
    }
    for child in entity.children() {
        walk(src, child, path, visit)?;
    }
    Ok(())
}

/// Copy the document identifier and every populated property of `src` into
/// `dest`, returning the number of values written.
pub fn convert_metadata<R, S>(src: &R, dest: &mut S) -> Result<usize, MetadataError>
where
    R: MetadataRetrieve + ?Sized,
    S: MetadataStore + ?Sized,
{
    if let Some(uuid) = src.uuid() {
        dest.set_uuid(&uuid)?;
    }

    let mut copied = 0usize;
    for_each_slot(src, |property, path, value| {
        debug!("Copying {property}[{path}]");
        dest.set_value(property, path, value)?;
        copied += 1;
        Ok(())
    })?;

    info!("Converted {} metadata values", copied);
    Ok(copied)
}
