//! Flat tab-separated export and import.
//!
//! One row per populated slot with `property`, `path` and `value` columns,
//! in the order [`tools::for_each_slot`](crate::tools::for_each_slot) visits
//! them. Paths use the colon form of [`IndexPath`]'s `Display` and values the
//! text form [`ValueType::parse`](crate::schema::ValueType::parse) reads back.
//! The document UUID, when present, is the first row under the pseudo
//! property `UUID`.

use std::io::{Read, Write};

use log::{debug, info};

use crate::metadata::{MetadataError, MetadataRetrieve, MetadataStore};
use crate::model::IndexPath;
use crate::schema::Property;
use crate::tools::for_each_slot;

/// Column headers of the export
pub const TSV_HEADER: [&str; 3] = ["property", "path", "value"];

const UUID_ROW: &str = "UUID";

/// Write every populated slot of `src` as TSV, returning the number of rows.
pub fn write_tsv<R, W>(src: &R, writer: W) -> Result<usize, MetadataError>
where
    R: MetadataRetrieve + ?Sized,
    W: Write,
{
    let mut tsv = csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    tsv.write_record(TSV_HEADER)?;

    let mut rows = 0usize;
    if let Some(uuid) = src.uuid() {
        tsv.write_record([UUID_ROW, "", uuid.as_str()])?;
        rows += 1;
    }

    for_each_slot(src, |property, path, value| {
        let (path, value) = (path.to_string(), value.to_string());
        tsv.write_record([property.name(), path.as_str(), value.as_str()])?;
        rows += 1;
        Ok(())
    })?;
    tsv.flush()?;

    info!("Exported {} rows", rows);
    Ok(rows)
}

/// Load rows written by [`write_tsv`] into `dest`, returning the number of
/// rows applied.
pub fn read_tsv<S, R>(reader: R, dest: &mut S) -> Result<usize, MetadataError>
where
    S: MetadataStore + ?Sized,
    R: Read,
{
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let mut rows = 0usize;
    for record in tsv.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or_default();
        let (name, path, text) = (field(0), field(1), field(2));

        if name == UUID_ROW {
            dest.set_uuid(text)?;
        } else {
            let property: Property = name.parse().map_err(MetadataError::NotFound)?;
            let path: IndexPath = path.parse().map_err(|reason| MetadataError::Parse {
                property,
                input: path.to_string(),
                reason,
            })?;
            let value = property
                .value_type()
                .parse(text)
                .map_err(|reason| MetadataError::Parse {
                    property,
                    input: text.to_string(),
                    reason,
                })?;
            debug!("Importing {property}[{path}]");
            dest.set_value(property, path, value)?;
        }
        rows += 1;
    }

    info!("Imported {} rows", rows);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{DummyMetadata, OmeMetadata, RetrieveAccessors, StoreAccessors};
    use crate::model::{Color, MapPair, Quantity};
    use crate::schema::PixelType;

    fn sample() -> OmeMetadata {
        let mut meta = OmeMetadata::new();
        meta.set_uuid("urn:uuid:a3c9f2d4-1e7b-4b8a-9f3e-6d2c1b0a9e87").unwrap();
        meta.set_image_id("Image:0", 0).unwrap();
        meta.set_image_name("two\twords", 0).unwrap();
        meta.set_pixels_type(PixelType::Uint16, 0).unwrap();
        meta.set_pixels_physical_size_x(Quantity::micrometers(0.65), 0).unwrap();
        meta.set_channel_color(Color::rgb(255, 0, 0), 0, 1).unwrap();
        meta.set_map_annotation_value(vec![MapPair::new("stain", "DAPI")], 0).unwrap();
        meta
    }

    #[test]
    fn test_write_tsv_rows() {
        let mut out = Vec::new();
        let rows = write_tsv(&sample(), &mut out).unwrap();
        assert_eq!(rows, 7);

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("property\tpath\tvalue"));
        assert_eq!(
            lines.next(),
            Some("UUID\t\turn:uuid:a3c9f2d4-1e7b-4b8a-9f3e-6d2c1b0a9e87")
        );
        assert!(text.contains("ImageID\t0\tImage:0\n"));
        assert!(text.contains("PixelsType\t0\tuint16\n"));
        assert!(text.contains("MapAnnotationValue\t0\tstain=DAPI\n"));
    }

    #[test]
    fn test_tsv_round_trip() {
        let original = sample();
        let mut out = Vec::new();
        write_tsv(&original, &mut out).unwrap();

        let mut restored = OmeMetadata::new();
        let rows = read_tsv(out.as_slice(), &mut restored).unwrap();
        assert_eq!(rows, 7);
        assert_eq!(restored.image_name(0).as_deref(), Some("two\twords"));
        assert_eq!(restored, original);
    }

    #[test]
    fn test_map_entries_with_separators_round_trip() {
        let pairs = vec![MapPair::new("notes", "a;b"), MapPair::new("k=1", " v ")];
        let mut original = OmeMetadata::new();
        original.set_map_annotation_value(pairs.clone(), 0).unwrap();

        let mut out = Vec::new();
        write_tsv(&original, &mut out).unwrap();
        let mut restored = OmeMetadata::new();
        read_tsv(out.as_slice(), &mut restored).unwrap();
        assert_eq!(restored.map_annotation_value(0), Some(pairs));
    }

    #[test]
    fn test_null_object_exports_header_only() {
        let mut out = Vec::new();
        assert_eq!(write_tsv(&DummyMetadata, &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "property\tpath\tvalue\n");
    }

    #[test]
    fn test_read_tsv_errors() {
        let mut meta = OmeMetadata::new();

        let unknown = "property\tpath\tvalue\nImageColour\t0\tred\n";
        assert!(matches!(
            read_tsv(unknown.as_bytes(), &mut meta),
            Err(MetadataError::NotFound(_))
        ));

        let bad_value = "property\tpath\tvalue\nPixelsSizeX\t0\twide\n";
        assert!(matches!(
            read_tsv(bad_value.as_bytes(), &mut meta),
            Err(MetadataError::Parse { property: Property::PixelsSizeX, .. })
        ));

        let bad_path = "property\tpath\tvalue\nPixelsSizeX\t0:x\t4\n";
        assert!(matches!(
            read_tsv(bad_path.as_bytes(), &mut meta),
            Err(MetadataError::Parse { .. })
        ));

        let wrong_arity = "property\tpath\tvalue\nPixelsSizeX\t0:1\t4\n";
        assert!(matches!(
            read_tsv(wrong_arity.as_bytes(), &mut meta),
            Err(MetadataError::IndexArity { .. })
        ));
    }
}
