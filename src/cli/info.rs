use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use omemeta::model::IndexPath;
use omemeta::prelude::*;

/// Load a JSON snapshot from disk
pub(crate) fn load_snapshot(file: &Path) -> Result<OmeMetadata> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    OmeMetadata::from_json(&json).with_context(|| format!("Failed to parse {}", file.display()))
}

/// Total instances of every entity, summed over all parents
fn census(meta: &OmeMetadata) -> BTreeMap<&'static str, usize> {
    fn visit(meta: &OmeMetadata, entity: Entity, parent: IndexPath, totals: &mut BTreeMap<&'static str, usize>) {
        let n = meta.count(entity, &parent).unwrap_or(0);
        if n == 0 {
            return;
        }
        *totals.entry(entity.name()).or_default() += n;

        let paths: Vec<IndexPath> = if entity.is_indexed() {
            (0..n).filter_map(|i| parent.child(i)).collect()
        } else {
            vec![parent]
        };
        for path in paths {
            for child in entity.children() {
                visit(meta, child, path, totals);
            }
        }
    }

    let mut totals = BTreeMap::new();
    for entity in Entity::roots() {
        visit(meta, entity, IndexPath::ROOT, &mut totals);
    }
    totals
}

/// Display information about a metadata snapshot
pub fn run(file: PathBuf) -> Result<()> {
    let meta = load_snapshot(&file)?;

    println!("OME Metadata Information");
    println!("========================");
    println!("File: {}", file.display());
    println!("UUID: {}", meta.uuid().unwrap_or_else(|| "<none>".to_string()));
    println!("Values: {}", meta.metadata_root().len());
    println!();

    println!("Entities:");
    for (name, total) in census(&meta) {
        println!("  {:<28} {}", name, total);
    }
    println!();

    let images = meta.image_count().unwrap_or(0);
    println!("Images:");
    for image in 0..images {
        let size = |v: Option<i32>| v.map_or_else(|| "?".to_string(), |n| n.to_string());
        println!(
            "  {:3}. {} ({} x {} x {} x {} x {}, {}, {})",
            image,
            meta.image_name(image).unwrap_or_else(|| "<unnamed>".to_string()),
            size(meta.pixels_size_x(image)),
            size(meta.pixels_size_y(image)),
            size(meta.pixels_size_z(image)),
            size(meta.pixels_size_c(image)),
            size(meta.pixels_size_t(image)),
            meta.pixels_type(image).map_or("?", PixelType::as_str),
            meta.pixels_dimension_order(image).map_or("?", DimensionOrder::as_str),
        );
        for channel in 0..meta.channel_count(image).unwrap_or(0) {
            let name = meta.channel_name(image, channel).unwrap_or_default();
            let color = meta
                .channel_color(image, channel)
                .map(|c| c.to_string())
                .unwrap_or_default();
            println!("       channel {}: {} {}", channel, name, color);
        }
    }

    Ok(())
}
