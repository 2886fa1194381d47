use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;

use crate::metadata::MetadataRetrieve;
use crate::model::{IndexPath, MetadataValue};
use crate::schema::Property;
use crate::tools::for_each_slot;

use super::{Stage, ValidationReport};

/// Step 4: identifiers are unique, references resolve, map keys are named
pub(crate) fn check_references<R: MetadataRetrieve + ?Sized>(
    meta: &R,
    report: &mut ValidationReport,
) -> Result<()> {
    let mut ids: BTreeMap<String, (Property, IndexPath)> = BTreeMap::new();
    let mut duplicates = Vec::new();
    let mut references = Vec::new();
    let mut empty_keys = Vec::new();

    for_each_slot(meta, |property, path, value| {
        match value {
            MetadataValue::Text(text) if property.is_id() => {
                if let Some((first, first_path)) = ids.get(&text) {
                    duplicates.push(format!(
                        "'{}' used by {}[{}] and {}[{}]",
                        text, first, first_path, property, path
                    ));
                } else {
                    ids.insert(text, (property, path));
                }
            }
            MetadataValue::Text(text) if property.is_reference() => {
                references.push((property, path, text));
            }
            MetadataValue::MapPairs(pairs) => {
                let blank = pairs.iter().filter(|p| p.name.trim().is_empty()).count();
                if blank > 0 {
                    empty_keys.push(format!("{}[{}] has {} unnamed entries", property, path, blank));
                }
            }
            _ => {}
        }
        Ok(())
    })?;

    report.record(
        Stage::References,
        format!("Identifiers unique ({})", ids.len()),
        duplicates,
    );

    let known: BTreeSet<&str> = ids.keys().map(String::as_str).collect();
    let dangling: Vec<String> = references
        .iter()
        .filter(|(_, _, target)| !known.contains(target.as_str()))
        .map(|(property, path, target)| format!("{}[{}] -> '{}'", property, path, target))
        .collect();
    report.record(
        Stage::References,
        format!("References resolve ({})", references.len()),
        dangling,
    );

    report.record(Stage::References, "Map keys named", empty_keys);
    Ok(())
}
