use crate::metadata::MetadataError;
use crate::schema::DimensionOrder;

/// Build an identifier from a type name and instance indices.
///
/// ```
/// assert_eq!(omemeta::tools::create_lsid("Detector", &[1, 0]), "Detector:1:0");
/// ```
pub fn create_lsid(kind: &str, indices: &[usize]) -> String {
    let mut lsid = String::from(kind);
    for index in indices {
        lsid.push(':');
        lsid.push_str(&index.to_string());
    }
    lsid
}

/// Repair a free-form dimension order string.
///
/// The result always starts with `XY`. Of the remaining axes the last
/// occurrence in `order` wins; axes that never occur are appended in
/// `C`, `Z`, `T` order.
pub fn sane_dimension_order(order: &str) -> DimensionOrder {
    let mut axes: Vec<char> = Vec::with_capacity(3);
    for c in order.chars().map(|c| c.to_ascii_uppercase()) {
        if matches!(c, 'Z' | 'C' | 'T') {
            axes.retain(|&a| a != c);
            axes.push(c);
        }
    }
    for axis in ['C', 'Z', 'T'] {
        if !axes.contains(&axis) {
            axes.push(axis);
        }
    }
    let literal: String = ['X', 'Y'].into_iter().chain(axes).collect();
    literal.parse().unwrap_or(DimensionOrder::Xyczt)
}

/// Z, C and T coordinates of plane `plane` under the given rasterization.
///
/// The first axis after `XY` varies fastest.
pub fn zct_coords(
    order: DimensionOrder,
    size_z: usize,
    size_c: usize,
    size_t: usize,
    plane: usize,
) -> Result<[usize; 3], MetadataError> {
    let planes = size_z * size_c * size_t;
    if plane >= planes {
        return Err(MetadataError::PlaneOutOfRange { plane, planes });
    }

    let axes: Vec<char> = order.as_str().chars().skip(2).collect();
    let size_of = |axis: char| match axis {
        'Z' => size_z,
        'C' => size_c,
        _ => size_t,
    };

    let mut remainder = plane;
    let mut coords = [0usize; 3];
    for axis in axes {
        let size = size_of(axis);
        let slot = match axis {
            'Z' => 0,
            'C' => 1,
            _ => 2,
        };
        coords[slot] = remainder % size;
        remainder /= size;
    }
    Ok(coords)
}
