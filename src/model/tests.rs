use super::*;

#[test]
fn test_index_path_navigation() {
    let path = IndexPath::new([0, 2, 1]);

    assert_eq!(path.len(), 3);
    assert_eq!(path.get(1), Some(2));
    assert_eq!(path.last(), Some(1));
    assert_eq!(path.parent(), Some(IndexPath::new([0, 2])));
    assert_eq!(path.prefix(1), IndexPath::new([0]));
    assert!(path.starts_with(&IndexPath::new([0, 2])));
    assert!(!path.starts_with(&IndexPath::new([1])));
    assert_eq!(IndexPath::ROOT.parent(), None);
}

#[test]
fn test_index_path_prefix_clears_dropped_indices() {
    let path = IndexPath::new([4, 5, 6]);
    assert_eq!(path.prefix(2), IndexPath::new([4, 5]));
    assert_eq!(path.prefix(0), IndexPath::ROOT);
    assert_eq!(path.prefix(9), path);
}

#[test]
fn test_index_path_child_respects_max_depth() {
    let full = IndexPath::new([1, 2, 3, 4]);
    assert_eq!(full.len(), MAX_DEPTH);
    assert_eq!(full.child(5), None);
    assert_eq!(IndexPath::ROOT.child(7), Some(IndexPath::new([7])));
    assert_eq!(IndexPath::from_slice(&[0, 0, 0, 0, 0]), None);
}

#[test]
fn test_index_path_text_form() {
    let path: IndexPath = "3:0:12".parse().unwrap();
    assert_eq!(path, IndexPath::new([3, 0, 12]));
    assert_eq!(path.to_string(), "3:0:12");

    let root: IndexPath = "".parse().unwrap();
    assert!(root.is_empty());
    assert_eq!(root.to_string(), "");

    assert!("1:x".parse::<IndexPath>().is_err());
}

#[test]
fn test_index_path_ordering_is_lexicographic() {
    let mut paths = vec![
        IndexPath::new([1]),
        IndexPath::new([0, 5]),
        IndexPath::new([0]),
        IndexPath::new([0, 1]),
    ];
    paths.sort();
    assert_eq!(
        paths,
        vec![
            IndexPath::new([0]),
            IndexPath::new([0, 1]),
            IndexPath::new([0, 5]),
            IndexPath::new([1]),
        ]
    );
}

#[test]
fn test_index_path_json() {
    let json = serde_json::to_string(&IndexPath::new([4, 2])).unwrap();
    assert_eq!(json, "[4,2]");
    let restored: IndexPath = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, IndexPath::new([4, 2]));
    assert!(serde_json::from_str::<IndexPath>("[1,2,3,4,5]").is_err());
}

#[test]
fn test_color_packing() {
    let color = Color::new(0xFF, 0x00, 0x80, 0x40);
    assert_eq!(color.to_rgba_i32(), i32::from_be_bytes([0xFF, 0x00, 0x80, 0x40]));
    assert_eq!(Color::from_rgba_i32(color.to_rgba_i32()), color);
    assert_eq!(Color::default().to_rgba_i32(), -1);
}

#[test]
fn test_color_text_forms() {
    assert_eq!(Color::rgb(255, 0, 0).to_string(), "#FF0000FF");
    assert_eq!("#00ff00".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
    assert_eq!("#0000FF80".parse::<Color>().unwrap(), Color::new(0, 0, 255, 0x80));
    assert_eq!("-1".parse::<Color>().unwrap(), Color::default());
    assert!("#12345".parse::<Color>().is_err());
}

#[test]
fn test_units_by_symbol() {
    assert_eq!(Unit::from_symbol("µm"), Some(Unit::Micrometer));
    assert_eq!(Unit::from_symbol("um"), Some(Unit::Micrometer));
    assert_eq!(Unit::from_symbol("°C"), Some(Unit::Celsius));
    assert_eq!(Unit::from_symbol("parsec"), None);
    assert_eq!(Unit::Nanometer.dimension(), Dimension::Length);
    assert_eq!(Unit::Millisecond.dimension(), Dimension::Time);

    for unit in Unit::ALL {
        assert_eq!(Unit::from_symbol(unit.symbol()), Some(*unit));
    }
}

#[test]
fn test_quantity_text_form() {
    let q: Quantity = "0.65 µm".parse().unwrap();
    assert_eq!(q, Quantity::micrometers(0.65));
    assert_eq!(q.to_string(), "0.65 µm");
    assert_eq!(q.dimension(), Dimension::Length);

    assert!("0.65".parse::<Quantity>().is_err());
    assert!("abc nm".parse::<Quantity>().is_err());
    assert!("1 furlong".parse::<Quantity>().is_err());
}

#[test]
fn test_value_display() {
    assert_eq!(MetadataValue::from("abc").to_string(), "abc");
    assert_eq!(MetadataValue::from(true).to_string(), "true");
    assert_eq!(MetadataValue::from(42i64).to_string(), "42");
    assert_eq!(MetadataValue::Bytes(vec![0x0a, 0xff]).to_string(), "0aff");
    assert_eq!(
        MetadataValue::from(vec![MapPair::new("a", "1"), MapPair::new("b", "2")]).to_string(),
        "a=1;b=2"
    );
    assert_eq!(
        MetadataValue::from(vec![MapPair::new("k=1", " a;b\\ ")]).to_string(),
        "k\\=1= a\\;b\\\\ "
    );
}

#[test]
fn test_value_conversions() {
    assert_eq!(
        String::from_value(MetadataValue::from("x")),
        Some("x".to_string())
    );
    assert_eq!(u32::from_value(MetadataValue::Integer(7)), Some(7));
    assert_eq!(u32::from_value(MetadataValue::Integer(-7)), None);
    assert_eq!(i32::from_value(MetadataValue::Integer(i64::MAX)), None);
    assert_eq!(bool::from_value(MetadataValue::Text("true".into())), None);
    assert_eq!(MetadataValue::from(u64::MAX), MetadataValue::Integer(i64::MAX));
}

#[test]
fn test_value_json_is_tagged() {
    let value = MetadataValue::Quantity(Quantity::nanometers(488.0));
    let json = serde_json::to_string(&value).unwrap();
    assert!(json.contains("\"type\":\"quantity\""));
    assert!(json.contains("\"unit\":\"nm\""));

    let restored: MetadataValue = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}
