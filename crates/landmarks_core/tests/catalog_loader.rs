use landmarks_core::{load_catalog_file, load_catalog_json, CatalogError};
use std::io::Write;

const TWO_LANDMARKS: &str = r#"[
  {"id": 2, "name": "Alps", "continent": "Europe", "description": "Range.",
   "image_refs": ["2", "2-thumb"], "latitude": 46.8, "longitude": 9.6},
  {"id": 1, "name": "Fuji", "continent": "Asia", "description": "Volcano.",
   "latitude": 35.3, "longitude": 138.7}
]"#;

#[test]
fn json_catalog_keeps_file_order() {
    let catalog = load_catalog_json(TWO_LANDMARKS).unwrap();
    let ids = catalog.iter().map(|l| l.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(catalog.get(2).unwrap().thumbnail_image_name(), Some("2-thumb"));
    assert!(catalog.get(1).unwrap().image_refs.is_empty());
}

#[test]
fn file_catalog_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_LANDMARKS.as_bytes()).unwrap();

    let catalog = load_catalog_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
      {"id": 5, "name": "A", "continent": "Asia", "description": "", "latitude": 0, "longitude": 0},
      {"id": 5, "name": "B", "continent": "Asia", "description": "", "latitude": 0, "longitude": 0}
    ]"#;
    let err = load_catalog_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(5)));
    assert!(err.to_string().contains("duplicate"));
}
