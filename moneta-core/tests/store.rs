use moneta_core::{read_document, write_document};
use serde_json::{Map, Value, json};

fn as_map(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(map) => map,
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn write_then_read_reproduces_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tax-rules-ie.json");
    let doc = as_map(json!({
        "country": "IE",
        "locale": {"currency": "EUR"},
        "economicData": {"inflation": {"cpi": 2.1, "year": 2024}},
    }));

    write_document(&path, &doc).unwrap();
    let loaded = read_document(&path).unwrap();
    assert_eq!(Value::Object(loaded), Value::Object(doc));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.ends_with("}\n"), "trailing newline expected");
}

#[test]
fn reading_a_non_object_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[1, 2, 3]\n").unwrap();
    assert!(read_document(&path).is_err());
}

#[test]
fn reading_a_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_document(&dir.path().join("absent.json")).is_err());
}
