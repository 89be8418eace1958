use std::fs;
use std::path::Path;

use extractor::extract::{check_paths, to_json};
use extractor::{extract_text, ExtractConfigBuilder};
use pretty_assertions::assert_eq;

/// One group, two entries: "Hi" at 0 and "Yo" at 3.
fn message_file() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&8u32.to_le_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes());
    for v in [3u16, 0, 1, 2] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes.extend_from_slice(b"Hi\0Yo\0");
    bytes
}

fn write_source(dir: &Path) -> std::path::PathBuf {
    let source = dir.join("MessageData.bin");
    fs::write(&source, message_file()).unwrap();
    source
}

#[test]
fn writes_compact_json() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let output = dir.path().join("out.json");

    let config = ExtractConfigBuilder::new(&source).with_output(&output).get();
    let table = extract_text(&config).unwrap();
    assert_eq!(table.entries().count(), 2);

    let json = fs::read_to_string(&output).unwrap();
    assert_eq!(json, to_json(&table, false).unwrap());
    assert!(!json.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Count"], 1);
    assert_eq!(value["Groups"][0]["Entries"][1]["Text"], "en:Yo");
    assert_eq!(value["Groups"][0]["Entries"][1]["Unknown"], 2);
    assert_eq!(value["Groups"][0]["Entries"][1]["MetaOriginalAddress"], 3);
}

#[test]
fn pretty_json_is_indented() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let output = dir.path().join("out.json");

    let config = ExtractConfigBuilder::new(&source)
        .with_output(&output)
        .with_pretty(true)
        .get();
    extract_text(&config).unwrap();

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.starts_with("{\n  \"Count\": 1,"));
}

#[test]
fn refuses_to_overwrite_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let output = dir.path().join("out.json");
    fs::write(&output, "keep me").unwrap();

    let config = ExtractConfigBuilder::new(&source).with_output(&output).get();
    let err = extract_text(&config).unwrap_err();
    assert!(err.to_string().contains("--overwrite"), "{err}");
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

    let config = ExtractConfigBuilder::new(&source)
        .with_output(&output)
        .with_overwrite(true)
        .get();
    extract_text(&config).unwrap();
    assert_ne!(fs::read_to_string(&output).unwrap(), "keep me");
}

#[test]
fn refuses_to_write_over_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let upper = dir.path().join("MESSAGEDATA.BIN");

    let config = ExtractConfigBuilder::new(&source)
        .with_output(&upper)
        .with_overwrite(true)
        .get();
    let err = check_paths(&config).unwrap_err();
    assert!(err.to_string().contains("are the same"), "{err}");
}

#[test]
fn broken_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("MessageData.bin");
    let mut bytes = message_file();
    bytes.truncate(10);
    fs::write(&source, bytes).unwrap();
    let output = dir.path().join("out.json");

    let config = ExtractConfigBuilder::new(&source).with_output(&output).get();
    assert!(extract_text(&config).is_err());
    assert!(!output.exists());
}

#[test]
fn missing_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExtractConfigBuilder::new(dir.path().join("nope.bin"))
        .with_output(dir.path().join("out.json"))
        .get();
    assert!(extract_text(&config).is_err());
}
