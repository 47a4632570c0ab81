use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;
use ust_document::LineEnding;
use ust_encoding::{SHIFT_JIS, UTF_8};
use ust_fs::{ConfigStore, Error, UstConfig};

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

#[test]
fn test_store_loads_by_extension() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new();
    let expected = TestConfig {
        name: "test".into(),
        count: 42,
    };

    let toml_path = temp.path().join("config.toml");
    fs::write(&toml_path, "name = \"test\"\ncount = 42").unwrap();
    assert_eq!(store.load::<TestConfig>(&toml_path).unwrap(), expected);

    let json_path = temp.path().join("config.json");
    fs::write(&json_path, r#"{"name": "test", "count": 42}"#).unwrap();
    assert_eq!(store.load::<TestConfig>(&json_path).unwrap(), expected);

    let yaml_path = temp.path().join("config.yml");
    fs::write(&yaml_path, "name: test\ncount: 42").unwrap();
    assert_eq!(store.load::<TestConfig>(&yaml_path).unwrap(), expected);
}

#[test]
fn test_store_rejects_unknown_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.ini");
    fs::write(&path, "name=test").unwrap();

    let result = ConfigStore::new().load::<TestConfig>(&path);
    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
}

#[test]
fn test_store_reports_syntax_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "name = ").unwrap();

    let result = ConfigStore::new().load::<TestConfig>(&path);
    assert!(matches!(result, Err(Error::ConfigParse { format, .. }) if format == "TOML"));
}

#[test]
fn test_empty_config_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ust.toml");
    fs::write(&path, "").unwrap();

    let config = UstConfig::load(&path).unwrap();
    assert_eq!(config, UstConfig::default());

    let options = config.save_options().unwrap();
    assert_eq!(options.encoding, SHIFT_JIS);
    assert_eq!(options.line_ending, LineEnding::CrLf);
    assert!(!options.normalize);
    assert_eq!(config.normalizer().threshold(), 0.5);
    assert_eq!(config.read_encoding().unwrap(), None);
}

#[test]
fn test_partial_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ust.toml");
    fs::write(
        &path,
        "[read]\nthreshold = 0.8\n\n[write]\nencoding = \"utf-8\"\nline_ending = \"lf\"\n",
    )
    .unwrap();

    let config = UstConfig::load(&path).unwrap();
    assert_eq!(config.normalizer().threshold(), 0.8);

    let options = config.save_options().unwrap();
    assert_eq!(options.encoding, UTF_8);
    assert_eq!(options.line_ending, LineEnding::Lf);
}

#[test]
fn test_unknown_encoding_label_is_invalid() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ust.json");
    fs::write(&path, r#"{"write": {"encoding": "klingon"}}"#).unwrap();

    assert!(matches!(
        UstConfig::load(&path),
        Err(Error::ConfigInvalid { .. })
    ));
}

#[test]
fn test_threshold_out_of_range_is_invalid() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ust.yaml");
    fs::write(&path, "read:\n  threshold: 1.5\n").unwrap();

    match UstConfig::load(&path) {
        Err(Error::ConfigInvalid { message, .. }) => assert!(message.contains("threshold")),
        other => panic!("expected invalid config, got {other:?}"),
    }
}
