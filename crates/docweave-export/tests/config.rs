use std::io::Write;

use docweave_core::Rgb;
use docweave_export::{load_config, ExportError, GeneratorConfig};

#[test]
fn empty_json_gives_defaults() {
    let config = GeneratorConfig::from_json("{}").unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert!(config.display_output);
    assert!(config.default_filename.is_none());
}

#[test]
fn partial_json_overrides_fields() {
    let config = GeneratorConfig::from_json(
        r#"{
            "theme": { "font_family": "Georgia", "primary_color": [0, 51, 102] },
            "viz_settings": { "dpi": 150 },
            "output_dir": "reports",
            "default_filename": "summary.docx",
            "display_output": false
        }"#,
    )
    .unwrap();

    assert_eq!(config.theme.available_fonts()[0], "Georgia");
    assert_eq!(config.theme.primary_color(), Rgb(0, 51, 102));
    assert_eq!(config.viz_settings.dpi, 150);
    assert_eq!(config.viz_settings.figure_size, (10.0, 6.0));
    assert_eq!(config.default_filename.as_deref(), Some("summary.docx"));
    assert!(!config.display_output);
}

#[test]
fn load_config_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "default_subdirectory": "weekly" }}"#).unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.default_subdirectory.as_deref(), Some("weekly"));
}

#[test]
fn load_config_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ExportError::Config(_)));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = GeneratorConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ExportError::Serialization(_)));
}
