use packwise::core::{select_config_with, BuildMode};
use packwise::utils::{ConfigLoader, PackwiseError, SettingsOverrides, CONFIG_FILE_NAME};
use std::path::PathBuf;

#[test]
fn test_settings_file_feeds_selection() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        r#"{
            "context": "src",
            "entryName": "app",
            "entry": ["./js/app.js"],
            "favicon": "static/icon.ico",
            "port": 5173
        }"#,
    )
    .unwrap();

    let settings = ConfigLoader::resolve(
        temp_dir.path(),
        SettingsOverrides {
            outdir: Some(PathBuf::from("build")),
            port: None,
        },
    )
    .unwrap();
    let config = select_config_with(BuildMode::Development, &settings);

    assert_eq!(config.context, temp_dir.path().join("src"));
    assert_eq!(config.output.path, temp_dir.path().join("build"));
    assert_eq!(config.dev_server.port, 5173);
    assert_eq!(config.entry.keys().collect::<Vec<_>>(), vec!["app"]);

    let json: serde_json::Value = serde_json::from_str(&config.to_json(false).unwrap()).unwrap();
    let from = json["plugins"][2]["options"]["patterns"][0]["from"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(from.ends_with("icon.ico"));
}

#[test]
fn test_cli_port_beats_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"port": 4000}"#).unwrap();

    let settings = ConfigLoader::resolve(
        temp_dir.path(),
        SettingsOverrides {
            outdir: None,
            port: Some(8081),
        },
    )
    .unwrap();

    assert_eq!(settings.port, 8081);
}

#[test]
fn test_invalid_hash_length_is_a_config_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"hashLength": 0}"#).unwrap();

    let err = ConfigLoader::resolve(temp_dir.path(), SettingsOverrides::default()).unwrap_err();
    assert!(matches!(err, PackwiseError::Config(_)));
}
