use packwise::core::{select_config, select_config_with, BuildMode, Minimizer, ProjectSettings};
use packwise::utils::ModeResolution;
use std::path::PathBuf;

#[test]
fn test_development_properties() {
    let config = select_config(BuildMode::Development);

    assert!(!config.script_template().is_content_addressed());
    assert!(!config.stylesheet_template().unwrap().is_content_addressed());
    assert!(config.emits_source_maps());
    assert!(config.minimizers().is_empty());
    assert!(!config.html_collapses_whitespace());
}

#[test]
fn test_production_properties() {
    let config = select_config(BuildMode::Production);

    assert!(config.script_template().as_str().contains("[contenthash]"));
    assert!(config.stylesheet_template().unwrap().as_str().contains("[contenthash]"));
    assert!(!config.emits_source_maps());
    assert_eq!(config.minimizers(), &[Minimizer::Css, Minimizer::Script]);
    assert!(config.html_collapses_whitespace());
}

#[test]
fn test_selection_is_idempotent() {
    for mode in [BuildMode::Development, BuildMode::Production] {
        assert_eq!(select_config(mode), select_config(mode));
        assert_eq!(
            select_config(mode).to_json(true).unwrap(),
            select_config(mode).to_json(true).unwrap()
        );
    }
}

#[test]
fn test_environment_value_resolution() {
    assert_eq!(
        ModeResolution::from_value(Some("development")).mode,
        BuildMode::Development
    );
    assert_eq!(ModeResolution::from_value(None).mode, BuildMode::Production);
    assert_eq!(
        ModeResolution::from_value(Some("prod")).mode,
        BuildMode::Production
    );
}

#[test]
fn test_settings_never_change_mode_attributes() {
    let settings = ProjectSettings {
        outdir: PathBuf::from("public"),
        port: 9000,
        hash_length: 8,
        ..ProjectSettings::with_root("/site")
    };

    for mode in [BuildMode::Development, BuildMode::Production] {
        let default = select_config(mode);
        let custom = select_config_with(mode, &settings);

        assert_eq!(default.devtool, custom.devtool);
        assert_eq!(default.output.filename, custom.output.filename);
        assert_eq!(default.optimization, custom.optimization);
        assert_eq!(default.html_collapses_whitespace(), custom.html_collapses_whitespace());
        assert_eq!(default.module, custom.module);
    }
}

#[test]
fn test_emitted_json_shape() {
    let value: serde_json::Value =
        serde_json::from_str(&select_config(BuildMode::Development).to_json(false).unwrap()).unwrap();

    assert_eq!(value["mode"], "development");
    assert_eq!(value["devtool"], "source-map");
    assert_eq!(value["entry"]["main"][0], "@babel/polyfill");
    assert_eq!(value["output"]["filename"], "[name].js");
    assert_eq!(value["devServer"]["port"], 3000);
    assert_eq!(value["plugins"][0]["options"]["minify"]["collapseWhitespace"], false);
    assert_eq!(value["module"]["rules"].as_array().unwrap().len(), 6);
    assert!(value["optimization"].get("minimizer").is_none());
}
