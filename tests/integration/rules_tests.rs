use packwise::core::{select_config, BuildMode, LoaderUse, PluginSpec, RuleSet};

fn chain(mode: BuildMode, path: &str) -> Vec<String> {
    let config = select_config(mode);
    let compiled = RuleSet::compile(config.rules()).unwrap();
    compiled
        .loaders_for(path)
        .into_iter()
        .map(|loader| loader.loader().to_string())
        .collect()
}

#[test]
fn test_scss_runs_sass_then_css_then_extract() {
    assert_eq!(
        chain(BuildMode::Production, "styles/app.scss"),
        vec!["sass-loader", "css-loader", PluginSpec::CSS_EXTRACT_LOADER]
    );
    assert_eq!(chain(BuildMode::Production, "styles/legacy.SASS").len(), 3);
}

#[test]
fn test_plain_css() {
    assert_eq!(
        chain(BuildMode::Development, "styles/main.css"),
        vec!["css-loader", PluginSpec::CSS_EXTRACT_LOADER]
    );
}

#[test]
fn test_svg_matches_image_and_font_rules() {
    assert_eq!(
        chain(BuildMode::Production, "icons/logo.svg"),
        vec!["file-loader", "file-loader"]
    );
    assert_eq!(chain(BuildMode::Production, "fonts/body.woff2"), vec!["file-loader"]);
}

#[test]
fn test_scripts_get_source_maps_before_babel() {
    assert_eq!(
        chain(BuildMode::Development, "js/index.js"),
        vec!["source-map-loader", "babel-loader"]
    );
    assert_eq!(chain(BuildMode::Development, "js/module.mjs"), vec!["babel-loader"]);
}

#[test]
fn test_node_modules_skip_babel() {
    assert_eq!(
        chain(BuildMode::Production, "node_modules/lodash/index.js"),
        vec!["source-map-loader"]
    );
}

#[test]
fn test_unmatched_path() {
    assert!(chain(BuildMode::Production, "README.md").is_empty());
}

#[test]
fn test_babel_options() {
    let config = select_config(BuildMode::Production);
    let compiled = RuleSet::compile(config.rules()).unwrap();
    let babel = compiled
        .loaders_for("js/index.js")
        .into_iter()
        .find(|loader| loader.loader() == "babel-loader")
        .and_then(LoaderUse::options)
        .cloned()
        .unwrap();

    assert_eq!(babel["presets"][0], "@babel/preset-env");
    assert_eq!(babel["plugins"][0], "@babel/plugin-proposal-class-properties");
}
