use packwise::core::{
    content_hash, select_config, select_config_with, ArtifactKind, ArtifactLayout, BuildMode,
    ProjectSettings,
};
use std::path::PathBuf;

#[test]
fn test_output_directory_contents() {
    let layout = ArtifactLayout::of(&select_config(BuildMode::Production));
    let kinds: Vec<ArtifactKind> = layout.artifacts.iter().map(|a| a.kind).collect();

    assert_eq!(
        kinds,
        vec![
            ArtifactKind::Script,
            ArtifactKind::Stylesheet,
            ArtifactKind::StaticAsset,
            ArtifactKind::HtmlDocument
        ]
    );
}

#[test]
fn test_production_names_are_content_addressed() {
    let settings = ProjectSettings {
        hash_length: 8,
        ..ProjectSettings::with_root("/site")
    };
    let layout = ArtifactLayout::of(&select_config_with(BuildMode::Production, &settings));
    let script = layout.of_kind(ArtifactKind::Script).next().unwrap();

    let first = layout.resolve(script, b"console.log('a')").unwrap();
    let second = layout.resolve(script, b"console.log('b')").unwrap();
    let repeat = layout.resolve(script, b"console.log('a')").unwrap();

    assert_ne!(first, second);
    assert_eq!(first, repeat);
    assert_eq!(
        first,
        PathBuf::from("/site/dist").join(format!(
            "main.{}.js",
            content_hash(b"console.log('a')", 8).unwrap()
        ))
    );
}

#[test]
fn test_development_names_are_stable() {
    let layout = ArtifactLayout::of(&select_config(BuildMode::Development));
    let script = layout.of_kind(ArtifactKind::Script).next().unwrap();

    assert_eq!(
        layout.resolve(script, b"one").unwrap(),
        layout.resolve(script, b"two").unwrap()
    );
}

#[test]
fn test_favicon_lands_at_output_root() {
    let layout = ArtifactLayout::of(&select_config(BuildMode::Production));
    let favicon = layout.of_kind(ArtifactKind::StaticAsset).next().unwrap();

    assert_eq!(
        layout.resolve(favicon, b"ico").unwrap(),
        PathBuf::from("./dist/cat.ico")
    );
}
