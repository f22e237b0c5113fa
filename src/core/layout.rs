use crate::core::models::BuildConfig;
use crate::core::naming::FilenameTemplate;
use crate::core::plugin::PluginSpec;
use crate::utils::Result;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Script,
    Stylesheet,
    StaticAsset,
    HtmlDocument,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::Script => "script",
            ArtifactKind::Stylesheet => "stylesheet",
            ArtifactKind::StaticAsset => "asset",
            ArtifactKind::HtmlDocument => "html",
        };
        f.write_str(label)
    }
}

/// One file the bundler writes into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub name: String,
    pub template: FilenameTemplate,
}

impl Artifact {
    /// File name with `[name]` filled in and hash placeholders left as-is.
    pub fn pattern(&self) -> String {
        self.template.with_name(&self.name)
    }

    pub fn is_content_addressed(&self) -> bool {
        self.template.is_content_addressed()
    }
}

/// Expected contents of the output directory for a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    pub output_dir: PathBuf,
    pub hash_length: usize,
    pub artifacts: Vec<Artifact>,
}

impl ArtifactLayout {
    pub fn of(config: &BuildConfig) -> Self {
        let mut artifacts = Vec::new();

        for name in config.entry.keys() {
            artifacts.push(Artifact {
                kind: ArtifactKind::Script,
                name: name.clone(),
                template: config.script_template().clone(),
            });
        }

        if let Some(stylesheet) = config.stylesheet_template() {
            for name in config.entry.keys() {
                artifacts.push(Artifact {
                    kind: ArtifactKind::Stylesheet,
                    name: name.clone(),
                    template: stylesheet.clone(),
                });
            }
        }

        for plugin in &config.plugins {
            match plugin {
                PluginSpec::CopyAssets(options) => {
                    for pattern in &options.patterns {
                        if let Some(file_name) = file_name_of(&pattern.from) {
                            artifacts.push(Artifact {
                                kind: ArtifactKind::StaticAsset,
                                name: file_name.clone(),
                                template: FilenameTemplate::new(file_name),
                            });
                        }
                    }
                }
                PluginSpec::HtmlGenerator(options) => artifacts.push(Artifact {
                    kind: ArtifactKind::HtmlDocument,
                    name: options.filename.clone(),
                    template: FilenameTemplate::new(options.filename.clone()),
                }),
                PluginSpec::CleanOutput | PluginSpec::CssExtract(_) => {}
            }
        }

        artifacts.sort_by_key(|artifact| artifact.kind);

        Self {
            output_dir: config.output.path.clone(),
            hash_length: config.output.hash_digest_length,
            artifacts,
        }
    }

    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(move |artifact| artifact.kind == kind)
    }

    /// Concrete output path of `artifact` given its emitted content.
    pub fn resolve(&self, artifact: &Artifact, content: &[u8]) -> Result<PathBuf> {
        let file_name = artifact
            .template
            .render(&artifact.name, content, self.hash_length)?;
        Ok(self.output_dir.join(file_name))
    }
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}
