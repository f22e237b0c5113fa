use crate::core::mode::BuildMode;
use crate::core::naming::FilenameTemplate;
use crate::core::plugin::{Minimizer, PluginSpec};
use crate::core::rules::LoaderRule;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Devtool {
    #[serde(rename = "source-map")]
    SourceMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub path: PathBuf,
    pub filename: FilenameTemplate,
    pub hash_digest_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitChunks {
    pub chunks: ChunkSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub split_chunks: SplitChunks,
    pub minimize: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minimizer: Vec<Minimizer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleConfig {
    pub rules: Vec<LoaderRule>,
}

/// Complete configuration handed to the external bundler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: BuildMode,
    pub context: PathBuf,
    #[serde(serialize_with = "serialize_devtool")]
    pub devtool: Option<Devtool>,
    pub entry: BTreeMap<String, Vec<String>>,
    pub output: OutputConfig,
    pub optimization: Optimization,
    pub dev_server: DevServerConfig,
    pub plugins: Vec<PluginSpec>,
    pub module: ModuleConfig,
    pub define: BTreeMap<String, String>,
}

impl BuildConfig {
    pub fn emits_source_maps(&self) -> bool {
        self.devtool.is_some()
    }

    pub fn minimizers(&self) -> &[Minimizer] {
        &self.optimization.minimizer
    }

    pub fn script_template(&self) -> &FilenameTemplate {
        &self.output.filename
    }

    pub fn stylesheet_template(&self) -> Option<&FilenameTemplate> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginSpec::CssExtract(options) => Some(&options.filename),
            _ => None,
        })
    }

    pub fn html_collapses_whitespace(&self) -> bool {
        self.plugins.iter().any(|plugin| match plugin {
            PluginSpec::HtmlGenerator(options) => options.minify.collapse_whitespace,
            _ => false,
        })
    }

    pub fn rules(&self) -> &[LoaderRule] {
        &self.module.rules
    }

    pub fn to_json(&self, pretty: bool) -> crate::utils::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

// Disabled source maps are spelled `false` in bundler configuration.
fn serialize_devtool<S: Serializer>(
    devtool: &Option<Devtool>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match devtool {
        Some(devtool) => devtool.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
