// Declarative descriptors for the collaborators the bundler invokes by name.
// The external tool owns their behaviour; only names and options live here.

use crate::core::naming::FilenameTemplate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinify {
    pub collapse_whitespace: bool,
}

/// Generates the HTML entry document and injects script/link tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlGeneratorOptions {
    pub template: String,
    pub filename: String,
    pub minify: HtmlMinify,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyOptions {
    pub patterns: Vec<CopyPattern>,
}

/// Merges the style module graph into a single stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssExtractOptions {
    pub filename: FilenameTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "options")]
pub enum PluginSpec {
    #[serde(rename = "html-webpack-plugin")]
    HtmlGenerator(HtmlGeneratorOptions),
    #[serde(rename = "clean-webpack-plugin")]
    CleanOutput,
    #[serde(rename = "copy-webpack-plugin")]
    CopyAssets(CopyOptions),
    #[serde(rename = "mini-css-extract-plugin")]
    CssExtract(CssExtractOptions),
}

impl PluginSpec {
    /// Loader exported by the style-extraction plugin.
    pub const CSS_EXTRACT_LOADER: &'static str = "mini-css-extract-plugin/loader";

    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::HtmlGenerator(_) => "html-webpack-plugin",
            PluginSpec::CleanOutput => "clean-webpack-plugin",
            PluginSpec::CopyAssets(_) => "copy-webpack-plugin",
            PluginSpec::CssExtract(_) => "mini-css-extract-plugin",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PluginSpec::HtmlGenerator(options) => format!(
                "generate {} from {} (collapse whitespace: {})",
                options.filename, options.template, options.minify.collapse_whitespace
            ),
            PluginSpec::CleanOutput => "empty the output directory before emitting".to_string(),
            PluginSpec::CopyAssets(options) => {
                let sources: Vec<String> = options
                    .patterns
                    .iter()
                    .map(|pattern| pattern.from.display().to_string())
                    .collect();
                format!("copy {}", sources.join(", "))
            }
            PluginSpec::CssExtract(options) => {
                format!("extract styles into {}", options.filename)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum Minimizer {
    #[serde(rename = "optimize-css-assets-webpack-plugin")]
    Css,
    #[serde(rename = "terser-webpack-plugin")]
    Script,
}

impl Minimizer {
    pub fn name(self) -> &'static str {
        match self {
            Minimizer::Css => "optimize-css-assets-webpack-plugin",
            Minimizer::Script => "terser-webpack-plugin",
        }
    }
}
