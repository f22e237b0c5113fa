use crate::core::mode::BuildMode;
use crate::core::models::*;
use crate::core::naming::FilenameTemplate;
use crate::core::plugin::*;
use crate::core::rules::{Enforce, LoaderRule, LoaderUse};
use crate::core::settings::ProjectSettings;
use serde_json::json;
use std::collections::BTreeMap;

/// Name of the HTML document the generator emits into the output root.
pub const HTML_DOCUMENT: &str = "index.html";

/// Select the configuration for `mode` with the default project layout.
pub fn select_config(mode: BuildMode) -> BuildConfig {
    select_config_with(mode, &ProjectSettings::default())
}

/// Select the configuration for `mode` over a project layout.
///
/// Pure: the same inputs always produce an equal value, and only `mode`
/// decides hashing, source maps, minification and HTML whitespace handling.
pub fn select_config_with(mode: BuildMode, settings: &ProjectSettings) -> BuildConfig {
    let output_dir = settings.output_dir();

    let mut entry = BTreeMap::new();
    entry.insert(settings.entry_name.clone(), settings.entry.clone());

    let mut define = BTreeMap::new();
    define.insert(
        "process.env.NODE_ENV".to_string(),
        format!("\"{}\"", mode.as_str()),
    );

    BuildConfig {
        mode,
        context: settings.context_dir(),
        devtool: mode.emits_source_maps().then_some(Devtool::SourceMap),
        entry,
        output: OutputConfig {
            path: output_dir.clone(),
            filename: FilenameTemplate::for_mode(mode, "js"),
            hash_digest_length: settings.hash_length,
        },
        optimization: optimization(mode),
        dev_server: DevServerConfig {
            port: settings.port,
        },
        plugins: vec![
            PluginSpec::HtmlGenerator(HtmlGeneratorOptions {
                template: settings.template.clone(),
                filename: HTML_DOCUMENT.to_string(),
                minify: HtmlMinify {
                    collapse_whitespace: mode.collapses_html_whitespace(),
                },
            }),
            PluginSpec::CleanOutput,
            PluginSpec::CopyAssets(CopyOptions {
                patterns: vec![CopyPattern {
                    from: settings.favicon_path(),
                    to: output_dir,
                }],
            }),
            PluginSpec::CssExtract(CssExtractOptions {
                filename: FilenameTemplate::for_mode(mode, "css"),
            }),
        ],
        module: ModuleConfig {
            rules: loader_rules(mode),
        },
        define,
    }
}

fn optimization(mode: BuildMode) -> Optimization {
    let minimizer = if mode.minifies() {
        vec![Minimizer::Css, Minimizer::Script]
    } else {
        Vec::new()
    };

    Optimization {
        split_chunks: SplitChunks {
            chunks: ChunkSelection::All,
        },
        minimize: mode.minifies(),
        minimizer,
    }
}

fn loader_rules(mode: BuildMode) -> Vec<LoaderRule> {
    let extract = || {
        LoaderUse::with_options(
            PluginSpec::CSS_EXTRACT_LOADER,
            json!({ "hmr": mode.hot_reloads_styles(), "reloadAll": true }),
        )
    };

    vec![
        LoaderRule::new(r"\.css$", vec![extract(), LoaderUse::name("css-loader")]),
        LoaderRule::new(
            r"(?i)\.s[ac]ss$",
            vec![
                extract(),
                LoaderUse::name("css-loader"),
                LoaderUse::name("sass-loader"),
            ],
        ),
        // Images
        LoaderRule::new(
            r"\.(jpg|jpeg|png|webp|svg|gif)$",
            vec![LoaderUse::name("file-loader")],
        ),
        // Fonts
        LoaderRule::new(
            r"\.(eot|otf|svg|ttf|woff|woff2)$",
            vec![LoaderUse::name("file-loader")],
        ),
        LoaderRule::new(r"\.js$", vec![LoaderUse::name("source-map-loader")])
            .enforced(Enforce::Pre),
        LoaderRule::new(
            r"\.m?js$",
            vec![LoaderUse::with_options(
                "babel-loader",
                json!({
                    "presets": ["@babel/preset-env"],
                    "plugins": ["@babel/plugin-proposal-class-properties"]
                }),
            )],
        )
        .excluding("node_modules"),
    ]
}
