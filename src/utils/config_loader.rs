use crate::core::ProjectSettings;
use crate::utils::{Logger, PackwiseError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "packwise.config.json";

/// Settings file format (packwise.config.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PackwiseConfig {
    /// Source directory (default: "app")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<PathBuf>,

    /// Output directory (default: "dist")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir: Option<PathBuf>,

    /// Entry chunk name (default: "main")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_name: Option<String>,

    /// Imports bundled into the entry chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<String>>,

    /// HTML template relative to the context directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Favicon copied to the output root, relative to the context directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<PathBuf>,

    /// Dev server port (default: 3000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Content hash length in production filenames (default: 20)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<usize>,
}

/// Values passed on the command line; these beat the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub outdir: Option<PathBuf>,
    pub port: Option<u16>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load packwise.config.json from the project root, if present
    pub fn load_from_file(root: &Path) -> Result<Option<PackwiseConfig>> {
        let config_path = root.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            Logger::debug(&format!("No {} found, using defaults", CONFIG_FILE_NAME));
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: PackwiseConfig = serde_json::from_str(&content)
            .map_err(|e| PackwiseError::config_file(&config_path, e.to_string()))?;

        Logger::settings_loaded(&config_path);
        Ok(Some(config))
    }

    /// Merge file settings with CLI overrides (CLI > file > default)
    pub fn merge_with_cli(
        file_config: Option<PackwiseConfig>,
        root: PathBuf,
        overrides: SettingsOverrides,
    ) -> ProjectSettings {
        let base = file_config.unwrap_or_default();
        let defaults = ProjectSettings::with_root(root);

        ProjectSettings {
            context: base.context.unwrap_or(defaults.context),
            outdir: overrides.outdir.or(base.outdir).unwrap_or(defaults.outdir),
            entry_name: base.entry_name.unwrap_or(defaults.entry_name),
            entry: base.entry.unwrap_or(defaults.entry),
            template: base.template.unwrap_or(defaults.template),
            favicon: base.favicon.unwrap_or(defaults.favicon),
            port: overrides.port.or(base.port).unwrap_or(defaults.port),
            hash_length: base.hash_length.unwrap_or(defaults.hash_length),
            root: defaults.root,
        }
    }

    /// Load, merge and validate in one step
    pub fn resolve(root: &Path, overrides: SettingsOverrides) -> Result<ProjectSettings> {
        let file_config = Self::load_from_file(root)?;
        let settings = Self::merge_with_cli(file_config, root.to_path_buf(), overrides);
        settings.validate()?;
        Ok(settings)
    }

    /// Example settings file with every field at its default
    pub fn generate_example() -> Result<String> {
        let defaults = ProjectSettings::default();
        let example = PackwiseConfig {
            context: Some(defaults.context),
            outdir: Some(defaults.outdir),
            entry_name: Some(defaults.entry_name),
            entry: Some(defaults.entry),
            template: Some(defaults.template),
            favicon: Some(defaults.favicon),
            port: Some(defaults.port),
            hash_length: Some(defaults.hash_length),
        };
        Ok(serde_json::to_string_pretty(&example)?)
    }
}
