use crate::core::naming::{validate_hash_length, DEFAULT_HASH_LENGTH};
use crate::utils::{PackwiseError, Result};
use std::path::PathBuf;

/// Project layout shared by both build modes.
///
/// Nothing here depends on the build mode, so overriding a setting never
/// changes a mode-derived attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    /// Project root; relative paths below are resolved against it.
    pub root: PathBuf,
    /// Source directory that entry imports and the HTML template resolve from.
    pub context: PathBuf,
    pub outdir: PathBuf,
    pub entry_name: String,
    pub entry: Vec<String>,
    /// HTML template, relative to `context`.
    pub template: String,
    /// Static favicon copied to the output root, relative to `context`.
    pub favicon: PathBuf,
    pub port: u16,
    pub hash_length: usize,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            context: PathBuf::from("app"),
            outdir: PathBuf::from("dist"),
            entry_name: "main".to_string(),
            entry: vec!["@babel/polyfill".to_string(), "./js/index.js".to_string()],
            template: "./index.html".to_string(),
            favicon: PathBuf::from("assets/images/favicon/cat.ico"),
            port: 3000,
            hash_length: DEFAULT_HASH_LENGTH,
        }
    }
}

impl ProjectSettings {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn context_dir(&self) -> PathBuf {
        self.root.join(&self.context)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.outdir)
    }

    pub fn favicon_path(&self) -> PathBuf {
        self.context_dir().join(&self.favicon)
    }

    pub fn validate(&self) -> Result<()> {
        if self.entry_name.trim().is_empty() {
            return Err(PackwiseError::config("entry name must not be empty"));
        }
        if self.entry.is_empty() {
            return Err(PackwiseError::config(format!(
                "entry `{}` must list at least one import",
                self.entry_name
            )));
        }
        if self.port == 0 {
            return Err(PackwiseError::config("dev server port must be non-zero"));
        }
        validate_hash_length(self.hash_length)
            .map_err(|_| PackwiseError::config(format!(
                "hashLength must be between 1 and 64, got {}",
                self.hash_length
            )))
    }
}
