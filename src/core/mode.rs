use serde::{Deserialize, Serialize};
use std::fmt;

/// Development/production switch that drives every conditional setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Value of the mode variable that selects development builds.
    pub const DEVELOPMENT_MARKER: &'static str = "development";

    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }

    /// Source maps are only emitted for development builds.
    pub fn emits_source_maps(self) -> bool {
        self.is_development()
    }

    /// Production assets are content-addressed for long-term caching.
    pub fn hashes_filenames(self) -> bool {
        self.is_production()
    }

    pub fn collapses_html_whitespace(self) -> bool {
        self.is_production()
    }

    /// Extracted styles hot-reload in the dev server only.
    pub fn hot_reloads_styles(self) -> bool {
        self.is_development()
    }

    pub fn minifies(self) -> bool {
        self.is_production()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
