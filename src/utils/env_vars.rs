use crate::core::BuildMode;
use crate::utils::Logger;
use std::ffi::OsStr;

/// Environment variable that selects the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Outcome of reading the mode marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeResolution {
    pub mode: BuildMode,
    pub raw: Option<String>,
}

impl ModeResolution {
    /// Only the exact development marker selects development; everything
    /// else, including an unset variable, builds for production.
    pub fn from_value(raw: Option<&str>) -> Self {
        let mode = match raw {
            Some(BuildMode::DEVELOPMENT_MARKER) => BuildMode::Development,
            _ => BuildMode::Production,
        };

        Self {
            mode,
            raw: raw.map(str::to_string),
        }
    }

    /// Like `from_value`, for markers that may not be valid UTF-8.
    ///
    /// A non-UTF-8 marker can never equal the development marker, so it
    /// builds for production and is kept lossily for reporting.
    pub fn from_os_value(raw: Option<&OsStr>) -> Self {
        match raw.map(|value| value.to_str().ok_or(value)) {
            None => Self::from_value(None),
            Some(Ok(value)) => Self::from_value(Some(value)),
            Some(Err(value)) => Self {
                mode: BuildMode::Production,
                raw: Some(value.to_string_lossy().into_owned()),
            },
        }
    }

    /// Set, but neither the development nor the production marker.
    pub fn is_unrecognized(&self) -> bool {
        matches!(
            self.raw.as_deref(),
            Some(value)
                if value != BuildMode::DEVELOPMENT_MARKER
                    && value != BuildMode::Production.as_str()
        )
    }

    /// Log how the mode was chosen, warning on values that fell back to production.
    pub fn report(&self) {
        Logger::mode_resolved(self.raw.as_deref(), self.mode);
        if let Some(value) = self.raw.as_deref().filter(|_| self.is_unrecognized()) {
            Logger::unrecognized_mode(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_marker() {
        let resolution = ModeResolution::from_value(Some("development"));
        assert_eq!(resolution.mode, BuildMode::Development);
        assert!(!resolution.is_unrecognized());
    }

    #[test]
    fn test_everything_else_is_production() {
        let values = [
            None,
            Some("production"),
            Some("staging"),
            Some(""),
            Some("Development"),
            Some(" development"),
        ];
        for raw in values {
            assert_eq!(ModeResolution::from_value(raw).mode, BuildMode::Production, "{:?}", raw);
        }
    }

    #[test]
    fn test_unrecognized_values_are_flagged() {
        assert!(ModeResolution::from_value(Some("develop")).is_unrecognized());
        assert!(!ModeResolution::from_value(Some("production")).is_unrecognized());
        assert!(!ModeResolution::from_value(None).is_unrecognized());
    }

    #[test]
    fn test_os_value_matches_str_value() {
        for raw in [None, Some("development"), Some("production"), Some("staging")] {
            assert_eq!(
                ModeResolution::from_os_value(raw.map(OsStr::new)),
                ModeResolution::from_value(raw)
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_marker_builds_for_production() {
        use std::os::unix::ffi::OsStrExt;

        let resolution = ModeResolution::from_os_value(Some(OsStr::from_bytes(b"dev\xffelopment")));
        assert_eq!(resolution.mode, BuildMode::Production);
        assert!(resolution.is_unrecognized());
        assert!(resolution.raw.unwrap().contains('\u{FFFD}'));
    }
}
