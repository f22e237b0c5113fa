use crate::core::BuildMode;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// Install the global subscriber. `RUST_LOG` wins over the default filter.
    pub fn init(verbose: bool) {
        let default_filter = if verbose { "packwise=debug" } else { "packwise=info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // A subscriber may already be installed when embedded in another tool
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub fn mode_resolved(raw: Option<&str>, mode: BuildMode) {
        match raw {
            Some(value) => debug!("🔧 Mode marker {:?} → {} mode", value, mode),
            None => debug!("🔧 Mode marker unset → {} mode", mode),
        }
    }

    pub fn unrecognized_mode(value: &str) {
        warn!(
            "⚠️  Mode marker {:?} is neither \"development\" nor \"production\"; building for production",
            value
        );
    }

    pub fn settings_loaded(path: &Path) {
        info!("📄 Loaded project settings from {}", path.display());
    }

    pub fn config_selected(mode: BuildMode, plugins: usize, rules: usize, minimizers: usize) {
        debug!(
            "📦 Selected {} config: {} plugins, {} loader rules, {} minimizers",
            mode, plugins, rules, minimizers
        );
    }

    pub fn config_written(path: &Path, bytes: usize) {
        info!("✅ Wrote configuration to {} ({} bytes)", path.display(), bytes);
    }

    pub fn info(msg: &str) {
        info!("{}", msg);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }
}
