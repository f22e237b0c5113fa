use crate::core::{ArtifactLayout, BuildConfig, LoaderUse};
use colored::*;

fn flag(enabled: bool) -> ColoredString {
    if enabled {
        "on".bright_green()
    } else {
        "off".bright_black()
    }
}

pub struct ConfigSummary<'a> {
    config: &'a BuildConfig,
}

impl<'a> ConfigSummary<'a> {
    pub fn new(config: &'a BuildConfig) -> Self {
        Self { config }
    }

    pub fn show(&self) {
        let config = self.config;

        println!(
            "\n  {} {}",
            "PACKWISE".bright_cyan().bold(),
            config.mode.to_string().bright_white()
        );
        println!();

        println!("  {}", "Mode settings".bold());
        println!("    source maps         {}", flag(config.emits_source_maps()));
        println!("    content hashes      {}", flag(config.script_template().is_content_addressed()));
        println!("    minify              {}", flag(config.optimization.minimize));
        println!("    collapse html       {}", flag(config.html_collapses_whitespace()));
        for minimizer in config.minimizers() {
            println!("    {} {}", "↳".bright_black(), minimizer.name().bright_cyan());
        }
        println!();

        println!("  {}", "Plugins".bold());
        for plugin in &config.plugins {
            println!(
                "    {} {}",
                plugin.name().bright_cyan(),
                plugin.describe().bright_black()
            );
        }
        println!();

        self.show_artifacts(&ArtifactLayout::of(config));
        println!(
            "  {} dev server on port {}",
            "✓".bright_green(),
            config.dev_server.port.to_string().bright_white().bold()
        );
    }

    fn show_artifacts(&self, layout: &ArtifactLayout) {
        let dir = format!("{}/", layout.output_dir.display());
        println!("  {}", "Artifacts".bold());
        for artifact in &layout.artifacts {
            println!(
                "    {}{} {}",
                dir.bright_black(),
                artifact.pattern().bright_cyan(),
                format!("({})", artifact.kind).bright_black()
            );
        }
        println!();
    }
}

/// Print the loader chain for one module path.
pub fn show_loader_chain(path: &str, chain: &[&LoaderUse]) {
    if chain.is_empty() {
        println!("  {} no loader rule matches {}", "•".bright_black(), path.bright_white());
        return;
    }

    println!("  {}", path.bright_white().bold());
    for (step, loader) in chain.iter().enumerate() {
        let options = loader
            .options()
            .map(|options| options.to_string())
            .unwrap_or_default();
        println!(
            "    {} {} {}",
            format!("{}.", step + 1).bright_black(),
            loader.loader().bright_cyan(),
            options.bright_black()
        );
    }
}
