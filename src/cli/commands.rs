use crate::core::{
    select_config_with, BuildConfig, BuildMode, FilenameTemplate, ProjectSettings, RuleSet,
};
use crate::utils::{
    show_loader_chain, ConfigLoader, ConfigSummary, Logger, ModeResolution, SettingsOverrides,
    CONFIG_FILE_NAME, MODE_ENV_VAR,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "packwise", version)]
#[command(about = "Mode-aware build configuration for front-end bundling")]
pub struct Cli {
    /// Build mode marker: "development" selects development, anything else production
    #[arg(long, global = true, env = MODE_ENV_VAR, value_parser = clap::value_parser!(OsString))]
    pub node_env: Option<OsString>,

    /// Project root directory
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args, Default)]
pub struct OverrideArgs {
    /// Output directory, relative to the root
    #[arg(long)]
    pub outdir: Option<PathBuf>,
    /// Dev server port
    #[arg(long)]
    pub port: Option<u16>,
}

impl From<OverrideArgs> for SettingsOverrides {
    fn from(args: OverrideArgs) -> Self {
        SettingsOverrides {
            outdir: args.outdir,
            port: args.port,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the bundler configuration as JSON
    Show {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    /// Summarize the selected configuration
    Explain {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    /// Show the loaders applied to a module path
    Rules {
        /// Module path, e.g. styles/app.scss
        path: String,
    },
    /// Render the output filename for an asset
    Name {
        /// Logical asset name, e.g. main
        name: String,
        /// File extension without the dot
        ext: String,
        /// File whose content feeds the content hash
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Write an example packwise.config.json
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        let cli = Cli::parse();
        Logger::init(cli.verbose);
        self.execute(cli)
    }

    pub fn execute(&self, cli: Cli) -> Result<()> {
        // The only place the environment decides the mode
        let resolution = ModeResolution::from_os_value(cli.node_env.as_deref());
        resolution.report();
        let mode = resolution.mode;

        match cli.command {
            Commands::Show {
                out,
                compact,
                overrides,
            } => {
                let config = self.select(&cli.root, mode, overrides.into())?;
                self.handle_show_command(&config, out.as_deref(), compact)
            }
            Commands::Explain { overrides } => {
                let config = self.select(&cli.root, mode, overrides.into())?;
                ConfigSummary::new(&config).show();
                Ok(())
            }
            Commands::Rules { path } => {
                let config = self.select(&cli.root, mode, SettingsOverrides::default())?;
                self.handle_rules_command(&config, &path)
            }
            Commands::Name { name, ext, file } => {
                let settings = ConfigLoader::resolve(&cli.root, SettingsOverrides::default())?;
                let template = FilenameTemplate::for_mode(mode, &ext);
                let rendered = render_name(&template, &name, file.as_deref(), &settings)?;
                println!("{}", rendered);
                Ok(())
            }
            Commands::Init { force } => self.handle_init_command(&cli.root, force),
        }
    }

    fn select(
        &self,
        root: &Path,
        mode: BuildMode,
        overrides: SettingsOverrides,
    ) -> Result<BuildConfig> {
        let settings = ConfigLoader::resolve(root, overrides)
            .with_context(|| format!("invalid project settings in {}", root.display()))?;
        let config = select_config_with(mode, &settings);

        Logger::config_selected(
            mode,
            config.plugins.len(),
            config.rules().len(),
            config.minimizers().len(),
        );
        Ok(config)
    }

    fn handle_show_command(&self, config: &BuildConfig, out: Option<&Path>, compact: bool) -> Result<()> {
        let json = config.to_json(!compact)?;

        match out {
            Some(path) => {
                std::fs::write(path, &json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                Logger::config_written(path, json.len());
            }
            None => println!("{}", json),
        }
        Ok(())
    }

    fn handle_rules_command(&self, config: &BuildConfig, path: &str) -> Result<()> {
        let compiled = RuleSet::compile(config.rules())?;
        let chain = compiled.loaders_for(path);
        show_loader_chain(path, &chain);
        Ok(())
    }

    fn handle_init_command(&self, root: &Path, force: bool) -> Result<()> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }

        let example = ConfigLoader::generate_example()?;
        std::fs::write(&path, format!("{}\n", example))
            .with_context(|| format!("failed to write {}", path.display()))?;
        Logger::info(&format!("📝 Created {}", path.display()));
        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `name` through `template`; without a file the hash placeholder stays visible.
fn render_name(
    template: &FilenameTemplate,
    name: &str,
    file: Option<&Path>,
    settings: &ProjectSettings,
) -> Result<String> {
    match file {
        Some(path) => {
            let content = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(template.render(name, &content, settings.hash_length)?)
        }
        None if template.is_content_addressed() => {
            Logger::debug("No --file given; leaving the content hash unresolved");
            Ok(template.with_name(name))
        }
        None => Ok(template.render(name, &[], settings.hash_length)?),
    }
}
