//! Command line interface
//!
//! Parses the command line, layers the flags over the loaded
//! configuration and dispatches to the explain use case.

use adx_domain::error::Result;
use adx_infrastructure::config::{AppConfig, CatalogConfig, ConfigLoader};
use adx_infrastructure::di::{AppContext, init_app};
use adx_infrastructure::logging::{init_logging, log_config_loaded};
use adx_infrastructure::output::{ConsoleOutput, should_use_ansi};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Command line interface for adx
#[derive(Parser, Debug)]
#[command(name = "adx")]
#[command(about = "Explain how admin services are wired")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Admin catalog file, overrides `catalog.path`
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Force ANSI styling
    #[arg(long, global = true, overrides_with = "no_ansi")]
    pub ansi: bool,

    /// Disable ANSI styling
    #[arg(long, global = true, overrides_with = "ansi")]
    pub no_ansi: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explain admin service information
    Explain {
        /// The admin service id
        admin: String,
    },
}

impl Cli {
    /// Log level selected by `-v`/`-q`, if any
    pub fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Styling forced by `--ansi`/`--no-ansi`, if any
    pub fn ansi_flag(&self) -> Option<bool> {
        match (self.ansi, self.no_ansi) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Loader for `--config`, or the default locations without it
    pub fn config_loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }

    /// Load configuration and apply command line overrides
    pub fn load_config(&self, loader: &ConfigLoader) -> Result<AppConfig> {
        let mut config = loader.load()?;

        if let Some(catalog) = &self.catalog {
            config.catalog = CatalogConfig::with_path(catalog);
        }
        if let Some(level) = self.log_level() {
            config.logging.level = level.to_string();
        }
        Ok(config)
    }
}

/// Run the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let loader = cli.config_loader();
    let config = cli.load_config(&loader)?;
    init_logging(&config.logging)?;
    log_config_loaded(loader.config_source().as_deref());

    let ansi = should_use_ansi(cli.ansi_flag(), config.output.ansi);
    let context = init_app(config)?;

    match &cli.command {
        Commands::Explain { admin } => explain(&context, admin, ansi),
    }
}

fn explain(context: &AppContext, admin: &str, ansi: bool) -> Result<()> {
    debug!(admin, ansi, "Explaining admin");
    let stdout = io::stdout();
    let mut output = ConsoleOutput::new(stdout.lock(), ansi);
    context.explain_service().explain(admin, &mut output)?;
    output.into_inner()?;
    Ok(())
}
