//! tunlisten
//!
//! Loads listen directives from a server config file and reports the
//! resulting bind plan.
//!
//! ```text
//! settings.toml ──┐
//! CLI overrides ──┼─▶ Settings ─┐
//!                 │             ▼
//! server.conf ────┴─▶ OptionList ─▶ ListenList ─▶ check | json | ports
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tunlisten::config::{self, Settings};
use tunlisten::listen::{ListenList, LoadMode};
use tunlisten::observability;

#[derive(Parser)]
#[command(name = "tunlisten")]
#[command(about = "Validate listen directives of a tunnel server config", long_about = None)]
struct Cli {
    /// Settings file (TOML).
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Directive name to load; a trailing '-' matches a family.
    #[arg(short, long)]
    directive: Option<String>,

    /// Behavior when no directive matches.
    #[arg(short, long)]
    mode: Option<LoadMode>,

    /// Core count used for '*N' thread specs.
    #[arg(short, long)]
    cores: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every listen entry and the total thread count
    Check { file: PathBuf },
    /// Print the listen entries as JSON
    Json { file: PathBuf },
    /// Print every entry with its port shifted
    Ports {
        file: PathBuf,
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match &cli.settings {
        Some(path) => config::load_settings(path)?,
        None => Settings::default(),
    };
    if let Some(directive) = cli.directive {
        settings.loader.directive = directive;
    }
    if let Some(mode) = cli.mode {
        settings.loader.load_mode = mode;
    }
    if cli.cores.is_some() {
        settings.loader.cores = cli.cores;
    }
    config::validate_settings(&settings).map_err(config::ConfigError::Validation)?;

    observability::init_logging(&settings.observability);

    let cores = settings.loader.cores();
    tracing::info!(
        directive = %settings.loader.directive,
        load_mode = %settings.loader.load_mode,
        cores,
        "Configuration loaded"
    );

    let file = match &cli.command {
        Commands::Check { file } | Commands::Json { file } | Commands::Ports { file, .. } => file,
    };
    let options = config::read_options(file)?;
    let list = ListenList::load(
        &options,
        &settings.loader.directive,
        settings.loader.load_mode,
        cores,
    )?;

    match cli.command {
        Commands::Check { .. } => {
            for spec in &list {
                println!("{}", spec);
            }
            println!("total threads: {}", list.total_threads());
        }
        Commands::Json { .. } => {
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        Commands::Ports { offset, .. } => {
            for spec in &list {
                println!("{}", spec.port_offset(offset)?);
            }
        }
    }

    Ok(())
}
