//! SpineTrace CLI: command-line interface for spine drawing classification.
//!
//! Usage:
//!   spinetrace classify <PNG>      Classify the drawing in a PNG
//!   spinetrace trace <PNG>         Show the boundary trace, deltas and pivots
//!   spinetrace replay <JSONL>      Replay a pointer stroke and classify it
//!   spinetrace config              Show (and optionally save) the config

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spinetrace_common::config::{config_file_path, AppConfig};

mod commands;

#[derive(Parser)]
#[command(
    name = "spinetrace",
    about = "Classify free-hand spine drawings by their curvature",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the standard location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the spine drawn in a PNG (ink = non-transparent pixels)
    Classify {
        /// Path to the PNG drawing
        path: PathBuf,

        #[command(flatten)]
        overrides: commands::ClassifierOverrides,

        /// Write the scanned raster (with debug inversion applied) to this PNG
        #[arg(long)]
        debug_output: Option<PathBuf>,
    },

    /// Print the boundary trace, delta signal and pivots of a PNG drawing
    Trace {
        /// Path to the PNG drawing
        path: PathBuf,

        #[command(flatten)]
        overrides: commands::ClassifierOverrides,

        /// Emit the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a JSONL pointer stroke through a drawing session
    Replay {
        /// Path to the JSONL event stream
        path: PathBuf,

        /// Drawing surface width (defaults to the configured canvas)
        #[arg(long)]
        width: Option<u32>,

        /// Drawing surface height (defaults to the configured canvas)
        #[arg(long)]
        height: Option<u32>,

        #[command(flatten)]
        overrides: commands::ClassifierOverrides,

        /// Write the skeleton and final stroke composite to this PNG
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config {
        /// Save the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config_file_path);
    let loaded = AppConfig::load_from(&config_path);

    // Initialize logging before reporting a broken config file
    let config = match loaded {
        Ok(config) => {
            spinetrace_common::logging::init_logging(&config.logging, cli.verbose);
            config
        }
        Err(e) => {
            let config = AppConfig::default();
            spinetrace_common::logging::init_logging(&config.logging, cli.verbose);
            tracing::warn!(
                "Ignoring config at {}: {}; using defaults",
                config_path.display(),
                e
            );
            config
        }
    };

    match cli.command {
        Commands::Classify {
            path,
            overrides,
            debug_output,
        } => commands::classify::run(&config, path, &overrides, debug_output),
        Commands::Trace {
            path,
            overrides,
            json,
        } => commands::trace::run(&config, path, &overrides, json),
        Commands::Replay {
            path,
            width,
            height,
            overrides,
            output,
        } => commands::replay::run(&config, path, width, height, &overrides, output),
        Commands::Config { write } => commands::config::run(&config, cli.config, write),
    }
}
