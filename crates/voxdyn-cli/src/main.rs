//! Voxdyn CLI - command-line front end for the compressor and gate.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "voxdyn")]
#[command(author, version, long_about = None)]
#[command(about = "Frame-accurate compressor and noise gate for 16-bit PCM")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a PCM file through a compressor/gate chain
    Process(commands::process::ProcessArgs),

    /// List factory presets or show one as TOML
    Presets(commands::presets::PresetsArgs),

    /// Show processor parameters and their defaults
    Params(commands::params::ParamsArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Params(args) => commands::params::run(args),
    }
}
