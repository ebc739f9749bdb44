mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "radview", about = "Industrial radiograph windowing and export tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show frame manifest metadata
    Info(commands::info::InfoArgs),
    /// Window a raw frame into a viewable PNG
    Render(commands::render::RenderArgs),
    /// Check the DICOM signature of a file
    Verify(commands::verify::VerifyArgs),
    /// Copy a validated DICOM binary with an enforced .dcm name
    Export(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Verify(args) => commands::verify::run(args),
        Commands::Export(args) => commands::export::run(args),
    }
}
