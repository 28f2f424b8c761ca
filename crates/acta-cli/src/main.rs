//! CLI for civil-registry transcription assistance.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{convert, verify};

/// Civil-registry transcription assistant - verify form values against the
/// free-form body text of an act
#[derive(Parser)]
#[command(name = "acta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare form values against an act body and print suggestions
    Verify(verify::VerifyArgs),

    /// Convert French text to a numeric field value
    Convert(convert::ConvertArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Verify(args) => verify::run(args),
        Commands::Convert(args) => convert::run(args),
    }
}
