use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use vigil::{MonitorContext, commands};

#[derive(Parser)]
#[command(
    name = "vigil",
    version = vigil::VERSION,
    about = "File-integrity monitor",
    long_about = "Tracks SHA-1 content hashes of configured files and directories \
                  to detect additions, modifications, and deletions"
)]
struct Cli {
    /// Path to the monitor configuration file
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new store baseline, discarding any existing one
    Init,

    /// Display all monitored files and their hashes
    Show,

    /// Check for differences against the baseline and display them
    Diff,

    /// Accept the last diff results as the new baseline (diff must run first)
    Update,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("vigil=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = MonitorContext::load(&cli.config)?;

    match cli.command {
        Commands::Init => commands::init::execute(&ctx),
        Commands::Show => commands::show::execute(&ctx),
        Commands::Diff => commands::diff::execute(&ctx),
        Commands::Update => commands::update::execute(&ctx),
    }
}
