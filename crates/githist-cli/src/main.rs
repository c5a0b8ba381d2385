mod cmd_extract;
mod cmd_refs;
mod cmd_render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "githist")]
#[command(about = "Extract and visualize git commit history as a directed graph")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract the commit history as a JSON document
    Extract {
        /// Path to the git repository
        #[arg(short, long, default_value = ".")]
        repo: PathBuf,
    },
    /// List the repository's resolved references
    Refs {
        /// Path to the git repository
        #[arg(short, long, default_value = ".")]
        repo: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the commit history to other formats
    Render {
        #[command(subcommand)]
        format: cmd_render::RenderFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Extract { repo } => cmd_extract::run(repo, cli.pretty),
        Commands::Refs { repo, json } => cmd_refs::run(repo, json),
        Commands::Render { format } => cmd_render::run(format),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("GITHIST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
