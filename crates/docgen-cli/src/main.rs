mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docgen",
    about = "Write the SaaS platform research, PRD, architecture and README documents",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output root (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every document, overwriting existing files (default)
    Generate,

    /// Show the embedded documents and where they are written
    List,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG replaces the default outright, bare levels included.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => cmd::generate::run(&root, cli.json),
        Commands::List => cmd::list::run(&root, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
