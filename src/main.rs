mod cli;
mod config;
mod ext;
mod init;
mod listing;
mod preview;
mod search_cmd;
mod toggle;
mod tree;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    setup_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tree(args) => tree::run(args),
        Commands::Search(args) => search_cmd::run(args),
        Commands::Preview(args) => preview::run(args),
        Commands::Toggle(args) => toggle::run(args),
        Commands::Ext(args) => ext::run(args),
        Commands::Init(args) => init::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}
