//! wikirace CLI
//!
//! Verifies Wikipedia race routes against live article links.

use anyhow::Result;
use clap::{Parser, Subcommand};

use wikirace::init::{run_init, InitArgs};
use wikirace::logging;
use wikirace::verify_route::{run_verify, VerifyArgs};

#[derive(Parser)]
#[command(name = "wikirace")]
#[command(version)]
#[command(about = "Wikipedia race route verification")]
#[command(long_about = "Checks that every hop of a route between two Wikipedia articles is a real outbound link.\n\nCommands:\n  verify   Verify a route against the MediaWiki API\n  init     Create a puzzles file template")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a route: start, intermediate articles, goal
    Verify(VerifyArgs),
    /// Create a puzzles file template
    Init(InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify(args) => run_verify(args).await,
        Commands::Init(args) => run_init(args).await,
    }
}
