mod cmd;
mod extract;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tdx", version, about = "Track which media files are already backed up")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the digest index from takeout archives
    Index(IndexArgs),

    /// Check a file or directory against the index and print a removal script
    Query(QueryArgs),

    /// Remove every digest from the index
    Purge,

    /// Validate configuration and print resolved paths
    Doctor,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Paths to takeout archives
    #[arg(required = true)]
    pub archives: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// File or directory to check against the index
    pub path: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Index(args) => {
            cmd::index::run(cli.config.as_deref(), cli.profile.as_deref(), &args.archives);
        }
        Commands::Query(args) => {
            cmd::query::run(cli.config.as_deref(), cli.profile.as_deref(), &args.path);
        }
        Commands::Purge => {
            cmd::purge::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
    }
}
