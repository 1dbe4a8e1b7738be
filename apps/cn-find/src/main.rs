//! cn-find: campus route finder.
//!
//! Reads a route table (`id,start_location,end_location,distance_m,accessible`)
//! and answers shortest-walk queries between named locations.
//!
//! ```text
//! cn-find --routes data/routes.csv find --from "Main Gate" --to Library --accessible
//! cn-find --routes data/routes.csv batch queries.json --json
//! cn-find --routes data/routes.csv locations
//! cn-find --routes data/routes.csv stats
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cn-find")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Engine configuration file (TOML)
    #[arg(short, long, env = "CN_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Route table (CSV)
    #[arg(long, env = "CN_ROUTES", default_value = "data/routes.csv", global = true)]
    routes: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the shortest walking route between two locations
    Find {
        /// Starting point
        #[arg(long)]
        from: Option<String>,

        /// Destination
        #[arg(long)]
        to: Option<String>,

        /// Wheelchair accessible routes only
        #[arg(long)]
        accessible: bool,

        /// Show alternative routes (reserved)
        #[arg(long)]
        alternatives: bool,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer a JSON array of route queries
    Batch {
        /// File holding `[{"origin": .., "destination": .., "accessibility_required": ..}, ..]`
        queries: PathBuf,

        /// Print outcomes as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every location named in the route table
    Locations,

    /// Summarise the route table
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let nav_config = config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Find { from, to, accessible, alternatives, json } => {
            let query = commands::query_from_args(from, to, accessible, alternatives);
            commands::find(&cli.routes, nav_config, &query, json)
        }
        Command::Batch { queries, json } => commands::batch(&cli.routes, nav_config, &queries, json),
        Command::Locations => commands::locations(&cli.routes),
        Command::Stats { json } => commands::stats(&cli.routes, json),
    }
}
