//! Gameshelf - game metadata lookups against IGDB.
//!
//! Configuration comes from `IGDB_*` environment variables (a `.env` file is
//! honoured) or from a JSON/TOML file. Results are printed to stdout as
//! pretty JSON; logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gameshelf_core::CatalogService;
use gameshelf_domain::IgdbConfig;
use gameshelf_infra::{config, IgdbClient, IgdbService};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Look up game metadata on IGDB.
#[derive(Parser, Debug)]
#[command(name = "gameshelf", version, about, long_about = None)]
struct Cli {
    /// Config file to read instead of the environment
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Find the IGDB game for a Steam app id.
    Lookup {
        /// Steam app id
        steam_app_id: u32,
    },
    /// Show completion estimates for an IGDB game id.
    TimeToBeat {
        /// IGDB game id
        igdb_game_id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = load_config(cli.config).context("failed to load IGDB configuration")?;
    let client = IgdbClient::new(&config).context("invalid IGDB configuration")?;
    let catalog = CatalogService::new(Arc::new(IgdbService::new(client)));

    let output = match cli.command {
        Commands::Lookup { steam_app_id } => {
            let record = catalog
                .lookup_steam_app(steam_app_id)
                .await
                .with_context(|| format!("lookup of Steam app {steam_app_id} failed"))?;
            if record.is_none() {
                info!(steam_app_id, "no IGDB game found");
            }
            serde_json::to_string_pretty(&record)?
        }
        Commands::TimeToBeat { igdb_game_id } => {
            let entries = catalog
                .time_to_beat(igdb_game_id)
                .await
                .with_context(|| format!("time-to-beat lookup for game {igdb_game_id} failed"))?;
            serde_json::to_string_pretty(&entries)?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> gameshelf_domain::Result<IgdbConfig> {
    match path {
        Some(path) => config::load_from_file(Some(path)),
        None => config::load(),
    }
}

/// Initializes the tracing subscriber; `RUST_LOG` overrides the default filter.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.with_target(true).init();
    }
}
