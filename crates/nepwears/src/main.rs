//! nepwears - NepWears storefront server and catalogue CLI

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nepwears_core::StorefrontConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nepwears",
    version,
    about = "NepWears storefront server",
    long_about = "Serves the NepWears storefront (Leptos frontend + collections API) and\n\
                  inspects the catalogue the navigation menus are built from.\n\
                  \n\
                  Examples:\n\
                    nepwears serve                   # API + frontend on port 3000\n\
                    nepwears serve --port 8080       # Custom port\n\
                    nepwears collections             # Collections as the menus show them\n\
                    nepwears collections --json      # Same, as JSON\n\
                    nepwears config                  # Effective configuration\n\
                  \n\
                  Frontend build:\n\
                    cd crates/nepwears-web && trunk build --release\n\
                  \n\
                  Environment Variables:\n\
                    NEPWEARS_CONFIG                  # Path to config.json\n\
                    RUST_LOG                         # Log filter (e.g. nepwears_core=debug)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to config.json (default: <config dir>/nepwears/config.json)
    #[arg(long, env = "NEPWEARS_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server (default)
    Serve {
        /// Port for web server
        #[arg(long, default_value = "3000")]
        port: u16,
        /// Built frontend directory
        #[arg(long, default_value = "crates/nepwears-web/dist")]
        dist: PathBuf,
    },
    /// Print the collections shown in the navigation menus
    Collections {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as JSON
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config)?;

    match cli.mode.unwrap_or(Mode::Serve {
        port: 3000,
        dist: PathBuf::from("crates/nepwears-web/dist"),
    }) {
        Mode::Serve { port, dist } => {
            nepwears_web::run(config, port, &dist).await?;
        }
        Mode::Collections { json } => {
            cli::run_collections(&config, json).await?;
        }
        Mode::Config => {
            println!(
                "{}",
                serde_json::to_string_pretty(&config).context("Failed to serialize config")?
            );
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// An explicit path must load cleanly; the default location may be absent
fn load_config(explicit: Option<PathBuf>) -> Result<StorefrontConfig> {
    match explicit {
        Some(path) => StorefrontConfig::load(&path).map_err(|e| {
            if let Some(hint) = e.suggestion() {
                eprintln!("hint: {}", hint);
            }
            anyhow::Error::new(e).context(format!("Failed to load config from {}", path.display()))
        }),
        None => Ok(dirs::config_dir()
            .map(|dir| StorefrontConfig::load_or_default(&dir.join("nepwears").join("config.json")))
            .unwrap_or_default()),
    }
}
