//! # heplink
//!
//! Operator tooling for the Heplink landing page.
//!
//! ```bash
//! # Which images does the deployment actually serve?
//! heplink assets --base-url https://heplink.co
//!
//! # Same check against a local build output
//! heplink assets --dir landing/dist
//!
//! # What does a fragment render?
//! heplink route '#/services?x=1'
//! ```

mod commands;
mod config;
mod probe;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use config::HeplinkConfig;
use probe::{DirProbe, HttpProbe};

#[derive(Parser, Debug)]
#[command(name = "heplink")]
#[command(about = "Heplink site tooling - asset audits, routes, placeholder")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./heplink.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every image slot of the site and report what renders
    Assets {
        /// Deployed site to probe with HEAD requests
        #[arg(long)]
        base_url: Option<String>,

        /// Probe a local static root instead of a URL
        #[arg(long, conflicts_with = "base_url")]
        dir: Option<PathBuf>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the fragment to sections table
    Routes {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what a fragment selects
    Route {
        /// Location fragment, e.g. '#/work'
        #[arg(allow_hyphen_values = true)]
        fragment: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Emit the generated placeholder image
    Placeholder {
        /// Text drawn in the middle
        #[arg(long)]
        label: Option<String>,

        /// Emit a data: URI instead of raw SVG
        #[arg(long)]
        data_uri: bool,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = HeplinkConfig::load(cli.config.as_deref())?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();

    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Assets {
            base_url,
            dir,
            json,
        } => match dir {
            Some(dir) => {
                info!(root = %dir.display(), "probing local static root");
                commands::assets(&DirProbe::new(dir), json).await
            }
            None => {
                let base_url = base_url.unwrap_or(config.base_url);
                info!(%base_url, "probing deployed site");
                commands::assets(&HttpProbe::new(&base_url), json).await
            }
        },
        Command::Routes { json } => commands::routes(json),
        Command::Route { fragment, json } => commands::route(&fragment, json),
        Command::Placeholder {
            label,
            data_uri,
            out,
        } => {
            let label = label.unwrap_or(config.placeholder_label);
            commands::placeholder(&label, data_uri, out.as_deref())
        }
    }
}
