//! Chartboard CLI
//!
//! - `serve`: host the built dashboard, redirecting `/` to `/dashboard`
//! - `snapshot`: load the four datasets headlessly and print the dashboard
//! - `config`: print or write the default config file

use anyhow::Context;
use chartboard::client::HttpChartClient;
use chartboard::config::{generate_default_config, Config, LoadReport};
use chartboard::view::DashboardView;
use chartboard::{logging, render, server};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "chartboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Line, bar, pie and candlestick dashboard over a chart-data API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/chartboard/config.toml, then ./chartboard.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built dashboard
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the built UI
        #[arg(long)]
        dist: Option<PathBuf>,
    },

    /// Fetch all four datasets and print the dashboard
    Snapshot {
        /// Chart-data API base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print whatever has settled after this many seconds instead of
        /// waiting for every dataset
        #[arg(long)]
        wait_secs: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, report) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, LoadReport::file(path)),
        None => Config::load_default(),
    };

    logging::init(&config.logging);
    report.log();

    match cli.command {
        Commands::Serve { host, port, dist } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            tracing::info!("Serving dashboard from {:?}", config.server.dist_dir);
            server::serve(&config.server).await?;
        }

        Commands::Snapshot {
            api_url,
            format,
            wait_secs,
        } => {
            if let Some(url) = api_url {
                config.api.base_url = url;
            }

            let client = HttpChartClient::new(&config.api.base_url)
                .context("Failed to build HTTP client")?;
            tracing::info!("Loading dashboard from {}", client.base_url());

            let view = DashboardView::mount(Arc::new(client));

            match wait_secs {
                Some(secs) => {
                    if tokio::time::timeout(Duration::from_secs(secs), view.settled())
                        .await
                        .is_err()
                    {
                        tracing::warn!(
                            settled = view.settled_count(),
                            "Not every dataset settled within {}s",
                            secs
                        );
                    }
                }
                None => view.settled().await,
            }

            let snapshot = view.snapshot();
            view.unmount();

            match format {
                OutputFormat::Text => print!("{}", render::text(&snapshot)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&render::json(&snapshot))?)
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
