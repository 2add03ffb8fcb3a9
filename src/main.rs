use anyhow::Context;
use clap::Parser;
use flavornet::{DashboardConfig, DataContext, HttpServer};
use std::path::PathBuf;
use tracing::info;

/// Serve the ingredient co-occurrence dashboard
#[derive(Parser)]
#[command(name = "flavornet", version, about = "Ingredient co-occurrence dashboard")]
struct Args {
    /// YAML configuration file
    #[arg(long, env = "FLAVORNET_CONFIG")]
    config: Option<PathBuf>,

    /// Edge table CSV
    #[arg(long, env = "FLAVORNET_EDGES")]
    edges: Option<PathBuf>,

    /// Per-cuisine occurrence CSV
    #[arg(long, env = "FLAVORNET_CUISINES")]
    cuisines: Option<PathBuf>,

    /// Per-country occurrence CSV
    #[arg(long, env = "FLAVORNET_REGIONS")]
    regions: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    address: Option<String>,

    /// Port
    #[arg(long, short)]
    port: Option<u16>,

    /// Rescale target maximum
    #[arg(long)]
    rescale_max: Option<f64>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => DashboardConfig::default(),
        };

        if let Some(edges) = self.edges {
            config.data.edges = edges;
        }
        if self.cuisines.is_some() {
            config.data.cuisines = self.cuisines;
        }
        if self.regions.is_some() {
            config.data.regions = self.regions;
        }
        if let Some(address) = self.address {
            config.server.address = address;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(k) = self.rescale_max {
            config.render.rescale_max = k;
        }

        config.render.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Args::parse().into_config()?;

    info!("Flavornet v{}", flavornet::version());
    let ctx = DataContext::load(&config.data).context("loading dashboard data")?;

    let server = HttpServer::new(ctx, config.render, config.server);
    server.start().await?;

    Ok(())
}
