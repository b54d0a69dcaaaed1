use anyhow::Context;
use clap::Parser;
use orgchart::{EmployeeRecord, HttpServer, OrgChart, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "orgchart", version, about = "In-memory org chart service")]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1", env = "ORGCHART_ADDRESS")]
    address: String,

    /// HTTP port
    #[arg(long, default_value_t = 3000, env = "ORGCHART_PORT")]
    port: u16,

    /// JSON array of employee records to load before serving
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    info!("Org chart v{}", orgchart::version());

    let mut chart = OrgChart::new();
    if let Some(path) = &cli.seed {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let records: Vec<EmployeeRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing seed file {}", path.display()))?;
        let loaded = chart
            .insert_many(&records)
            .context("loading seed records")?;
        info!(loaded, "Seeded chart from {}", path.display());
        for warning in chart.warnings() {
            warn!("{}", warning);
        }
    }

    let config = ServerConfig {
        address: cli.address,
        port: cli.port,
    };
    let server = HttpServer::new(Arc::new(RwLock::new(chart)), config);
    server.start().await.context("HTTP server stopped")?;

    Ok(())
}
