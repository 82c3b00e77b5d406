use anyhow::Result;
use career_portal_bff::{start_web_server, ApiConfig};
use clap::Parser;
use std::net::IpAddr;
use std::time::Duration;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "career-portal-bff")]
#[command(about = "Backend-for-frontend in front of the career portal PHP backend")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Address to bind
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    address: IpAddr,

    /// Backend base URL, overrides config.yaml and BACKEND_URL
    #[arg(long)]
    backend_url: Option<String>,

    /// Upstream timeout in seconds, 0 disables it
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Upload size limit for multipart bodies
    #[arg(long)]
    max_body_mb: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("career_portal_bff=info,rocket=warn"));
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");

    if json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_current_span(false).with_span_list(false))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    let mut config = ApiConfig::load()?;
    if let Some(url) = cli.backend_url.as_deref() {
        info!("Backend URL overridden from command line");
        config = config.with_backend_url(url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Some(secs).filter(|s| *s > 0).map(Duration::from_secs));
    }
    if let Some(limit) = cli.max_body_mb {
        config = config.with_max_body_mb(limit);
    }

    start_web_server(config, cli.address, cli.port).await
}
