use clap::Parser;
use spamdetect_rs::api::{self, AppState};
use spamdetect_rs::config::Config;
use spamdetect_rs::detection::SpamDetector;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Spam detection API server
#[derive(Parser, Debug)]
#[command(name = "spamdetect-rs", about = "Email spam detection service")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Listen address override, e.g. 0.0.0.0:5000
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration
    let config = if let Some(path) = &args.config {
        Config::from_file(path)?
    } else if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging
    let level = match config.logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let builder = FmtSubscriber::builder().with_max_level(level);
    if config.logging.format == "json" {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())?;
    }

    info!("Starting spamdetect-rs server");

    let listen_addr = args
        .listen
        .unwrap_or_else(|| config.server.listen_addr.clone());

    // Compile the rule catalog once; it is immutable afterwards
    let detector = SpamDetector::new()?;
    let state = Arc::new(AppState { detector });
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!("API listening on: {}", listen_addr);
    info!("Health check: http://{}/api/health", listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
