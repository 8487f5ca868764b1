//! TOPSIS service binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use topsis_service::adapters::email::{ResendConfig, ResendMailer};
use topsis_service::adapters::http::{build_router, TopsisAppState};
use topsis_service::adapters::table::{CsvResultExporter, CsvTableParser};
use topsis_service::config::{AppConfig, ServerConfig};
use topsis_service::ports::ResultMailer;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("topsis-service failed to start: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let mailer = ResendMailer::new(ResendConfig::from_email_config(&config.email))?;
    if !mailer.is_configured() {
        tracing::warn!("No e-mail API key configured; e-mail delivery will be refused");
    }

    let state = TopsisAppState::new(
        Arc::new(CsvTableParser::new()),
        Arc::new(CsvResultExporter::new()),
        Arc::new(mailer),
    );
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "TOPSIS service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("TOPSIS service stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
