//! Risk Profiler server entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use risk_profiler::adapters::{api_router, with_service_layers, InMemoryRiskAnalysisRepository};
use risk_profiler::config::{AppConfig, ServerConfig};
use risk_profiler::domain::risk::RiskAnalyzer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let analyzer = Arc::new(RiskAnalyzer::new(config.risk.catalog()));
    let repository = Arc::new(InMemoryRiskAnalysisRepository::new());
    let app = with_service_layers(api_router(analyzer, repository), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        timeout_secs = config.server.request_timeout_secs,
        "Risk profiler listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Risk profiler stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .init();
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No handler could be installed; run until killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
