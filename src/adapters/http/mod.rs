//! HTTP adapters - REST API implementations.
//!
//! - `risk` - risk analysis endpoints
//! - `middleware` - caller identity extraction

pub mod middleware;
pub mod risk;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::handlers::risk::{
    AnalyzeRiskProfileHandler, GetLatestRiskAnalysisHandler, ListRiskAnalysesHandler,
};
use crate::config::ServerConfig;
use crate::domain::risk::RiskAnalyzer;
use crate::ports::RiskAnalysisRepository;

pub use risk::{risk_router, RiskAppState};

/// Wires the application handlers over one repository and builds the API router.
pub fn api_router(
    analyzer: Arc<RiskAnalyzer>,
    repository: Arc<dyn RiskAnalysisRepository>,
) -> Router {
    let state = RiskAppState::new(
        Arc::new(AnalyzeRiskProfileHandler::new(analyzer, repository.clone())),
        Arc::new(GetLatestRiskAnalysisHandler::new(repository.clone())),
        Arc::new(ListRiskAnalysesHandler::new(repository)),
    );
    risk_router(state)
}

/// Adds request tracing, the request timeout, and CORS to a router.
pub fn with_service_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderName::from_static(middleware::USER_ID_HEADER),
        ])
}
