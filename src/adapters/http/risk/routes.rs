//! Axum router for risk analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_risk_profile, get_latest_risk_analysis, health, list_risk_analyses, RiskAppState,
};

/// Creates the risk analysis router.
///
/// # Routes
///
/// - `POST /api/risk-analysis` - Score a profile and record it
/// - `GET /api/risk-analysis` - Latest analysis for the caller
/// - `GET /api/risk-analysis/history` - Caller's analyses, newest first
/// - `GET /health` - Liveness probe
pub fn risk_router(state: RiskAppState) -> Router {
    Router::new()
        .route(
            "/api/risk-analysis",
            post(analyze_risk_profile).get(get_latest_risk_analysis),
        )
        .route("/api/risk-analysis/history", get(list_risk_analyses))
        .route("/health", get(health))
        .with_state(state)
}
