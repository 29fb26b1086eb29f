//! HTTP handlers for risk analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{error, warn};

use crate::adapters::http::middleware::RequireUser;
use crate::application::handlers::risk::{
    AnalyzeRiskProfileCommand, AnalyzeRiskProfileHandler, GetLatestRiskAnalysisHandler,
    GetLatestRiskAnalysisQuery, ListRiskAnalysesHandler, ListRiskAnalysesQuery,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::risk::{RiskAnalysisResult, RiskProfileInput};

use super::dto::{
    ErrorResponse, HealthResponse, HistoryParams, RiskAnalysisResponse, RiskProfileRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Risk API error that implements IntoResponse.
#[derive(Debug)]
pub enum RiskApiError {
    BadRequest { field: Option<String>, message: String },
    NotFound(String),
    Internal,
}

impl IntoResponse for RiskApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            RiskApiError::BadRequest { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(field.as_deref(), message),
            ),
            RiskApiError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(&resource))
            }
            RiskApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal("An internal error occurred"),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for RiskApiError {
    fn from(error: DomainError) -> Self {
        if error.is_validation() {
            return RiskApiError::BadRequest {
                field: error.details.get("field").cloned(),
                message: error.message,
            };
        }
        match error.code {
            ErrorCode::RiskAnalysisNotFound => RiskApiError::NotFound("Risk analysis".to_string()),
            _ => {
                // Details stay in the logs, never in the response body.
                error!(code = %error.code, details = ?error.details, "Request failed: {}", error.message);
                RiskApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for RiskApiError {
    fn from(rejection: JsonRejection) -> Self {
        RiskApiError::BadRequest {
            field: Some("body".to_string()),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for RiskApiError {
    fn from(rejection: QueryRejection) -> Self {
        RiskApiError::BadRequest {
            field: Some("limit".to_string()),
            message: rejection.body_text(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for risk analysis routes.
#[derive(Clone)]
pub struct RiskAppState {
    pub analyze_handler: Arc<AnalyzeRiskProfileHandler>,
    pub get_latest_handler: Arc<GetLatestRiskAnalysisHandler>,
    pub list_handler: Arc<ListRiskAnalysesHandler>,
}

impl RiskAppState {
    pub fn new(
        analyze_handler: Arc<AnalyzeRiskProfileHandler>,
        get_latest_handler: Arc<GetLatestRiskAnalysisHandler>,
        list_handler: Arc<ListRiskAnalysesHandler>,
    ) -> Self {
        Self {
            analyze_handler,
            get_latest_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/risk-analysis
///
/// Scores the submitted profile and records it for the caller.
pub async fn analyze_risk_profile(
    State(state): State<RiskAppState>,
    RequireUser(user_id): RequireUser,
    payload: Result<Json<RiskProfileRequest>, JsonRejection>,
) -> Result<Json<RiskAnalysisResult>, RiskApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(user_id = %user_id, "Malformed risk profile body: {}", rejection.body_text());
        RiskApiError::from(rejection)
    })?;

    let input = RiskProfileInput::try_from(request).map_err(|e| {
        warn!(user_id = %user_id, field = e.field(), "Rejected risk profile: {}", e);
        RiskApiError::from(DomainError::from(e))
    })?;

    let result = state
        .analyze_handler
        .handle(AnalyzeRiskProfileCommand { user_id, input })
        .await?;

    Ok(Json(result.analysis.result))
}

/// GET /api/risk-analysis
///
/// Returns the caller's most recent analysis.
pub async fn get_latest_risk_analysis(
    State(state): State<RiskAppState>,
    RequireUser(user_id): RequireUser,
) -> Result<Json<RiskAnalysisResponse>, RiskApiError> {
    let latest = state
        .get_latest_handler
        .handle(GetLatestRiskAnalysisQuery { user_id })
        .await?;

    Ok(Json(latest.into()))
}

/// GET /api/risk-analysis/history
///
/// Returns the caller's analyses, newest first.
pub async fn list_risk_analyses(
    State(state): State<RiskAppState>,
    RequireUser(user_id): RequireUser,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<Vec<RiskAnalysisResponse>>, RiskApiError> {
    let Query(params) = params.map_err(|rejection| {
        warn!(user_id = %user_id, "Malformed history query: {}", rejection.body_text());
        RiskApiError::from(rejection)
    })?;

    let analyses = state
        .list_handler
        .handle(ListRiskAnalysesQuery {
            user_id,
            limit: params.limit,
        })
        .await?;

    Ok(Json(analyses.into_iter().map(Into::into).collect()))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_domain_error_maps_to_bad_request() {
        let err = DomainError::validation("age", "Field 'age' is required");
        let api: RiskApiError = err.into();

        match api {
            RiskApiError::BadRequest { field, .. } => assert_eq!(field.as_deref(), Some("age")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = DomainError::new(ErrorCode::RiskAnalysisNotFound, "none");
        let response = RiskApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_error_maps_to_500_without_leaking_detail() {
        let err = DomainError::new(ErrorCode::StorageError, "disk on fire at /var/lib/risk");
        let response = RiskApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("disk on fire"));
    }
}
