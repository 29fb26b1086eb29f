//! GetLatestRiskAnalysis - Query handler for a user's most recent analysis.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::risk::RiskAnalysis;
use crate::ports::RiskAnalysisRepository;

/// Query for the most recent analysis of a user.
#[derive(Debug, Clone)]
pub struct GetLatestRiskAnalysisQuery {
    pub user_id: UserId,
}

/// Handler for getting the latest analysis.
pub struct GetLatestRiskAnalysisHandler {
    repository: Arc<dyn RiskAnalysisRepository>,
}

impl GetLatestRiskAnalysisHandler {
    pub fn new(repository: Arc<dyn RiskAnalysisRepository>) -> Self {
        Self { repository }
    }

    /// Fails with `RiskAnalysisNotFound` when the user has no history.
    pub async fn handle(&self, query: GetLatestRiskAnalysisQuery) -> Result<RiskAnalysis, DomainError> {
        self.repository
            .find_latest(&query.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RiskAnalysisNotFound,
                    "No risk analysis has been recorded yet",
                )
                .with_detail("user_id", query.user_id.to_string())
            })
    }
}
