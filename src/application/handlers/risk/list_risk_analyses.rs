//! ListRiskAnalyses - Query handler for a user's analysis history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::risk::RiskAnalysis;
use crate::ports::RiskAnalysisRepository;

pub use crate::ports::MAX_HISTORY_LIMIT;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Query for a user's analyses, newest first.
#[derive(Debug, Clone)]
pub struct ListRiskAnalysesQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

impl ListRiskAnalysesQuery {
    /// Requested limit, defaulted and capped.
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .min(MAX_HISTORY_LIMIT)
    }
}

/// Handler for listing analysis history.
pub struct ListRiskAnalysesHandler {
    repository: Arc<dyn RiskAnalysisRepository>,
}

impl ListRiskAnalysesHandler {
    pub fn new(repository: Arc<dyn RiskAnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListRiskAnalysesQuery) -> Result<Vec<RiskAnalysis>, DomainError> {
        let limit = query.effective_limit();
        self.repository.list_for_user(&query.user_id, limit).await
    }
}
