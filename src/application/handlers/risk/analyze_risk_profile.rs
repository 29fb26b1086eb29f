//! AnalyzeRiskProfile - Command handler that scores a profile and records the result.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::risk::{RiskAnalysis, RiskAnalyzer, RiskProfileInput};
use crate::ports::RiskAnalysisRepository;

/// Command to analyze a risk profile for a user.
#[derive(Debug, Clone)]
pub struct AnalyzeRiskProfileCommand {
    pub user_id: UserId,
    pub input: RiskProfileInput,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeRiskProfileResult {
    pub analysis: RiskAnalysis,
}

/// Handler for analyzing risk profiles.
pub struct AnalyzeRiskProfileHandler {
    analyzer: Arc<RiskAnalyzer>,
    repository: Arc<dyn RiskAnalysisRepository>,
}

impl AnalyzeRiskProfileHandler {
    pub fn new(analyzer: Arc<RiskAnalyzer>, repository: Arc<dyn RiskAnalysisRepository>) -> Self {
        Self {
            analyzer,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeRiskProfileCommand,
    ) -> Result<AnalyzeRiskProfileResult, DomainError> {
        // 1. Validate and score; nothing is stored for rejected input
        let result = self.analyzer.analyze(&cmd.input).map_err(|e| {
            warn!(user_id = %cmd.user_id, field = e.field(), "Rejected risk profile: {}", e);
            DomainError::from(e)
        })?;

        debug!(
            user_id = %cmd.user_id,
            sub_scores = ?self.analyzer.sub_scores(&cmd.input),
            "Computed risk sub-scores"
        );

        // 2. Record for later lookup
        let analysis = RiskAnalysis::record(cmd.user_id, cmd.input, result);
        if let Err(e) = self.repository.save(&analysis).await {
            error!(user_id = %analysis.user_id, "Failed to store risk analysis: {}", e);
            return Err(e);
        }

        info!(
            user_id = %analysis.user_id,
            analysis_id = %analysis.id,
            risk_score = analysis.result.risk_score,
            risk_category = %analysis.result.risk_category,
            "Risk profile analyzed"
        );

        Ok(AnalyzeRiskProfileResult { analysis })
    }
}
