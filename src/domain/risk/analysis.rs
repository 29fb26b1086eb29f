//! Stored record of a completed analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RiskAnalysisId, Timestamp, UserId};

use super::analyzer::RiskAnalysisResult;
use super::profile::RiskProfileInput;

/// The input, result and time of one analysis for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub id: RiskAnalysisId,
    pub user_id: UserId,
    pub input: RiskProfileInput,
    pub result: RiskAnalysisResult,
    pub created_at: Timestamp,
}

impl RiskAnalysis {
    /// Records a fresh analysis stamped with the current time.
    pub fn record(user_id: UserId, input: RiskProfileInput, result: RiskAnalysisResult) -> Self {
        Self::record_at(user_id, input, result, Timestamp::now())
    }

    /// Records an analysis with an explicit timestamp.
    pub fn record_at(
        user_id: UserId,
        input: RiskProfileInput,
        result: RiskAnalysisResult,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: RiskAnalysisId::new(),
            user_id,
            input,
            result,
            created_at,
        }
    }
}
