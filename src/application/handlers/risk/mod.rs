//! Risk analysis application handlers.
//!
//! Command and query handlers for scoring risk profiles and reading back results.

mod analyze_risk_profile;
mod get_latest_risk_analysis;
mod list_risk_analyses;

pub use analyze_risk_profile::{
    AnalyzeRiskProfileCommand, AnalyzeRiskProfileHandler, AnalyzeRiskProfileResult,
};
pub use get_latest_risk_analysis::{GetLatestRiskAnalysisHandler, GetLatestRiskAnalysisQuery};
pub use list_risk_analyses::{
    ListRiskAnalysesHandler, ListRiskAnalysesQuery, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT,
};
