//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod risk;

pub use risk::{
    AnalyzeRiskProfileCommand, AnalyzeRiskProfileHandler, AnalyzeRiskProfileResult,
    GetLatestRiskAnalysisHandler, GetLatestRiskAnalysisQuery, ListRiskAnalysesHandler,
    ListRiskAnalysesQuery,
};
