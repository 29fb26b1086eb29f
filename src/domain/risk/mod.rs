//! Risk module - investor risk profiling.
//!
//! Turns five self-reported inputs into a composite risk score, a risk
//! category, a target asset allocation, and advisory text.
//!
//! # Pipeline
//!
//! ```text
//! RiskProfileInput -> SubScores -> composite score -> RiskBand
//!                                                       |-> RiskCategory
//!                                                       |-> AssetAllocation
//!                  (input + category) -> recommendations
//! ```
//!
//! Everything here is pure and synchronous. Persisting results is the job of
//! the `RiskAnalysisRepository` port.

mod analysis;
mod analyzer;
mod bands;
mod profile;
mod recommendations;
mod scoring;

pub use analysis::RiskAnalysis;
pub use analyzer::{RiskAnalysisResult, RiskAnalyzer};
pub use bands::{AssetAllocation, RiskBand, RiskCategory, RISK_BANDS};
pub use profile::{
    RiskProfileInput, AGE_RANGE, EMERGENCY_FUND_RANGE, HORIZON_RANGE, SCALE_RANGE,
};
pub use recommendations::{
    generate as generate_recommendations, matching_kinds, RecommendationCatalog,
    RecommendationKind, RECOMMENDATION_RULES,
};
pub use scoring::{
    age_score, emergency_score, horizon_score, stability_score, tolerance_score, SubScores,
    AGE_WEIGHT, EMERGENCY_WEIGHT, HORIZON_WEIGHT, STABILITY_WEIGHT, TOLERANCE_WEIGHT,
};
