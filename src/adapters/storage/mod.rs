//! Storage adapters.
//!
//! - `InMemoryRiskAnalysisRepository` - map-backed store for development and tests

mod in_memory_risk_analysis_repository;

pub use in_memory_risk_analysis_repository::InMemoryRiskAnalysisRepository;
