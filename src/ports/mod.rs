//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RiskAnalysisRepository` - Persistence of completed risk analyses

mod risk_analysis_repository;

pub use risk_analysis_repository::{RiskAnalysisRepository, MAX_HISTORY_LIMIT};
