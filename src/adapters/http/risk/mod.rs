//! Risk analysis HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse, HistoryParams, RiskAnalysisResponse, RiskProfileRequest};
pub use handlers::{RiskApiError, RiskAppState};
pub use routes::risk_router;
