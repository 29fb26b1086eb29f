//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST surface
//! - `storage` - repository implementations

pub mod http;
pub mod storage;

pub use http::{api_router, with_service_layers};
pub use storage::InMemoryRiskAnalysisRepository;
