//! Risk engine configuration

use serde::Deserialize;

use crate::domain::risk::RecommendationCatalog;

use super::error::ValidationError;

/// Tunables for the risk engine
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskConfig {
    /// Replacement text for the tax-advantaged savings recommendation
    pub tax_advantaged_message: Option<String>,
}

impl RiskConfig {
    /// Recommendation texts with any configured overrides applied
    pub fn catalog(&self) -> RecommendationCatalog {
        match &self.tax_advantaged_message {
            Some(message) => RecommendationCatalog::default().with_tax_advantaged(message.trim()),
            None => RecommendationCatalog::default(),
        }
    }

    /// Validate risk configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.tax_advantaged_message {
            Some(message) if message.trim().is_empty() => Err(ValidationError::EmptyTaxMessage),
            _ => Ok(()),
        }
    }
}
