//! Risk analyzer - the single entry point of the scoring pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::bands::{AssetAllocation, RiskBand, RiskCategory};
use super::profile::RiskProfileInput;
use super::recommendations::{self, RecommendationCatalog};
use super::scoring::SubScores;

/// Outcome of one analysis. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisResult {
    /// Composite score, 0-100.
    pub risk_score: u8,
    pub risk_category: RiskCategory,
    pub asset_allocation: AssetAllocation,
    pub recommendations: Vec<String>,
}

/// Stateless analyzer. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    catalog: RecommendationCatalog,
}

impl RiskAnalyzer {
    /// Creates an analyzer that renders recommendations from `catalog`.
    pub fn new(catalog: RecommendationCatalog) -> Self {
        Self { catalog }
    }

    /// Sub-scores for a profile, without validation.
    pub fn sub_scores(&self, input: &RiskProfileInput) -> SubScores {
        SubScores::from_profile(input)
    }

    /// Validates the profile, then scores, categorizes, allocates and
    /// renders recommendations.
    ///
    /// # Errors
    ///
    /// Returns the first field that is non-finite or outside its accepted range.
    /// No partial result is produced.
    pub fn analyze(&self, input: &RiskProfileInput) -> Result<RiskAnalysisResult, ValidationError> {
        input.validate()?;

        let risk_score = self.sub_scores(input).composite();
        let band = RiskBand::for_score(risk_score);
        let recommendations = recommendations::generate(&self.catalog, input, band.category);

        Ok(RiskAnalysisResult {
            risk_score,
            risk_category: band.category,
            asset_allocation: band.allocation,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;

    fn analyze(age: f64, horizon: f64, tolerance: f64, emergency: f64, stability: f64) -> RiskAnalysisResult {
        let input = RiskProfileInput {
            age,
            investment_horizon_years: horizon,
            risk_tolerance: tolerance,
            emergency_fund_months: emergency,
            income_stability: stability,
        };
        RiskAnalyzer::default().analyze(&input).unwrap()
    }

    fn allocation(equities: u8, fixed_income: u8, gold: u8, cash: u8) -> AssetAllocation {
        AssetAllocation {
            equities: Percentage::new(equities),
            fixed_income: Percentage::new(fixed_income),
            gold: Percentage::new(gold),
            cash: Percentage::new(cash),
        }
    }

    #[test]
    fn mid_career_profile_is_moderately_aggressive() {
        // Sub-scores 75/70/50/60/70: 1125 + 1750 + 1500 + 900 + 1050 = 6325 -> 63
        let result = analyze(35.0, 10.0, 50.0, 6.0, 70.0);

        assert_eq!(result.risk_score, 63);
        assert_eq!(result.risk_category, RiskCategory::ModeratelyAggressive);
        assert_eq!(result.asset_allocation, allocation(60, 25, 10, 5));
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("ELSS"));
    }

    #[test]
    fn young_long_horizon_profile_is_aggressive() {
        let result = analyze(25.0, 20.0, 90.0, 12.0, 90.0);

        assert_eq!(result.risk_score, 90);
        assert_eq!(result.risk_category, RiskCategory::Aggressive);
        assert_eq!(result.asset_allocation, allocation(70, 15, 10, 5));
        assert_eq!(result.recommendations.len(), 4);
        assert!(result.recommendations[0].starts_with("Your young age"));
        assert!(result.recommendations[1].starts_with("With your long investment horizon"));
        assert!(result.recommendations[2].starts_with("Consider diversifying"));
    }

    #[test]
    fn retiree_with_thin_cushion_is_conservative() {
        // 20*15 + 10*25 + 10*30 + 20*15 + 20*15 = 1450 -> 14.5 -> 15
        let result = analyze(65.0, 2.0, 10.0, 1.0, 20.0);

        assert_eq!(result.risk_score, 15);
        assert_eq!(result.risk_category, RiskCategory::Conservative);
        assert_eq!(result.asset_allocation, allocation(20, 50, 20, 10));
        assert_eq!(result.recommendations.len(), 6);
        assert!(result.recommendations[0].starts_with("As you approach retirement"));
        assert!(result.recommendations[1].starts_with("With a shorter investment horizon"));
        assert!(result.recommendations[2].starts_with("Consider building your emergency fund"));
        assert!(result.recommendations[3].starts_with("With lower income stability"));
        assert!(result.recommendations[4].starts_with("Focus on debt mutual funds"));
    }

    #[test]
    fn score_rounding_to_forty_selects_moderate_band() {
        // 900 + 1250 + 600 + 900 + 345 = 3995 -> 39.95 -> 40
        let result = analyze(45.0, 5.0, 20.0, 6.0, 23.0);

        assert_eq!(result.risk_score, 40);
        assert_eq!(result.risk_category, RiskCategory::Moderate);
        assert_eq!(result.asset_allocation, allocation(50, 30, 15, 5));
        assert_eq!(result.recommendations.len(), 4);
        assert!(result.recommendations[2].starts_with("A balanced approach"));
    }

    #[test]
    fn invalid_input_is_rejected_before_scoring() {
        let input = RiskProfileInput {
            age: 35.0,
            investment_horizon_years: 10.0,
            risk_tolerance: f64::NAN,
            emergency_fund_months: 6.0,
            income_stability: 70.0,
        };
        let err = RiskAnalyzer::default().analyze(&input).unwrap_err();
        assert_eq!(err.field(), "riskTolerance");
    }

    #[test]
    fn custom_catalog_changes_final_message() {
        let catalog = RecommendationCatalog::default().with_tax_advantaged("Use your 401(k) match first.");
        let analyzer = RiskAnalyzer::new(catalog);
        let input = RiskProfileInput::new(35.0, 10.0, 50.0, 6.0, 70.0).unwrap();

        let result = analyzer.analyze(&input).unwrap();
        assert_eq!(result.recommendations, vec!["Use your 401(k) match first.".to_string()]);
    }

    #[test]
    fn result_serializes_camel_case() {
        let json = serde_json::to_value(analyze(25.0, 20.0, 90.0, 12.0, 90.0)).unwrap();

        assert_eq!(json["riskScore"], 90);
        assert_eq!(json["riskCategory"], "Aggressive");
        assert_eq!(json["assetAllocation"]["fixedIncome"], 15);
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 4);
    }
}
