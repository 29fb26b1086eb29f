//! Advisory text assembled from the raw profile and its category.
//!
//! Rules are independent predicates evaluated in a fixed order; every rule
//! that matches contributes one message. The message copy lives in a
//! [`RecommendationCatalog`] so deployments can swap market-specific text
//! without touching the rule set.

use serde::{Deserialize, Serialize};

use super::bands::RiskCategory;
use super::profile::RiskProfileInput;

/// Identifies which rule produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    YoungInvestorGrowth,
    NearRetirementPreservation,
    LongHorizonEquity,
    ShortHorizonFixedIncome,
    BuildEmergencyFund,
    LowIncomeStabilityCash,
    AggressiveDiversification,
    ModerateBalanced,
    ConservativeDebt,
    TaxAdvantaged,
}

type Predicate = fn(&RiskProfileInput, RiskCategory) -> bool;

/// Rule order is the output order.
pub const RECOMMENDATION_RULES: &[(RecommendationKind, Predicate)] = &[
    (RecommendationKind::YoungInvestorGrowth, |p: &RiskProfileInput, _: RiskCategory| p.age <= 30.0),
    (RecommendationKind::NearRetirementPreservation, |p: &RiskProfileInput, _: RiskCategory| p.age >= 60.0),
    (RecommendationKind::LongHorizonEquity, |p: &RiskProfileInput, _: RiskCategory| {
        p.investment_horizon_years >= 15.0
    }),
    (RecommendationKind::ShortHorizonFixedIncome, |p: &RiskProfileInput, _: RiskCategory| {
        p.investment_horizon_years <= 5.0
    }),
    (RecommendationKind::BuildEmergencyFund, |p: &RiskProfileInput, _: RiskCategory| {
        p.emergency_fund_months < 6.0
    }),
    (RecommendationKind::LowIncomeStabilityCash, |p: &RiskProfileInput, _: RiskCategory| {
        p.income_stability < 50.0
    }),
    (RecommendationKind::AggressiveDiversification, |_: &RiskProfileInput, c: RiskCategory| {
        c == RiskCategory::Aggressive
    }),
    (RecommendationKind::ModerateBalanced, |_: &RiskProfileInput, c: RiskCategory| {
        c == RiskCategory::Moderate
    }),
    (RecommendationKind::ConservativeDebt, |_: &RiskProfileInput, c: RiskCategory| {
        c == RiskCategory::Conservative
    }),
    (RecommendationKind::TaxAdvantaged, |_: &RiskProfileInput, _: RiskCategory| true),
];

/// Message copy for each recommendation kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCatalog {
    pub young_investor_growth: String,
    pub near_retirement_preservation: String,
    pub long_horizon_equity: String,
    pub short_horizon_fixed_income: String,
    pub build_emergency_fund: String,
    pub low_income_stability_cash: String,
    pub aggressive_diversification: String,
    pub moderate_balanced: String,
    pub conservative_debt: String,
    pub tax_advantaged: String,
}

impl RecommendationCatalog {
    /// Replaces the market-specific tax-advantaged message.
    pub fn with_tax_advantaged(mut self, message: impl Into<String>) -> Self {
        self.tax_advantaged = message.into();
        self
    }

    /// Returns the text for a kind.
    pub fn message(&self, kind: RecommendationKind) -> &str {
        match kind {
            RecommendationKind::YoungInvestorGrowth => &self.young_investor_growth,
            RecommendationKind::NearRetirementPreservation => &self.near_retirement_preservation,
            RecommendationKind::LongHorizonEquity => &self.long_horizon_equity,
            RecommendationKind::ShortHorizonFixedIncome => &self.short_horizon_fixed_income,
            RecommendationKind::BuildEmergencyFund => &self.build_emergency_fund,
            RecommendationKind::LowIncomeStabilityCash => &self.low_income_stability_cash,
            RecommendationKind::AggressiveDiversification => &self.aggressive_diversification,
            RecommendationKind::ModerateBalanced => &self.moderate_balanced,
            RecommendationKind::ConservativeDebt => &self.conservative_debt,
            RecommendationKind::TaxAdvantaged => &self.tax_advantaged,
        }
    }
}

impl Default for RecommendationCatalog {
    /// Copy targeting Indian retail investors.
    fn default() -> Self {
        Self {
            young_investor_growth: "Your young age allows for a higher risk tolerance. Consider focusing on growth-oriented investments like equity mutual funds.".to_string(),
            near_retirement_preservation: "As you approach retirement, consider shifting towards more conservative investments like government bonds and debt funds.".to_string(),
            long_horizon_equity: "With your long investment horizon, you can weather market volatility. Consider a higher allocation to equity markets for long-term growth.".to_string(),
            short_horizon_fixed_income: "With a shorter investment horizon, prioritize capital preservation. Consider increasing allocation to fixed income securities.".to_string(),
            build_emergency_fund: "Consider building your emergency fund to at least 6 months of expenses before taking on high-risk investments.".to_string(),
            low_income_stability_cash: "With lower income stability, consider maintaining a larger cash reserve and being more conservative with your investments.".to_string(),
            aggressive_diversification: "Consider diversifying across large-cap, mid-cap, and small-cap equity funds, with some exposure to international markets.".to_string(),
            moderate_balanced: "A balanced approach with hybrid funds and a mix of equity and debt instruments could be suitable for your risk profile.".to_string(),
            conservative_debt: "Focus on debt mutual funds, government securities, and fixed deposits for stable returns with lower risk.".to_string(),
            tax_advantaged: "Consider tax-efficient investment vehicles like ELSS (Equity Linked Savings Scheme) funds for equity exposure with tax benefits under Section 80C.".to_string(),
        }
    }
}

/// Kinds whose rules match, in rule order.
pub fn matching_kinds(input: &RiskProfileInput, category: RiskCategory) -> Vec<RecommendationKind> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|(_, applies)| applies(input, category))
        .map(|(kind, _)| *kind)
        .collect()
}

/// Builds the recommendation list for a profile.
pub fn generate(
    catalog: &RecommendationCatalog,
    input: &RiskProfileInput,
    category: RiskCategory,
) -> Vec<String> {
    matching_kinds(input, category)
        .into_iter()
        .map(|kind| catalog.message(kind).to_string())
        .collect()
}
