//! Sub-score calculators and the weighted aggregator.
//!
//! Each input dimension maps to a 0-100 sub-score. Step calculators are
//! ordered `(threshold, score)` tables scanned top-down; the first matching
//! row wins, so rows must stay in strictly monotonic threshold order.

use serde::{Deserialize, Serialize};

use super::profile::RiskProfileInput;

/// `age <= threshold` bands, youngest first.
const AGE_BANDS: &[(f64, u8)] = &[(30.0, 90), (40.0, 75), (50.0, 60), (60.0, 40)];
const AGE_FLOOR: u8 = 20;

/// `years >= threshold` bands, longest first.
const HORIZON_BANDS: &[(f64, u8)] = &[(20.0, 90), (15.0, 80), (10.0, 70), (5.0, 50), (3.0, 30)];
const HORIZON_FLOOR: u8 = 10;

/// `months >= threshold` bands, largest first.
const EMERGENCY_BANDS: &[(f64, u8)] = &[(12.0, 90), (9.0, 80), (6.0, 60), (3.0, 40)];
const EMERGENCY_FLOOR: u8 = 20;

/// Dimension weights in hundredths. Must sum to 100.
pub const AGE_WEIGHT: u32 = 15;
pub const HORIZON_WEIGHT: u32 = 25;
pub const TOLERANCE_WEIGHT: u32 = 30;
pub const EMERGENCY_WEIGHT: u32 = 15;
pub const STABILITY_WEIGHT: u32 = 15;

/// Younger investors get a larger risk budget.
pub fn age_score(age: f64) -> f64 {
    let score = AGE_BANDS
        .iter()
        .find(|(max_age, _)| age <= *max_age)
        .map_or(AGE_FLOOR, |(_, score)| *score);
    f64::from(score)
}

/// Longer horizons can ride out more volatility.
pub fn horizon_score(years: f64) -> f64 {
    let score = HORIZON_BANDS
        .iter()
        .find(|(min_years, _)| years >= *min_years)
        .map_or(HORIZON_FLOOR, |(_, score)| *score);
    f64::from(score)
}

/// Self-reported tolerance is already on the 0-100 scale.
pub fn tolerance_score(risk_tolerance: f64) -> f64 {
    risk_tolerance
}

/// A deeper cash cushion allows more investment risk.
pub fn emergency_score(months: f64) -> f64 {
    let score = EMERGENCY_BANDS
        .iter()
        .find(|(min_months, _)| months >= *min_months)
        .map_or(EMERGENCY_FLOOR, |(_, score)| *score);
    f64::from(score)
}

/// Self-reported stability is already on the 0-100 scale.
pub fn stability_score(income_stability: f64) -> f64 {
    income_stability
}

/// Per-dimension sub-scores for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub age_score: f64,
    pub horizon_score: f64,
    pub tolerance_score: f64,
    pub emergency_score: f64,
    pub stability_score: f64,
}

impl SubScores {
    /// Runs all five calculators.
    pub fn from_profile(input: &RiskProfileInput) -> Self {
        Self {
            age_score: age_score(input.age),
            horizon_score: horizon_score(input.investment_horizon_years),
            tolerance_score: tolerance_score(input.risk_tolerance),
            emergency_score: emergency_score(input.emergency_fund_months),
            stability_score: stability_score(input.income_stability),
        }
    }

    /// Weighted sum scaled by 100.
    ///
    /// Integer sub-scores give an exact integer here, so the single division
    /// in [`SubScores::composite`] is the only rounding step.
    pub fn weighted_sum_hundredths(&self) -> f64 {
        self.age_score * f64::from(AGE_WEIGHT)
            + self.horizon_score * f64::from(HORIZON_WEIGHT)
            + self.tolerance_score * f64::from(TOLERANCE_WEIGHT)
            + self.emergency_score * f64::from(EMERGENCY_WEIGHT)
            + self.stability_score * f64::from(STABILITY_WEIGHT)
    }

    /// Composite risk score, rounded half away from zero and clamped to 0-100.
    pub fn composite(&self) -> u8 {
        let score = (self.weighted_sum_hundredths() / 100.0).round();
        // NaN can only come from unvalidated input; treat it as no risk budget.
        if score.is_nan() {
            return 0;
        }
        score.clamp(0.0, 100.0) as u8
    }
}
