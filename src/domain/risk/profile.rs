//! Caller-supplied investor profile and its validation rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Accepted range for `age`, in years.
pub const AGE_RANGE: (f64, f64) = (0.0, 130.0);
/// Accepted range for `investmentHorizonYears`.
pub const HORIZON_RANGE: (f64, f64) = (0.0, 100.0);
/// Accepted range for the self-reported 0-100 scales.
pub const SCALE_RANGE: (f64, f64) = (0.0, 100.0);
/// Accepted range for `emergencyFundMonths`.
pub const EMERGENCY_FUND_RANGE: (f64, f64) = (0.0, 600.0);

/// The five raw inputs of a risk assessment.
///
/// Field names on the wire are camelCase. The shorter names used by older
/// clients (`investmentHorizon`, `emergencyFund`) are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfileInput {
    /// Age in years.
    pub age: f64,
    /// Years until the money is needed.
    #[serde(alias = "investmentHorizon")]
    pub investment_horizon_years: f64,
    /// Self-reported willingness to accept volatility, already on 0-100.
    pub risk_tolerance: f64,
    /// Months of expenses held as an emergency fund.
    #[serde(alias = "emergencyFund")]
    pub emergency_fund_months: f64,
    /// Self-reported income stability, already on 0-100.
    pub income_stability: f64,
}

impl RiskProfileInput {
    /// Creates and validates a profile.
    pub fn new(
        age: f64,
        investment_horizon_years: f64,
        risk_tolerance: f64,
        emergency_fund_months: f64,
        income_stability: f64,
    ) -> Result<Self, ValidationError> {
        let input = Self {
            age,
            investment_horizon_years,
            risk_tolerance,
            emergency_fund_months,
            income_stability,
        };
        input.validate()?;
        Ok(input)
    }

    /// Checks every field independently, in declaration order, and reports the
    /// first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_field("age", self.age, AGE_RANGE)?;
        check_field(
            "investmentHorizonYears",
            self.investment_horizon_years,
            HORIZON_RANGE,
        )?;
        check_field("riskTolerance", self.risk_tolerance, SCALE_RANGE)?;
        check_field(
            "emergencyFundMonths",
            self.emergency_fund_months,
            EMERGENCY_FUND_RANGE,
        )?;
        check_field("incomeStability", self.income_stability, SCALE_RANGE)?;
        Ok(())
    }
}

fn check_field(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if value < min || value > max {
        return Err(ValidationError::out_of_range(field, min, max, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RiskProfileInput {
        RiskProfileInput::new(35.0, 10.0, 50.0, 6.0, 70.0).unwrap()
    }

    #[test]
    fn new_accepts_in_range_values() {
        let input = valid();
        assert_eq!(input.age, 35.0);
        assert_eq!(input.income_stability, 70.0);
    }

    #[test]
    fn domain_edges_are_inclusive() {
        assert!(RiskProfileInput::new(0.0, 0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(RiskProfileInput::new(130.0, 100.0, 100.0, 600.0, 100.0).is_ok());
    }

    #[test]
    fn negative_age_is_rejected_with_field_name() {
        let err = RiskProfileInput::new(-1.0, 10.0, 50.0, 6.0, 70.0).unwrap_err();
        assert_eq!(err.field(), "age");
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn tolerance_above_100_is_rejected() {
        let err = RiskProfileInput::new(35.0, 10.0, 100.5, 6.0, 70.0).unwrap_err();
        assert_eq!(err.field(), "riskTolerance");
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        let err = RiskProfileInput::new(35.0, f64::NAN, 50.0, 6.0, 70.0).unwrap_err();
        assert_eq!(err, ValidationError::not_finite("investmentHorizonYears"));

        let err = RiskProfileInput::new(35.0, 10.0, 50.0, f64::INFINITY, 70.0).unwrap_err();
        assert_eq!(err, ValidationError::not_finite("emergencyFundMonths"));
    }

    #[test]
    fn first_failing_field_wins() {
        let err = RiskProfileInput::new(200.0, -5.0, 500.0, -1.0, -1.0).unwrap_err();
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{
            "age": 25,
            "investmentHorizonYears": 20,
            "riskTolerance": 90,
            "emergencyFundMonths": 12,
            "incomeStability": 90
        }"#;
        let input: RiskProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.investment_horizon_years, 20.0);
        assert_eq!(input.emergency_fund_months, 12.0);
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let json = r#"{
            "age": 65,
            "investmentHorizon": 2,
            "riskTolerance": 10,
            "emergencyFund": 1,
            "incomeStability": 20
        }"#;
        let input: RiskProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.investment_horizon_years, 2.0);
        assert_eq!(input.emergency_fund_months, 1.0);
    }

    #[test]
    fn serializes_with_canonical_names() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["investmentHorizonYears"], 10.0);
        assert_eq!(json["emergencyFundMonths"], 6.0);
        assert!(json.get("investmentHorizon").is_none());
    }
}
