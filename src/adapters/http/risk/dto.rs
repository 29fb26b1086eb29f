//! HTTP DTOs for risk analysis endpoints.
//!
//! Request fields arrive as loose JSON values so that a missing or mistyped
//! field is reported by name instead of as a generic body rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::risk::{RiskAnalysis, RiskAnalysisResult, RiskProfileInput};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/risk-analysis`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfileRequest {
    pub age: Option<Value>,
    #[serde(alias = "investmentHorizon")]
    pub investment_horizon_years: Option<Value>,
    pub risk_tolerance: Option<Value>,
    #[serde(alias = "emergencyFund")]
    pub emergency_fund_months: Option<Value>,
    pub income_stability: Option<Value>,
}

impl TryFrom<RiskProfileRequest> for RiskProfileInput {
    type Error = ValidationError;

    fn try_from(req: RiskProfileRequest) -> Result<Self, Self::Error> {
        RiskProfileInput::new(
            number("age", req.age)?,
            number("investmentHorizonYears", req.investment_horizon_years)?,
            number("riskTolerance", req.risk_tolerance)?,
            number("emergencyFundMonths", req.emergency_fund_months)?,
            number("incomeStability", req.income_stability)?,
        )
    }
}

fn number(field: &str, value: Option<Value>) -> Result<f64, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::missing_field(field)),
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::not_finite(field)),
        Some(other) => Err(ValidationError::invalid_format(
            field,
            format!("expected a number, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Query string of `GET /api/risk-analysis/history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored analysis as returned to its owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisResponse {
    pub id: String,
    pub input: RiskProfileInput,
    pub result: RiskAnalysisResult,
    pub created_at: Timestamp,
}

impl From<RiskAnalysis> for RiskAnalysisResponse {
    fn from(analysis: RiskAnalysis) -> Self {
        Self {
            id: analysis.id.to_string(),
            input: analysis.input,
            result: analysis.result,
            created_at: analysis.created_at,
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn validation(field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: field.map(|f| serde_json::json!({ "field": f })),
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found", resource),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::risk::RiskAnalyzer;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> Result<RiskProfileInput, ValidationError> {
        let req: RiskProfileRequest = serde_json::from_value(body).unwrap();
        RiskProfileInput::try_from(req)
    }

    #[test]
    fn converts_complete_request() {
        let input = parse(json!({
            "age": 35,
            "investmentHorizonYears": 10,
            "riskTolerance": 50,
            "emergencyFundMonths": 6,
            "incomeStability": 70
        }))
        .unwrap();

        assert_eq!(input.age, 35.0);
        assert_eq!(input.investment_horizon_years, 10.0);
        assert_eq!(input.income_stability, 70.0);
    }

    #[test]
    fn accepts_short_field_aliases() {
        let input = parse(json!({
            "age": 35,
            "investmentHorizon": 10,
            "riskTolerance": 50,
            "emergencyFund": 6,
            "incomeStability": 70
        }))
        .unwrap();

        assert_eq!(input.investment_horizon_years, 10.0);
        assert_eq!(input.emergency_fund_months, 6.0);
    }

    #[test]
    fn missing_field_is_named() {
        let err = parse(json!({
            "age": 35,
            "investmentHorizonYears": 10,
            "emergencyFundMonths": 6,
            "incomeStability": 70
        }))
        .unwrap_err();

        assert_eq!(err, ValidationError::missing_field("riskTolerance"));
    }

    #[test]
    fn null_counts_as_missing() {
        let err = parse(json!({
            "age": null,
            "investmentHorizonYears": 10,
            "riskTolerance": 50,
            "emergencyFundMonths": 6,
            "incomeStability": 70
        }))
        .unwrap_err();

        assert_eq!(err, ValidationError::missing_field("age"));
    }

    #[test]
    fn string_value_is_invalid_format() {
        let err = parse(json!({
            "age": "thirty",
            "investmentHorizonYears": 10,
            "riskTolerance": 50,
            "emergencyFundMonths": 6,
            "incomeStability": 70
        }))
        .unwrap_err();

        assert_eq!(err.field(), "age");
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let err = parse(json!({
            "age": 35,
            "investmentHorizonYears": 10,
            "riskTolerance": 150,
            "emergencyFundMonths": 6,
            "incomeStability": 70
        }))
        .unwrap_err();

        assert_eq!(err.field(), "riskTolerance");
    }

    #[test]
    fn response_uses_camel_case() {
        let input = RiskProfileInput::new(35.0, 10.0, 50.0, 6.0, 70.0).unwrap();
        let result = RiskAnalyzer::default().analyze(&input).unwrap();
        let analysis = RiskAnalysis::record(UserId::new("user-1").unwrap(), input, result);
        let id = analysis.id.to_string();

        let json = serde_json::to_value(RiskAnalysisResponse::from(analysis)).unwrap();

        assert_eq!(json["id"], id);
        assert_eq!(json["result"]["riskScore"], 63);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("userId").is_none());
    }

    #[test]
    fn validation_error_response_carries_field() {
        let json = serde_json::to_value(ErrorResponse::validation(Some("age"), "bad")).unwrap();
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["details"]["field"], "age");
    }
}
