use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpendingRiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertType {
    Urgent,
    Warning,
    Info,
}

/// Discrete overspending classification shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpendingStatus {
    pub code: &'static str,
    pub level: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialIndicators {
    pub total_spending: f64,
    pub savings_balance: f64,
    pub savings_percentage: f64,
    pub prediction_score: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskAssessment {
    pub spending_risk_level: SpendingRiskLevel,
    pub financial_health_index: f64,
}

/// Complete response payload for one (user, month) analysis. Serialized
/// through this fixed schema so every field is always present and typed.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingInsight {
    pub financial_indicators: FinancialIndicators,
    pub spending_status: SpendingStatus,
    pub alert: Alert,
    pub risk_assessment: RiskAssessment,
    pub prediction: &'static str,
}
