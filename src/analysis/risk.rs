//! Maps the classifier score and savings ratio into the discrete status,
//! risk level, and financial-health index. Pure and total over its inputs.

use crate::models::insight::{RiskAssessment, SpendingRiskLevel, SpendingStatus};

pub const LOW_RISK_CUTOFF: f32 = 0.3;
pub const HIGH_RISK_CUTOFF: f32 = 0.7;

/// Below this savings share, spending has exceeded the available balance.
pub const SAFE_SAVINGS_PERCENTAGE: f64 = 50.0;

const SCORE_WEIGHT: f64 = 0.6;
const SAVINGS_WEIGHT: f64 = 0.4;

const CRITICAL_OVERSPENDING: SpendingStatus = SpendingStatus {
    code: "CRITICAL_OVERSPENDING",
    level: "HIGH RISK",
    description: "Pengeluaran Melebihi Tabungan",
};

const POTENTIAL_OVERSPENDING: SpendingStatus = SpendingStatus {
    code: "POTENTIAL_OVERSPENDING",
    level: "MODERATE RISK",
    description: "Pola Pengeluaran Berisiko",
};

const HEALTHY_SPENDING: SpendingStatus = SpendingStatus {
    code: "HEALTHY_SPENDING",
    level: "LOW RISK",
    description: "Manajemen Keuangan Baik",
};

impl SpendingRiskLevel {
    pub fn from_score(score: f32) -> Self {
        if score < LOW_RISK_CUTOFF {
            SpendingRiskLevel::Low
        } else if score < HIGH_RISK_CUTOFF {
            SpendingRiskLevel::Moderate
        } else {
            SpendingRiskLevel::High
        }
    }
}

/// Weighted blend of the inverted prediction score and the normalized
/// savings share, clamped to [0, 1] whatever the inputs.
pub fn financial_health_index(score: f32, savings_percentage: f64) -> f64 {
    let savings_component = (savings_percentage / 100.0).clamp(0.0, 1.0);
    let blended = SCORE_WEIGHT * (1.0 - score as f64) + SAVINGS_WEIGHT * savings_component;

    blended.clamp(0.0, 1.0)
}

/// Decision table: a savings share under 50% means spending already exceeds
/// the balance and wins over the score; otherwise a high score flags a risky
/// pattern; everything else is healthy.
pub fn classify(score: f32, savings_percentage: f64) -> (SpendingStatus, RiskAssessment) {
    let spending_risk_level = SpendingRiskLevel::from_score(score);

    let status = if savings_percentage < SAFE_SAVINGS_PERCENTAGE {
        CRITICAL_OVERSPENDING
    } else if spending_risk_level == SpendingRiskLevel::High {
        POTENTIAL_OVERSPENDING
    } else {
        HEALTHY_SPENDING
    };

    let assessment = RiskAssessment {
        spending_risk_level,
        financial_health_index: financial_health_index(score, savings_percentage),
    };

    (status, assessment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bands_partition_the_score_range() {
        assert_eq!(SpendingRiskLevel::from_score(0.0), SpendingRiskLevel::Low);
        assert_eq!(SpendingRiskLevel::from_score(0.29), SpendingRiskLevel::Low);
        assert_eq!(
            SpendingRiskLevel::from_score(0.3),
            SpendingRiskLevel::Moderate
        );
        assert_eq!(
            SpendingRiskLevel::from_score(0.69),
            SpendingRiskLevel::Moderate
        );
        assert_eq!(SpendingRiskLevel::from_score(0.7), SpendingRiskLevel::High);
        assert_eq!(SpendingRiskLevel::from_score(1.0), SpendingRiskLevel::High);
    }

    #[test]
    fn health_index_stays_clamped_under_extreme_inputs() {
        assert!(financial_health_index(0.0, 10_000.0) <= 1.0);
        assert!(financial_health_index(1.0, -5_000.0) >= 0.0);
        assert!(financial_health_index(0.0, 10_000.0) >= 0.0);
    }

    #[test]
    fn health_index_rewards_low_score_and_high_savings() {
        let healthy = financial_health_index(0.1, 80.0);
        let risky = financial_health_index(0.9, 20.0);
        assert!(healthy > risky);
        assert!((financial_health_index(0.0, 100.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn low_savings_is_critical_regardless_of_score() {
        let (status, assessment) = classify(0.1, 20.0);
        assert_eq!(status.code, "CRITICAL_OVERSPENDING");
        assert_eq!(status.level, "HIGH RISK");
        assert_eq!(assessment.spending_risk_level, SpendingRiskLevel::Low);
    }

    #[test]
    fn high_score_with_healthy_savings_is_potential_overspending() {
        let (status, assessment) = classify(0.9, 66.0);
        assert_eq!(status.code, "POTENTIAL_OVERSPENDING");
        assert_eq!(assessment.spending_risk_level, SpendingRiskLevel::High);
    }

    #[test]
    fn moderate_score_with_healthy_savings_is_healthy() {
        let (status, _) = classify(0.5, 66.0);
        assert_eq!(status.code, "HEALTHY_SPENDING");
        assert_eq!(status.level, "LOW RISK");
    }
}
