//! Turns a month of raw expense transactions into the aggregates and the
//! fixed-shape feature vector the classifier expects.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::models::transactions::Transaction;

/// Numeric codes for the known spending categories; anything else encodes as 0.
const CATEGORY_ENCODING: &[(&str, u32)] = &[
    ("food", 1),
    ("transport", 2),
    ("entertainment", 3),
    ("shopping", 4),
    ("utilitas", 5),
    ("hiburan", 6),
    ("lain-lain", 7),
    ("saving", 8),
];

pub const DEFAULT_CATEGORY: &str = "default";

pub fn encode_category(category: &str) -> u32 {
    let category = category.to_lowercase();

    CATEGORY_ENCODING
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, code)| *code)
        .unwrap_or(0)
}

/// Stable hash of the user id into [0, 1000). SHA-256 based so the same user
/// maps to the same value across processes and restarts.
pub fn encode_user_id(user_id: &str) -> u32 {
    let digest = Sha256::digest(user_id.as_bytes());
    let value = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

    value % 1000
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    pub total_spending: f64,
    pub dominant_category: String,
}

/// Sums absolute expense amounts and picks the most frequent category.
/// Returns `None` for an empty month; the caller maps that to NotFound.
pub fn aggregate(transactions: &[Transaction]) -> Option<MonthlyAggregate> {
    if transactions.is_empty() {
        return None;
    }

    let mut total_spending = 0.0;
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for transaction in transactions {
        total_spending += transaction.amount.abs();
        let category = transaction.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        *counts.entry(category).or_insert(0) += 1;
    }

    // Ordered map, so a count tie always resolves to the same category and
    // repeated calls over the same data stay byte-identical.
    let dominant_category = counts
        .iter()
        .max_by_key(|(_, count)| *count)
        .map(|(category, _)| category.to_string())?;

    Some(MonthlyAggregate {
        total_spending,
        dominant_category,
    })
}

/// Share of the month's money flow that stayed in savings:
/// balance / (balance + spending) * 100, with 0 for an empty denominator.
/// Not clamped; a negative balance pushes it below zero.
pub fn savings_percentage(savings_balance: f64, total_spending: f64) -> f64 {
    let denominator = savings_balance + total_spending;
    if denominator == 0.0 {
        return 0.0;
    }

    (savings_balance / denominator) * 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub user_id_encoded: f32,
    pub category_encoded: f32,
    pub amount_encoded: f32,
}

impl FeatureVector {
    pub const DIM: usize = 3;

    pub fn derive(user_id: &str, aggregate: &MonthlyAggregate) -> Self {
        FeatureVector {
            user_id_encoded: encode_user_id(user_id) as f32 / 1000.0,
            category_encoded: encode_category(&aggregate.dominant_category) as f32 / 100.0,
            // Log-normalized so large rupiah amounts stay in a small range.
            amount_encoded: (aggregate.total_spending.ln_1p() / 10.0) as f32,
        }
    }

    pub fn to_vec(&self) -> Vec<f32> {
        vec![
            self.user_id_encoded,
            self.category_encoded,
            self.amount_encoded,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, category: Option<&str>) -> Transaction {
        Transaction {
            id: None,
            user_id: "user-1".to_string(),
            month: "2024-05".to_string(),
            amount,
            category: category.map(str::to_string),
            kind: "expenses".to_string(),
        }
    }

    #[test]
    fn aggregate_of_empty_month_is_none() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn aggregate_sums_absolute_amounts() {
        let transactions = vec![
            expense(150_000.0, Some("food")),
            expense(-50_000.0, Some("food")),
            expense(300_000.0, Some("transport")),
        ];

        let result = aggregate(&transactions).unwrap();
        assert_eq!(result.total_spending, 500_000.0);
        assert_eq!(result.dominant_category, "food");
    }

    #[test]
    fn missing_category_counts_as_default() {
        let transactions = vec![expense(10_000.0, None)];

        let result = aggregate(&transactions).unwrap();
        assert_eq!(result.dominant_category, DEFAULT_CATEGORY);
    }

    #[test]
    fn dominant_category_tie_break_is_deterministic() {
        let transactions = vec![
            expense(1.0, Some("transport")),
            expense(1.0, Some("food")),
        ];

        let first = aggregate(&transactions).unwrap();
        for _ in 0..10 {
            assert_eq!(aggregate(&transactions).unwrap(), first);
        }
    }

    #[test]
    fn savings_percentage_is_exact() {
        let percentage = savings_percentage(1_000_000.0, 500_000.0);
        assert!((percentage - 1_000_000.0 / 1_500_000.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn savings_percentage_guards_zero_denominator() {
        assert_eq!(savings_percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn savings_percentage_is_not_clamped() {
        assert!(savings_percentage(-200.0, 500.0) < 0.0);
    }

    #[test]
    fn category_encoding_is_case_insensitive() {
        assert_eq!(encode_category("Food"), 1);
        assert_eq!(encode_category("Utilitas"), 5);
        assert_eq!(encode_category("HIBURAN"), 6);
        assert_eq!(encode_category("unknown-thing"), 0);
    }

    #[test]
    fn user_id_encoding_is_stable_and_bounded() {
        let first = encode_user_id("user-abc");
        assert!(first < 1000);
        assert_eq!(encode_user_id("user-abc"), first);
        assert_ne!(encode_user_id("user-abc"), encode_user_id("user-xyz"));
    }

    #[test]
    fn feature_vector_has_fixed_dimension() {
        let aggregate = MonthlyAggregate {
            total_spending: 500_000.0,
            dominant_category: "food".to_string(),
        };

        let vector = FeatureVector::derive("user-1", &aggregate);
        assert_eq!(vector.to_vec().len(), FeatureVector::DIM);
        assert!((vector.category_encoded - 0.01).abs() < 1e-6);
    }
}
