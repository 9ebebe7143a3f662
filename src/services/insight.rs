use std::sync::Arc;

use async_trait::async_trait;
use mongodb::Database;
use tokio::sync::oneshot;

use super::{RequestHandler, Service, ServiceError};
use crate::analysis::{alert, features, risk};
use crate::model::{self, SpendingClassifier};
use crate::models::insight::{FinancialIndicators, SpendingInsight};
use crate::repositories::transactions::TransactionRepository;

pub enum InsightRequest {
    PredictSpending {
        user_id: String,
        month: String,
        response: oneshot::Sender<Result<SpendingInsight, ServiceError>>,
    },
}

#[derive(Clone)]
pub struct InsightRequestHandler {
    repository: TransactionRepository,
    classifier: Arc<SpendingClassifier>,
}

impl InsightRequestHandler {
    pub fn new(db: Database, classifier: Arc<SpendingClassifier>) -> Self {
        let repository = TransactionRepository::new(db);

        InsightRequestHandler {
            repository,
            classifier,
        }
    }

    async fn predict_spending(
        &self,
        user_id: &str,
        month: &str,
    ) -> Result<SpendingInsight, ServiceError> {
        let transactions = self
            .repository
            .get_expenses_for_month(user_id, month)
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))?;

        let aggregate = match features::aggregate(&transactions) {
            Some(aggregate) => aggregate,
            None => {
                log::warn!("No transactions found for user {} in month {}", user_id, month);
                return Err(ServiceError::NotFound);
            }
        };

        let savings_balance = self
            .repository
            .get_savings_balance(user_id)
            .await
            .map_err(|e| ServiceError::Database(e.to_string()))?;

        let savings_percentage =
            features::savings_percentage(savings_balance, aggregate.total_spending);

        let feature_vector = features::FeatureVector::derive(user_id, &aggregate);
        let score = self
            .classifier
            .predict(&feature_vector)
            .map_err(|e| ServiceError::Model(e.to_string()))?;

        let (spending_status, risk_assessment) = risk::classify(score, savings_percentage);
        let alert = alert::build_alert(&spending_status, aggregate.total_spending, savings_balance);

        Ok(SpendingInsight {
            financial_indicators: FinancialIndicators {
                total_spending: aggregate.total_spending,
                savings_balance,
                savings_percentage,
                prediction_score: score,
            },
            spending_status,
            alert,
            risk_assessment,
            prediction: model::prediction_label(score),
        })
    }
}

#[async_trait]
impl RequestHandler<InsightRequest> for InsightRequestHandler {
    async fn handle_request(&self, request: InsightRequest) {
        match request {
            InsightRequest::PredictSpending {
                user_id,
                month,
                response,
            } => {
                let insight = self.predict_spending(&user_id, &month).await;
                let _ = response.send(insight);
            }
        }
    }
}

pub struct InsightService;

impl InsightService {
    pub fn new() -> Self {
        InsightService {}
    }
}

#[async_trait]
impl Service<InsightRequest, InsightRequestHandler> for InsightService {}
