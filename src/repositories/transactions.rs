use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Database;

use crate::models::transactions::{SavingsRecord, Transaction};

#[derive(Clone)]
pub struct TransactionRepository {
    db: Database,
}

impl TransactionRepository {
    pub fn new(db: Database) -> Self {
        TransactionRepository { db }
    }

    pub async fn get_expenses_for_month(
        &self,
        user_id: &str,
        month: &str,
    ) -> Result<Vec<Transaction>, anyhow::Error> {
        let cursor = self
            .db
            .collection::<Transaction>("transactions")
            .find(doc! { "user_id": user_id, "month": month, "type": "expenses" })
            .await?;

        let transactions = cursor.try_collect().await?;

        Ok(transactions)
    }

    /// A user without a savings record reads as a zero balance.
    pub async fn get_savings_balance(&self, user_id: &str) -> Result<f64, anyhow::Error> {
        let savings = self
            .db
            .collection::<SavingsRecord>("savings")
            .find_one(doc! { "user_id": user_id })
            .await?;

        Ok(savings.map(|record| record.balance).unwrap_or(0.0))
    }
}
