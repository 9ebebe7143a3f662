use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One recorded transaction, immutable once written. Only documents with
/// `type == "expenses"` participate in the spending analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub month: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Current savings balance for a user. Mutated elsewhere; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub balance: f64,
}
