use super::{Currency, TransactionType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub account_name: String,
    pub category_id: String,
    pub category_name: String,
    pub r#type: String,
    pub amount: f64,
    pub currency: String,
    pub transaction_date: DateTime<Utc>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub receipt_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_auto_categorized: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub account_id: String,
    pub category_id: String,
    pub r#type: TransactionType,
    pub amount: f64,
    pub currency: Currency,
    pub transaction_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    pub category_id: String,
    pub amount: f64,
    pub currency: Currency,
    pub transaction_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Date-range filter accepted by the transaction list and report endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}
