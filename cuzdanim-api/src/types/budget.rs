use super::Currency;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// `spent`, `remaining`, `percentage_used` and `status` are computed by the
/// backend for the requested period.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub category_name: String,
    pub category_icon: Option<String>,
    pub category_color: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub period_start_date: DateTime<Utc>,
    pub period_end_date: DateTime<Utc>,
    pub alert_threshold_percentage: f64,
    pub alert_when_exceeded: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub spent: f64,
    pub remaining: f64,
    pub percentage_used: f64,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    pub category_id: String,
    pub name: String,
    pub amount: f64,
    pub currency: Currency,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub alert_threshold_percentage: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetRequest {
    pub name: String,
    pub amount: f64,
    pub currency: Currency,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub alert_threshold_percentage: f64,
}
