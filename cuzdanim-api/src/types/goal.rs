use super::Currency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: f64,
    pub current_amount: f64,
    pub currency: String,
    pub target_date: DateTime<Utc>,
    pub status: String,
    pub progress_percentage: f64,
    pub days_remaining: i64,
    pub remaining_amount: f64,
    pub image_url: Option<String>,
    pub icon: Option<String>,
    pub is_shared: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_amount: f64,
    pub currency: Currency,
    pub target_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_amount: f64,
    pub currency: Currency,
    pub target_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddContributionRequest {
    pub amount: f64,
    pub currency: Currency,
}
