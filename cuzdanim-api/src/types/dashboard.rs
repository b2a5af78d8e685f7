use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_balance: f64,
    pub currency: String,
    pub current_month_income: f64,
    pub current_month_expense: f64,
    pub current_month_net: f64,
    pub last_month_income: f64,
    pub last_month_expense: f64,
    pub income_change_percentage: f64,
    pub expense_change_percentage: f64,
    pub total_accounts: u32,
    pub active_accounts: u32,
    pub total_goals: u32,
    pub active_goals: u32,
    pub completed_goals_this_month: u32,
    #[serde(default)]
    pub budget_alerts: Vec<BudgetAlert>,
    #[serde(default)]
    pub recent_transactions: Vec<RecentTransaction>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    pub budget_id: String,
    pub budget_name: String,
    pub category_name: String,
    pub budget_amount: f64,
    pub spent_amount: f64,
    pub spent_percentage: f64,
    pub alert_level: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    pub id: String,
    pub r#type: String,
    pub category_name: String,
    pub category_icon: String,
    pub amount: f64,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
}
