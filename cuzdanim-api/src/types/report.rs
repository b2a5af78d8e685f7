use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: ReportSummary,
    #[serde(default)]
    pub category_report: Vec<CategoryReport>,
    #[serde(default)]
    pub monthly_report: Vec<MonthlyReport>,
    pub income_expense_comparison: IncomeExpenseComparison,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_amount: f64,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub category_id: String,
    pub category_name: String,
    pub category_icon: Option<String>,
    pub category_color: Option<String>,
    pub total_amount: f64,
    pub transaction_count: u32,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: String,
    pub year: i32,
    pub month_name: String,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeExpenseComparison {
    pub income: f64,
    pub expense: f64,
}
