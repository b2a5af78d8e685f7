use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub transaction_type: String,
    pub r#type: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
}
