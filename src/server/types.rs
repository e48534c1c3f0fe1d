use crate::assistant::InventoryData;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `null` message is treated the same as a missing one.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub user_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeInventoryRequest {
    #[serde(flatten)]
    pub inventory: InventoryData,
    /// Accepted in any JSON shape for compatibility with existing callers; never checked.
    #[serde(default)]
    pub token: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct AskInventoryRequest {
    #[serde(default)]
    pub user_message: Option<String>,
    #[serde(flatten)]
    pub inventory: InventoryData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightResponse {
    pub insight: String,
}
