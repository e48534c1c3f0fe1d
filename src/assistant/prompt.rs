use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fixed system message selecting the assistant's role for one upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// Generic chat with no inventory data.
    InventoryAssistant,
    /// Questions answered strictly from caller-supplied data.
    GroundedInventory,
    /// Bulk summary of a full dataset.
    InventoryAnalyst,
}

impl Persona {
    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::InventoryAssistant => "You are a helpful inventory assistant.",
            Self::GroundedInventory => "You are an intelligent assistant trained on inventory data.",
            Self::InventoryAnalyst => {
                "You are a helpful assistant that provides inventory summaries and insights."
            }
        }
    }
}

/// Caller-supplied records. Shapes are opaque and forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sales_orders: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub purchase_orders: Vec<Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySnapshot {
    pub products: usize,
    pub sales_orders: usize,
    pub purchase_orders: usize,
}

impl InventoryData {
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            products: self.products.len(),
            sales_orders: self.sales_orders.len(),
            purchase_orders: self.purchase_orders.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.sales_orders.is_empty() && self.purchase_orders.is_empty()
    }

    fn sections(&self) -> String {
        format!(
            "Products:\n{}\n\nSales Orders:\n{}\n\nPurchase Orders:\n{}",
            render_records(&self.products),
            render_records(&self.sales_orders),
            render_records(&self.purchase_orders),
        )
    }
}

// No truncation: large datasets are bounded only by the upstream's input limit.
fn render_records(records: &[Value]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

pub fn question_prompt(question: &str, data: &InventoryData) -> String {
    format!(
        "You are an inventory assistant. Answer the user's question based ONLY on the provided data.\n\n\
         User's Question: {question}\n\n\
         {sections}\n\n\
         Do not guess. If the answer cannot be found, say 'I do not have enough information.'",
        sections = data.sections(),
    )
}

pub fn analysis_prompt(data: &InventoryData) -> String {
    format!(
        "You are an AI inventory analyst. Analyze the following inventory dataset and provide:\n\
         - Total products\n\
         - Sales and purchasing trends\n\
         - Top-selling items (based on quantity_sold)\n\
         - Low-stock or stock-alert items\n\
         - Suggestions on what to restock\n\
         - Any anomalies or insights\n\n\
         {sections}",
        sections = data.sections(),
    )
}
