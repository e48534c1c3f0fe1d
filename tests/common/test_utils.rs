use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use inventory_assistant::{
    assistant::PromptRelay,
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Build the full router around a mock upstream
pub fn create_test_app(mock: &MockLlmClient, keyword_shortcut: bool) -> Router {
    let relay = PromptRelay::new(Arc::new(mock.clone()));
    server::router(AppState::new(relay).with_keyword_shortcut(keyword_shortcut))
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Small dataset shaped like what the inventory frontend sends
pub fn sample_inventory() -> Value {
    json!({
        "products": [
            {"sku": "WID-1", "name": "Widget", "stock": 3, "reorder_level": 10},
            {"sku": "GAD-2", "name": "Gadget", "stock": 42, "reorder_level": 5}
        ],
        "sales_orders": [
            {"id": 1, "sku": "WID-1", "quantity_sold": 7}
        ],
        "purchase_orders": [
            {"id": 9, "sku": "GAD-2", "quantity": 20, "status": "pending"}
        ]
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 5000
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:9999/v1"
  api_key: "test-api-key"
  model: "gpt-4.1-mini"
  temperature: 0.2
  request_timeout_secs: 60

assistant:
  keyword_shortcut: true
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
