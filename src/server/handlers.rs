use super::types::{
    AnalyzeInventoryRequest, AskInventoryRequest, ChatRequest, InsightResponse, ReplyResponse,
};
use crate::assistant::{PromptRelay, handle_inventory_query};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{debug, error, info};

pub const HEALTH_MESSAGE: &str = "✅ AI Inventory Assistant is running.";
pub const EMPTY_CHAT_MESSAGE: &str = "❌ No message received.";
pub const EMPTY_QUESTION_MESSAGE: &str = "❌ Please include your question.";

type ReplyResult = Result<Json<ReplyResponse>, (StatusCode, Json<ReplyResponse>)>;

#[derive(Clone)]
pub struct AppState {
    pub relay: PromptRelay,
    pub keyword_shortcut: bool,
}

impl AppState {
    pub fn new(relay: PromptRelay) -> Self {
        Self {
            relay,
            keyword_shortcut: false,
        }
    }

    pub fn with_keyword_shortcut(mut self, enabled: bool) -> Self {
        self.keyword_shortcut = enabled;
        self
    }

    fn shortcut(&self, message: &str) -> Option<Json<ReplyResponse>> {
        if !self.keyword_shortcut {
            return None;
        }
        handle_inventory_query(message).map(|canned| {
            info!("Answered by keyword shortcut");
            reply(canned)
        })
    }
}

fn reply(text: impl Into<String>) -> Json<ReplyResponse> {
    Json(ReplyResponse { reply: text.into() })
}

fn rejected(status: StatusCode, text: &str) -> (StatusCode, Json<ReplyResponse>) {
    (status, reply(text))
}

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

pub async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> ReplyResult {
    let message = request.user_message.as_deref().unwrap_or_default().trim();
    if message.is_empty() {
        debug!("Rejecting chat request without a message");
        return Err(rejected(StatusCode::BAD_REQUEST, EMPTY_CHAT_MESSAGE));
    }

    if let Some(canned) = state.shortcut(message) {
        return Ok(canned);
    }

    info!("Received chat request ({} chars)", message.len());

    match state.relay.chat(message).await {
        Ok(text) => Ok(reply(text)),
        Err(e) => {
            error!("Chat request failed: {}", e);
            Err(rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("⚠️ Error: {}", e),
            ))
        }
    }
}

pub async fn analyze_inventory(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeInventoryRequest>,
) -> Result<Json<InsightResponse>, (StatusCode, Json<InsightResponse>)> {
    let snapshot = request.inventory.snapshot();
    info!(
        products = snapshot.products,
        sales_orders = snapshot.sales_orders,
        purchase_orders = snapshot.purchase_orders,
        has_token = request.token.is_some(),
        "Received inventory analysis request"
    );
    if request.inventory.is_empty() {
        debug!("Analyzing an empty inventory dataset");
    }

    match state.relay.analyze_inventory(&request.inventory).await {
        Ok(insight) => Ok(Json(InsightResponse { insight })),
        Err(e) => {
            error!("Inventory analysis failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InsightResponse {
                    insight: format!("⚠️ Error analyzing data: {}", e),
                }),
            ))
        }
    }
}

pub async fn ask_inventory(
    State(state): State<AppState>,
    Json(request): Json<AskInventoryRequest>,
) -> ReplyResult {
    let question = request.user_message.as_deref().unwrap_or_default().trim();
    if question.is_empty() {
        debug!("Rejecting inventory question without a message");
        return Err(rejected(StatusCode::BAD_REQUEST, EMPTY_QUESTION_MESSAGE));
    }

    if let Some(canned) = state.shortcut(question) {
        return Ok(canned);
    }

    let snapshot = request.inventory.snapshot();
    info!(
        products = snapshot.products,
        sales_orders = snapshot.sales_orders,
        purchase_orders = snapshot.purchase_orders,
        "Received inventory question ({} chars)",
        question.len()
    );

    match state.relay.ask_inventory(question, &request.inventory).await {
        Ok(text) => Ok(reply(text)),
        Err(e) => {
            error!("Inventory question failed: {}", e);
            Err(rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("⚠️ Error processing request: {}", e),
            ))
        }
    }
}
