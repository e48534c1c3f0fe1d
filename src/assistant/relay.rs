use super::prompt::{InventoryData, Persona, analysis_prompt, question_prompt};
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use std::sync::Arc;
use tracing::debug;

/// Builds prompts and forwards each one as a single two-message completion.
#[derive(Clone)]
pub struct PromptRelay {
    client: Arc<dyn LlmClient>,
    temperature: Option<f32>,
}

impl PromptRelay {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub async fn chat(&self, message: &str) -> Result<String> {
        self.complete(Persona::InventoryAssistant, message.to_string())
            .await
    }

    pub async fn ask_inventory(&self, question: &str, data: &InventoryData) -> Result<String> {
        self.complete(Persona::GroundedInventory, question_prompt(question, data))
            .await
    }

    pub async fn analyze_inventory(&self, data: &InventoryData) -> Result<String> {
        self.complete(Persona::InventoryAnalyst, analysis_prompt(data))
            .await
    }

    async fn complete(&self, persona: Persona, content: String) -> Result<String> {
        debug!(?persona, prompt_len = content.len(), "Relaying prompt upstream");

        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(persona.system_prompt()),
                ChatMessage::user(content),
            ],
            temperature: self.temperature,
        };

        let response = self.client.create_chat_completion(request).await?;

        let choice = response
            .first_choice()
            .ok_or_else(|| Error::llm("Upstream returned no choices"))?;

        debug!(finish_reason = ?choice.finish_reason, "Upstream replied");

        Ok(choice.content.clone())
    }
}
