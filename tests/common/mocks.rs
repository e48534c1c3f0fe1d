use async_trait::async_trait;
use inventory_assistant::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client that replays queued replies and records every request
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub replies: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
    pub empty_choices: bool,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
            empty_choices: false,
        }
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push(reply.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_empty_choices(mut self) -> Self {
        self.empty_choices = true;
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let choices = if self.empty_choices {
            vec![]
        } else {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(Error::llm("No more mock responses available"));
            }
            vec![Choice {
                content: replies.remove(0),
                finish_reason: Some("Stop".to_string()),
            }]
        };

        Ok(ChatCompletionResponse { choices })
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
