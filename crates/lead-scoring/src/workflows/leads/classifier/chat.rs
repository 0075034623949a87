use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::SYSTEM_PROMPT;
use super::{ClassificationRequest, ClassifierError, IntentClassifier};
use crate::config::ClassifierConfig;

/// Classifier backed by an OpenAI-compatible chat completion endpoint.
pub struct ChatCompletionClassifier {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl ChatCompletionClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    fn api_key(&self) -> Result<&str, ClassifierError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ClassifierError::NotConfigured("set CLASSIFIER_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for ChatCompletionClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionClassifier")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl IntentClassifier for ChatCompletionClassifier {
    async fn classify(&self, request: &ClassificationRequest) -> Result<String, ClassifierError> {
        let api_key = self.api_key()?;
        let prompt = request.prompt();
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: self.max_tokens,
        };

        debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            leads = request.leads.len(),
            "sending classification request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|err| ClassifierError::InvalidResponse(err.to_string()))?;

        // Blank content fails the whole batch rather than parsing as one "low" line.
        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ClassifierError::EmptyResponse)
    }
}
