//! External intent classification capability.
//!
//! The classifier receives the offer context and a batch of leads and answers with
//! free text, nominally one line per lead. Turning that text into scores is the job
//! of [`super::parser`]; this module only moves the request and the raw answer.

mod chat;
mod prompt;

pub use chat::ChatCompletionClassifier;
pub use prompt::{render_prompt, SYSTEM_PROMPT};

use async_trait::async_trait;

use super::domain::{Lead, Offer};

/// Offer attributes shared with the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferContext {
    pub name: String,
    pub value_props: Vec<String>,
    pub ideal_use_cases: String,
}

impl From<&Offer> for OfferContext {
    fn from(offer: &Offer) -> Self {
        Self {
            name: offer.name.clone(),
            value_props: offer.value_props.clone(),
            ideal_use_cases: offer.ideal_use_cases.clone(),
        }
    }
}

/// One batch submitted to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    pub offer: OfferContext,
    pub leads: Vec<Lead>,
}

impl ClassificationRequest {
    pub fn new(offer: &Offer, leads: &[Lead]) -> Self {
        Self {
            offer: OfferContext::from(offer),
            leads: leads.to_vec(),
        }
    }

    pub fn prompt(&self) -> String {
        render_prompt(self)
    }
}

/// Anything that can label a batch of leads against an offer.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Returns the raw response text for the batch.
    async fn classify(&self, request: &ClassificationRequest) -> Result<String, ClassifierError>;
}

/// Failure modes of a classification call. All of them are recovered by the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier not configured: {0}")]
    NotConfigured(String),
    #[error("classifier request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("classifier returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid classifier response: {0}")]
    InvalidResponse(String),
    #[error("classifier returned no content")]
    EmptyResponse,
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}

/// Classifier that always fails, forcing fallback scores. Used for offline runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineClassifier;

#[async_trait]
impl IntentClassifier for OfflineClassifier {
    async fn classify(&self, _request: &ClassificationRequest) -> Result<String, ClassifierError> {
        Err(ClassifierError::Unavailable(
            "offline mode: external classification disabled".to_string(),
        ))
    }
}
