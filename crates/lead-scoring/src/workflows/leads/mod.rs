//! Lead qualification: rule scoring, batched intent classification, merging, and CSV
//! import/export, wired behind a replace-all workspace store.

pub mod classifier;
pub mod codec;
pub mod dispatcher;
pub mod domain;
pub mod merge;
pub mod pacer;
pub mod parser;
pub mod router;
pub mod rules;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use classifier::{
    ChatCompletionClassifier, ClassificationRequest, ClassifierError, IntentClassifier,
    OfferContext, OfflineClassifier,
};
pub use codec::{decode_leads, encode_results, LeadImportError};
pub use dispatcher::BatchDispatcher;
pub use domain::{ClassifierScore, IntentLabel, Lead, Offer, ScoreResult};
pub use merge::merge;
pub use pacer::{IntervalPacer, Pacer};
pub use parser::parse_batch_response;
pub use router::scoring_router;
pub use rules::rule_score;
pub use service::{LeadScoringService, ScoringError};
pub use store::{InMemoryWorkspaceStore, StoreError, WorkspaceSnapshot, WorkspaceStore};
