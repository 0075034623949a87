use std::io::Read;
use std::sync::Arc;

use tracing::info;

use super::codec::{decode_leads, encode_results, LeadImportError};
use super::dispatcher::BatchDispatcher;
use super::domain::{Lead, Offer, ScoreResult};
use super::merge::merge;
use super::rules::rule_score;
use super::store::{StoreError, WorkspaceStore};

/// Service composing the workspace store, rule scorer, dispatcher, and codec.
pub struct LeadScoringService<S> {
    store: Arc<S>,
    dispatcher: BatchDispatcher,
}

impl<S> LeadScoringService<S>
where
    S: WorkspaceStore + 'static,
{
    pub fn new(store: Arc<S>, dispatcher: BatchDispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Replace the active offer.
    pub fn save_offer(&self, offer: Offer) -> Result<(), ScoringError> {
        info!(offer = %offer.name, value_props = offer.value_props.len(), "offer saved");
        self.store.save_offer(offer)?;
        Ok(())
    }

    /// Decode an upload and replace the active lead set, returning the lead count.
    ///
    /// The previous lead set is left untouched when decoding fails.
    pub fn upload_leads<R: Read>(&self, reader: R) -> Result<usize, ScoringError> {
        let leads = decode_leads(reader)?;
        let count = leads.len();
        self.store.replace_leads(leads)?;
        info!(leads = count, "lead set replaced");
        Ok(count)
    }

    /// Score the active lead set and cache the results for export.
    pub async fn score(&self) -> Result<Vec<ScoreResult>, ScoringError> {
        let snapshot = self.store.snapshot()?;
        let results = self
            .score_leads(&snapshot.leads, snapshot.offer.as_ref())
            .await?;

        if !self.store.store_results(snapshot.revision, results.clone())? {
            info!("workspace changed during scoring, results not cached");
        }
        Ok(results)
    }

    /// Export the cached results as CSV, scoring first when nothing current is cached.
    pub async fn export_csv(&self) -> Result<String, ScoringError> {
        let revision = self.store.snapshot()?.revision;
        let results = match self.store.cached_results(revision)? {
            Some(results) => results,
            None => self.score().await?,
        };

        Ok(encode_results(&results))
    }

    /// Score `leads` against `offer` without touching the store.
    pub async fn score_leads(
        &self,
        leads: &[Lead],
        offer: Option<&Offer>,
    ) -> Result<Vec<ScoreResult>, ScoringError> {
        if leads.is_empty() {
            return Ok(Vec::new());
        }
        let offer = offer.ok_or(ScoringError::NoOffer)?;

        let rule_scores: Vec<u32> = leads.iter().map(|lead| rule_score(lead, offer)).collect();
        let classifier_scores = self.dispatcher.score_all(leads, offer).await;

        let results: Vec<ScoreResult> = leads
            .iter()
            .zip(rule_scores)
            .zip(classifier_scores)
            .map(|((lead, rule), classifier)| merge(lead, rule, classifier))
            .collect();

        info!(
            leads = results.len(),
            batch_size = self.dispatcher.batch_size(),
            "lead scoring completed"
        );
        Ok(results)
    }
}

/// Error raised by the lead scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("no offer configured")]
    NoOffer,
    #[error(transparent)]
    Import(#[from] LeadImportError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
