use std::sync::Arc;

use tracing::{debug, warn};

use super::classifier::{ClassificationRequest, IntentClassifier};
use super::domain::{ClassifierScore, Lead, Offer};
use super::pacer::Pacer;
use super::parser::parse_batch_response;

/// Sends leads to the classifier in fixed-size batches, one batch at a time.
pub struct BatchDispatcher {
    classifier: Arc<dyn IntentClassifier>,
    pacer: Arc<dyn Pacer>,
    batch_size: usize,
}

impl BatchDispatcher {
    /// A `batch_size` of zero is treated as one.
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        pacer: Arc<dyn Pacer>,
        batch_size: usize,
    ) -> Self {
        Self {
            classifier,
            pacer,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Classifier scores aligned with `leads` by position.
    ///
    /// A failed batch scores every lead in it with [`ClassifierScore::FALLBACK`].
    /// A successful but short response leaves the unanswered leads as `None`.
    pub async fn score_all(&self, leads: &[Lead], offer: &Offer) -> Vec<Option<ClassifierScore>> {
        let mut scores = Vec::with_capacity(leads.len());
        let batch_count = leads.len().div_ceil(self.batch_size);

        for (batch_index, batch) in leads.chunks(self.batch_size).enumerate() {
            if batch_index > 0 {
                self.pacer.pause().await;
            }

            debug!(
                batch = batch_index + 1,
                of = batch_count,
                leads = batch.len(),
                "dispatching classification batch"
            );
            scores.extend(self.score_batch(batch_index, batch, offer).await);
        }

        scores
    }

    async fn score_batch(
        &self,
        batch_index: usize,
        batch: &[Lead],
        offer: &Offer,
    ) -> Vec<Option<ClassifierScore>> {
        let request = ClassificationRequest::new(offer, batch);

        match self.classifier.classify(&request).await {
            Ok(response) => {
                let parsed = parse_batch_response(&response, batch.len());
                if parsed.len() < batch.len() {
                    debug!(
                        batch = batch_index + 1,
                        answered = parsed.len(),
                        submitted = batch.len(),
                        "classifier response shorter than batch"
                    );
                }

                let mut scores: Vec<Option<ClassifierScore>> =
                    parsed.into_iter().map(Some).collect();
                scores.resize(batch.len(), None);
                scores
            }
            Err(err) => {
                warn!(
                    batch = batch_index + 1,
                    leads = batch.len(),
                    error = %err,
                    "classification batch failed, using fallback scores"
                );
                vec![Some(ClassifierScore::FALLBACK); batch.len()]
            }
        }
    }
}
