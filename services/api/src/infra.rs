use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use lead_scoring::config::ClassifierConfig;
use lead_scoring::error::AppError;
use lead_scoring::workflows::leads::{
    BatchDispatcher, ChatCompletionClassifier, InMemoryWorkspaceStore, IntentClassifier,
    IntervalPacer, LeadScoringService, OfflineClassifier,
};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ScoringService = LeadScoringService<InMemoryWorkspaceStore>;

/// Wire the scoring service against the configured classifier, or the offline one.
pub(crate) fn build_scoring_service(
    config: &ClassifierConfig,
    offline: bool,
) -> Result<Arc<ScoringService>, AppError> {
    let classifier: Arc<dyn IntentClassifier> = if offline {
        Arc::new(OfflineClassifier)
    } else {
        if config.api_key.is_none() {
            warn!("no classifier API key configured; every batch will use fallback scores");
        }
        Arc::new(ChatCompletionClassifier::new(config)?)
    };

    let dispatcher = BatchDispatcher::new(
        classifier,
        Arc::new(IntervalPacer::new(config.batch_delay)),
        config.batch_size,
    );
    let store = Arc::new(InMemoryWorkspaceStore::default());

    Ok(Arc::new(LeadScoringService::new(store, dispatcher)))
}
