use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::leads::classifier::{
    ClassificationRequest, ClassifierError, IntentClassifier,
};
use crate::workflows::leads::dispatcher::BatchDispatcher;
use crate::workflows::leads::domain::{Lead, Offer};
use crate::workflows::leads::pacer::Pacer;
use crate::workflows::leads::service::LeadScoringService;
use crate::workflows::leads::store::InMemoryWorkspaceStore;

pub(super) fn offer() -> Offer {
    Offer {
        name: "Acme Suite".to_string(),
        value_props: vec!["saves time".to_string()],
        ideal_use_cases: "SaaS".to_string(),
    }
}

pub(super) fn jane() -> Lead {
    Lead {
        name: "Jane".to_string(),
        role: "VP Sales".to_string(),
        company: "Acme".to_string(),
        industry: "SaaS".to_string(),
        location: "NY".to_string(),
        bio: "10y exp".to_string(),
    }
}

pub(super) fn numbered_leads(count: usize) -> Vec<Lead> {
    (1..=count)
        .map(|index| Lead {
            name: format!("Lead {index}"),
            role: "Analyst".to_string(),
            company: format!("Company {index}"),
            industry: "Retail".to_string(),
            location: "Remote".to_string(),
            bio: String::new(),
        })
        .collect()
}

pub(super) const LEADS_CSV: &str = "name,role,company,industry,location,linkedin_bio\n\
Jane,VP Sales,Acme,SaaS,NY,10y exp\n\
Raj,Analyst,Globex,Retail,SF,new to role\n";

/// Scripted reply for one classifier call.
#[derive(Debug, Clone)]
pub(super) enum Reply {
    Text(String),
    Fail,
}

/// Classifier double replaying scripted replies and recording every request.
#[derive(Default)]
pub(super) struct ScriptedClassifier {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ClassificationRequest>>,
}

impl ScriptedClassifier {
    pub(super) fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn failing() -> Self {
        Self::default()
    }

    pub(super) fn requests(&self) -> Vec<ClassificationRequest> {
        self.requests.lock().expect("requests mutex").clone()
    }
}

#[async_trait]
impl IntentClassifier for ScriptedClassifier {
    async fn classify(&self, request: &ClassificationRequest) -> Result<String, ClassifierError> {
        self.requests
            .lock()
            .expect("requests mutex")
            .push(request.clone());

        let reply = self.replies.lock().expect("replies mutex").pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail) | None => Err(ClassifierError::Unavailable(
                "scripted failure".to_string(),
            )),
        }
    }
}

#[derive(Default)]
pub(super) struct CountingPacer {
    pauses: AtomicUsize,
}

impl CountingPacer {
    pub(super) fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

pub(super) struct Harness {
    pub(super) service: Arc<LeadScoringService<InMemoryWorkspaceStore>>,
    pub(super) store: Arc<InMemoryWorkspaceStore>,
    pub(super) classifier: Arc<ScriptedClassifier>,
    pub(super) pacer: Arc<CountingPacer>,
}

pub(super) fn dispatcher(
    classifier: Arc<ScriptedClassifier>,
    pacer: Arc<CountingPacer>,
    batch_size: usize,
) -> BatchDispatcher {
    BatchDispatcher::new(classifier, pacer, batch_size)
}

pub(super) fn harness(classifier: ScriptedClassifier, batch_size: usize) -> Harness {
    let classifier = Arc::new(classifier);
    let pacer = Arc::new(CountingPacer::default());
    let store = Arc::new(InMemoryWorkspaceStore::default());
    let service = Arc::new(LeadScoringService::new(
        store.clone(),
        dispatcher(classifier.clone(), pacer.clone(), batch_size),
    ));

    Harness {
        service,
        store,
        classifier,
        pacer,
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_slice(&read_body(response).await).expect("json body")
}

pub(super) async fn read_text_body(response: Response) -> String {
    String::from_utf8(read_body(response).await).expect("utf-8 body")
}
