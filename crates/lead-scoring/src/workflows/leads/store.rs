use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{Lead, Offer, ScoreResult};

/// Consistent view of the active offer and lead set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    pub offer: Option<Offer>,
    pub leads: Vec<Lead>,
    pub revision: u64,
}

/// Holder of the active offer, lead set, and last computed results.
///
/// Writes replace wholesale and bump the revision, which discards any cached results.
pub trait WorkspaceStore: Send + Sync {
    fn save_offer(&self, offer: Offer) -> Result<(), StoreError>;
    fn replace_leads(&self, leads: Vec<Lead>) -> Result<(), StoreError>;
    fn snapshot(&self) -> Result<WorkspaceSnapshot, StoreError>;
    fn cached_results(&self, revision: u64) -> Result<Option<Vec<ScoreResult>>, StoreError>;
    /// Returns `false` when `revision` is no longer current and nothing was cached.
    fn store_results(&self, revision: u64, results: Vec<ScoreResult>) -> Result<bool, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("workspace store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct Workspace {
    offer: Option<Offer>,
    leads: Vec<Lead>,
    revision: u64,
    last_results: Option<Vec<ScoreResult>>,
}

impl Workspace {
    fn touch(&mut self) {
        self.revision += 1;
        self.last_results = None;
    }
}

/// Process-local store guarded by a mutex.
#[derive(Debug, Default, Clone)]
pub struct InMemoryWorkspaceStore {
    inner: Arc<Mutex<Workspace>>,
}

impl InMemoryWorkspaceStore {
    fn lock(&self) -> Result<MutexGuard<'_, Workspace>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("workspace mutex poisoned".to_string()))
    }
}

impl WorkspaceStore for InMemoryWorkspaceStore {
    fn save_offer(&self, offer: Offer) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        guard.offer = Some(offer);
        guard.touch();
        Ok(())
    }

    fn replace_leads(&self, leads: Vec<Lead>) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        guard.leads = leads;
        guard.touch();
        Ok(())
    }

    fn snapshot(&self) -> Result<WorkspaceSnapshot, StoreError> {
        let guard = self.lock()?;
        Ok(WorkspaceSnapshot {
            offer: guard.offer.clone(),
            leads: guard.leads.clone(),
            revision: guard.revision,
        })
    }

    fn cached_results(&self, revision: u64) -> Result<Option<Vec<ScoreResult>>, StoreError> {
        let guard = self.lock()?;
        if guard.revision != revision {
            return Ok(None);
        }
        Ok(guard.last_results.clone())
    }

    fn store_results(&self, revision: u64, results: Vec<ScoreResult>) -> Result<bool, StoreError> {
        let mut guard = self.lock()?;
        if guard.revision != revision {
            return Ok(false);
        }
        guard.last_results = Some(results);
        Ok(true)
    }
}
