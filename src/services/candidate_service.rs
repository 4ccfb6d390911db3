use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::database::PortalStore;
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateStatus};

/// Staff view of stored applications. Submissions themselves are only
/// created through the application form.
#[derive(Clone)]
pub struct CandidateService {
    store: Arc<dyn PortalStore>,
}

impl CandidateService {
    pub fn new(store: Arc<dyn PortalStore>) -> Self {
        Self { store }
    }

    pub async fn list_candidates(&self, vacancy_id: Option<Uuid>) -> Result<Vec<Candidate>> {
        Ok(self.store.list_candidates(vacancy_id).await?)
    }

    pub async fn get_candidate(&self, id: Uuid) -> Result<Candidate> {
        self.store
            .get_candidate(id)
            .await?
            .ok_or_else(|| Error::NotFound("Candidate not found".into()))
    }

    pub async fn update_status(&self, id: Uuid, status: CandidateStatus) -> Result<Candidate> {
        self.store.update_candidate_status(id, status).await?;
        info!(candidate_id = %id, status = status.as_str(), "candidate status updated");
        self.get_candidate(id).await
    }

    pub async fn delete_candidate(&self, id: Uuid) -> Result<()> {
        self.store.delete_candidate(id).await?;
        info!(candidate_id = %id, "candidate deleted");
        Ok(())
    }
}
