use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::database::PortalStore;
use crate::dto::request_dto::{CreateRequestPayload, RequestSummary, UpdateRequestPayload};
use crate::error::{Error, Result};
use crate::middleware::auth::StaffSession;
use crate::models::improvement_request::{ImprovementRequest, NewImprovementRequest};

/// Internal tickets raised by staff. Admins see every ticket; recruiters see
/// the ones they filed.
#[derive(Clone)]
pub struct ImprovementRequestService {
    store: Arc<dyn PortalStore>,
    assignee: Option<String>,
}

impl ImprovementRequestService {
    pub fn new(store: Arc<dyn PortalStore>, assignee: Option<String>) -> Self {
        Self { store, assignee }
    }

    pub async fn create(
        &self,
        session: &StaffSession,
        payload: CreateRequestPayload,
    ) -> Result<ImprovementRequest> {
        let request = self
            .store
            .create_improvement_request(NewImprovementRequest {
                title: payload.title.trim().to_string(),
                description: payload.description.trim().to_string(),
                priority: payload.priority,
                category: payload.category,
                user_email: session.email.clone(),
                user_name: session.display_name(),
                assigned_to: self.assignee.clone(),
            })
            .await?;
        info!(
            request_id = %request.id,
            user_email = %request.user_email,
            priority = request.priority.as_str(),
            "improvement request filed"
        );
        Ok(request)
    }

    pub async fn list(&self, session: &StaffSession) -> Result<Vec<ImprovementRequest>> {
        let owner = (!session.is_admin()).then(|| session.email.clone());
        Ok(self.store.list_improvement_requests(owner).await?)
    }

    pub async fn get(&self, session: &StaffSession, id: Uuid) -> Result<ImprovementRequest> {
        let request = self
            .store
            .get_improvement_request(id)
            .await?
            .ok_or_else(|| Error::NotFound("Improvement request not found".into()))?;
        if !session.is_admin() && request.user_email != session.email {
            return Err(Error::NotFound("Improvement request not found".into()));
        }
        Ok(request)
    }

    pub async fn summary(&self, session: &StaffSession) -> Result<RequestSummary> {
        let visible = self.list(session).await?;
        Ok(RequestSummary::tally(&visible))
    }

    pub async fn update(&self, id: Uuid, payload: UpdateRequestPayload) -> Result<ImprovementRequest> {
        let request = self
            .store
            .update_improvement_request(id, payload.into())
            .await?;
        info!(request_id = %id, status = request.status.as_str(), "improvement request updated");
        Ok(request)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete_improvement_request(id).await?;
        info!(request_id = %id, "improvement request deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::middleware::auth::Role;
    use crate::models::improvement_request::{RequestCategory, RequestPriority, RequestStatus};

    fn staff(email: &str, role: Role) -> StaffSession {
        StaffSession {
            email: email.into(),
            name: None,
            role,
        }
    }

    fn payload(title: &str) -> CreateRequestPayload {
        CreateRequestPayload {
            title: title.into(),
            description: "Export is slow".into(),
            priority: RequestPriority::High,
            category: RequestCategory::Bug,
        }
    }

    #[tokio::test]
    async fn recruiters_see_only_their_own_requests() {
        let service = ImprovementRequestService::new(
            Arc::new(MemoryStore::new()),
            Some("it@corp.com".into()),
        );
        let ana = staff("ana@corp.com", Role::Recruiter);
        let luis = staff("luis@corp.com", Role::Recruiter);
        let admin = staff("boss@corp.com", Role::Admin);

        let filed = service.create(&ana, payload("Faster export")).await.unwrap();
        assert_eq!(filed.user_name, "ana");
        assert_eq!(filed.assigned_to.as_deref(), Some("it@corp.com"));
        assert_eq!(filed.status, RequestStatus::Pending);
        service.create(&luis, payload("Dark mode")).await.unwrap();

        assert_eq!(service.list(&ana).await.unwrap().len(), 1);
        assert_eq!(service.list(&admin).await.unwrap().len(), 2);
        assert!(matches!(service.get(&luis, filed.id).await, Err(Error::NotFound(_))));
        assert_eq!(service.get(&admin, filed.id).await.unwrap().id, filed.id);
    }

    #[tokio::test]
    async fn summary_counts_visible_statuses() {
        let service = ImprovementRequestService::new(Arc::new(MemoryStore::new()), None);
        let ana = staff("ana@corp.com", Role::Recruiter);
        let admin = staff("boss@corp.com", Role::Admin);
        let first = service.create(&ana, payload("One")).await.unwrap();
        service.create(&ana, payload("Two")).await.unwrap();
        service.create(&admin, payload("Three")).await.unwrap();

        service
            .update(
                first.id,
                UpdateRequestPayload {
                    status: Some(RequestStatus::Completed),
                    admin_response: Some("Shipped".into()),
                },
            )
            .await
            .unwrap();

        let mine = service.summary(&ana).await.unwrap();
        assert_eq!(
            mine,
            RequestSummary {
                total: 2,
                pending: 1,
                in_progress: 0,
                completed: 1,
                rejected: 0,
            }
        );
        assert_eq!(service.summary(&admin).await.unwrap().total, 3);
    }
}
