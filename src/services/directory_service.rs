use std::collections::BTreeSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::database::PortalStore;
use crate::dto::directory_dto::{PositionPayload, RecruiterPayload};
use crate::error::Result;
use crate::models::position::Position;
use crate::models::recruiter::Recruiter;

/// Recruiter contact cards and the position catalog.
#[derive(Clone)]
pub struct DirectoryService {
    store: Arc<dyn PortalStore>,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn PortalStore>) -> Self {
        Self { store }
    }

    pub async fn list_recruiters(&self) -> Result<Vec<Recruiter>> {
        Ok(self.store.list_recruiters().await?)
    }

    pub async fn create_recruiter(&self, payload: RecruiterPayload) -> Result<Recruiter> {
        Ok(self.store.create_recruiter(payload.into()).await?)
    }

    pub async fn update_recruiter(&self, id: Uuid, payload: RecruiterPayload) -> Result<Recruiter> {
        Ok(self.store.update_recruiter(id, payload.into()).await?)
    }

    pub async fn delete_recruiter(&self, id: Uuid) -> Result<()> {
        Ok(self.store.delete_recruiter(id).await?)
    }

    /// `department` matches case-insensitively.
    pub async fn list_positions(&self, department: Option<&str>) -> Result<Vec<Position>> {
        let positions = self.store.list_positions().await?;
        let Some(department) = department.map(str::trim).filter(|d| !d.is_empty()) else {
            return Ok(positions);
        };
        Ok(positions
            .into_iter()
            .filter(|p| {
                p.department
                    .as_deref()
                    .is_some_and(|d| d.eq_ignore_ascii_case(department))
            })
            .collect())
    }

    /// Distinct departments named in the catalog, sorted.
    pub async fn departments(&self) -> Result<Vec<String>> {
        let positions = self.store.list_positions().await?;
        let unique: BTreeSet<String> = positions
            .into_iter()
            .filter_map(|p| p.department)
            .collect();
        Ok(unique.into_iter().collect())
    }

    pub async fn create_position(&self, payload: PositionPayload) -> Result<Position> {
        Ok(self.store.create_position(payload.into()).await?)
    }

    pub async fn update_position(&self, id: Uuid, payload: PositionPayload) -> Result<Position> {
        Ok(self.store.update_position(id, payload.into()).await?)
    }

    pub async fn delete_position(&self, id: Uuid) -> Result<()> {
        Ok(self.store.delete_position(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;

    fn position(title: &str, department: Option<&str>) -> PositionPayload {
        PositionPayload {
            position: title.into(),
            department: department.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn filters_positions_and_lists_departments() {
        let service = DirectoryService::new(Arc::new(MemoryStore::new()));
        service.create_position(position("Welder", Some("Production"))).await.unwrap();
        service.create_position(position("Analyst", Some("Finance"))).await.unwrap();
        service.create_position(position("Operator", Some("Production"))).await.unwrap();
        service.create_position(position("Intern", None)).await.unwrap();

        let production = service.list_positions(Some("production")).await.unwrap();
        let titles: Vec<&str> = production.iter().map(|p| p.position.as_str()).collect();
        assert_eq!(titles, vec!["Operator", "Welder"]);

        assert_eq!(service.list_positions(Some("  ")).await.unwrap().len(), 4);
        assert_eq!(
            service.departments().await.unwrap(),
            vec!["Finance".to_string(), "Production".to_string()]
        );
    }

    #[tokio::test]
    async fn recruiter_blank_fields_are_dropped() {
        let service = DirectoryService::new(Arc::new(MemoryStore::new()));
        let recruiter = service
            .create_recruiter(RecruiterPayload {
                name: " Luis Mora ".into(),
                email: Some("luis@corp.com".into()),
                phone: Some("   ".into()),
                extension: Some("204".into()),
                department: None,
                whatsapp: None,
                position: None,
            })
            .await
            .unwrap();
        assert_eq!(recruiter.name, "Luis Mora");
        assert_eq!(recruiter.phone, None);
        assert_eq!(recruiter.extension.as_deref(), Some("204"));
    }
}
