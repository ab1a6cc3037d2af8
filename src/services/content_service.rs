//! Content service - Business rules for the managed site content.
//!
//! Sits between the HTTP handlers and the repository: maps missing rows to
//! `NotFound`, rejects duplicate service names and slugs, and stamps new
//! tickets with the initial status.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::TICKET_STATUS_OPEN;
use crate::domain::{
    About, Leader, LeaderInput, Partner, PartnerInput, Resource, ResourceInput, Service,
    ServiceInput, Ticket, TicketInput,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ContentRepository;

/// Content service trait for dependency injection.
#[async_trait]
pub trait ContentService: Send + Sync {
    // Services
    async fn list_services(&self) -> AppResult<Vec<Service>>;
    /// Create a service; name and slug must be unused
    async fn create_service(&self, input: ServiceInput) -> AppResult<Service>;
    /// Replace a service; name and slug must not collide with another service
    async fn update_service(&self, id: i32, input: ServiceInput) -> AppResult<Service>;
    async fn delete_service(&self, id: i32) -> AppResult<()>;

    // Tickets
    /// Record a public submission with the initial status
    async fn submit_ticket(&self, input: TicketInput) -> AppResult<Ticket>;
    async fn list_tickets(&self) -> AppResult<Vec<Ticket>>;
    async fn get_ticket(&self, id: i32) -> AppResult<Ticket>;
    async fn set_ticket_status(&self, id: i32, status: String) -> AppResult<Ticket>;
    async fn delete_ticket(&self, id: i32) -> AppResult<()>;

    // About
    async fn get_about(&self) -> AppResult<About>;
    /// Create or replace the single about entry
    async fn update_about(&self, content: String) -> AppResult<About>;

    // Leaders
    async fn list_leaders(&self) -> AppResult<Vec<Leader>>;
    async fn create_leader(&self, input: LeaderInput) -> AppResult<Leader>;
    async fn update_leader(&self, id: i32, input: LeaderInput) -> AppResult<Leader>;
    async fn delete_leader(&self, id: i32) -> AppResult<()>;

    // Resources
    async fn list_resources(&self) -> AppResult<Vec<Resource>>;
    async fn create_resource(&self, input: ResourceInput) -> AppResult<Resource>;
    async fn update_resource(&self, id: i32, input: ResourceInput) -> AppResult<Resource>;
    async fn delete_resource(&self, id: i32) -> AppResult<()>;

    // Partners
    async fn list_partners(&self) -> AppResult<Vec<Partner>>;
    async fn create_partner(&self, input: PartnerInput) -> AppResult<Partner>;
    async fn update_partner(&self, id: i32, input: PartnerInput) -> AppResult<Partner>;
    async fn delete_partner(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ContentService over a repository.
pub struct ContentManager<R: ContentRepository> {
    repo: Arc<R>,
}

impl<R: ContentRepository> ContentManager<R> {
    /// Create new content service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    async fn ensure_service_unique(&self, input: &ServiceInput, exclude_id: Option<i32>) -> AppResult<()> {
        let existing = self
            .repo
            .find_service_conflict(input.name.clone(), input.slug.clone(), exclude_id)
            .await?;

        match existing {
            Some(other) => {
                tracing::debug!(conflicting_id = other.id, "Service name or slug taken");
                Err(AppError::conflict("Service name or slug"))
            }
            None => Ok(()),
        }
    }
}

fn deleted(removed: bool, entity: &'static str) -> AppResult<()> {
    removed.then_some(()).ok_or_not_found(entity)
}

#[async_trait]
impl<R: ContentRepository> ContentService for ContentManager<R> {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.repo.list_services().await
    }

    async fn create_service(&self, input: ServiceInput) -> AppResult<Service> {
        self.ensure_service_unique(&input, None).await?;
        let service = self.repo.insert_service(input).await?;
        tracing::info!(service_id = service.id, "Service created");
        Ok(service)
    }

    async fn update_service(&self, id: i32, input: ServiceInput) -> AppResult<Service> {
        self.repo.find_service(id).await?.ok_or_not_found("Service")?;
        self.ensure_service_unique(&input, Some(id)).await?;
        self.repo.update_service(id, input).await?.ok_or_not_found("Service")
    }

    async fn delete_service(&self, id: i32) -> AppResult<()> {
        deleted(self.repo.delete_service(id).await?, "Service")
    }

    async fn submit_ticket(&self, input: TicketInput) -> AppResult<Ticket> {
        let ticket = self
            .repo
            .insert_ticket(input, TICKET_STATUS_OPEN.to_string())
            .await?;
        tracing::info!(ticket_id = ticket.id, "Ticket submitted");
        Ok(ticket)
    }

    async fn list_tickets(&self) -> AppResult<Vec<Ticket>> {
        self.repo.list_tickets().await
    }

    async fn get_ticket(&self, id: i32) -> AppResult<Ticket> {
        self.repo.find_ticket(id).await?.ok_or_not_found("Ticket")
    }

    async fn set_ticket_status(&self, id: i32, status: String) -> AppResult<Ticket> {
        self.repo
            .update_ticket_status(id, status)
            .await?
            .ok_or_not_found("Ticket")
    }

    async fn delete_ticket(&self, id: i32) -> AppResult<()> {
        deleted(self.repo.delete_ticket(id).await?, "Ticket")
    }

    async fn get_about(&self) -> AppResult<About> {
        self.repo.find_about().await?.ok_or_not_found("About")
    }

    async fn update_about(&self, content: String) -> AppResult<About> {
        self.repo.upsert_about(content).await
    }

    async fn list_leaders(&self) -> AppResult<Vec<Leader>> {
        self.repo.list_leaders().await
    }

    async fn create_leader(&self, input: LeaderInput) -> AppResult<Leader> {
        self.repo.insert_leader(input).await
    }

    async fn update_leader(&self, id: i32, input: LeaderInput) -> AppResult<Leader> {
        self.repo.update_leader(id, input).await?.ok_or_not_found("Leader")
    }

    async fn delete_leader(&self, id: i32) -> AppResult<()> {
        deleted(self.repo.delete_leader(id).await?, "Leader")
    }

    async fn list_resources(&self) -> AppResult<Vec<Resource>> {
        self.repo.list_resources().await
    }

    async fn create_resource(&self, input: ResourceInput) -> AppResult<Resource> {
        self.repo.insert_resource(input).await
    }

    async fn update_resource(&self, id: i32, input: ResourceInput) -> AppResult<Resource> {
        self.repo
            .update_resource(id, input)
            .await?
            .ok_or_not_found("Resource")
    }

    async fn delete_resource(&self, id: i32) -> AppResult<()> {
        deleted(self.repo.delete_resource(id).await?, "Resource")
    }

    async fn list_partners(&self) -> AppResult<Vec<Partner>> {
        self.repo.list_partners().await
    }

    async fn create_partner(&self, input: PartnerInput) -> AppResult<Partner> {
        self.repo.insert_partner(input).await
    }

    async fn update_partner(&self, id: i32, input: PartnerInput) -> AppResult<Partner> {
        self.repo.update_partner(id, input).await?.ok_or_not_found("Partner")
    }

    async fn delete_partner(&self, id: i32) -> AppResult<()> {
        deleted(self.repo.delete_partner(id).await?, "Partner")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockContentRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn service(id: i32, name: &str, slug: &str) -> Service {
        Service {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            description: "Cabling and switch configuration".to_string(),
            price: 120.0,
            created_at: Utc::now(),
        }
    }

    fn service_input(name: &str, slug: &str) -> ServiceInput {
        ServiceInput {
            name: name.to_string(),
            slug: slug.to_string(),
            description: "Cabling and switch configuration".to_string(),
            price: 120.0,
        }
    }

    fn ticket_input() -> TicketInput {
        TicketInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Printer offline".to_string(),
            message: "It stopped this morning.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_service_conflict_skips_insert() {
        let mut repo = MockContentRepository::new();
        repo.expect_find_service_conflict()
            .with(eq("Network".to_string()), eq("network".to_string()), eq(None))
            .returning(|_, _, _| Ok(Some(service(3, "Network", "other"))));
        repo.expect_insert_service().never();

        let manager = ContentManager::new(Arc::new(repo));
        let err = manager
            .create_service(service_input("Network", "network"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.status(), axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_service_inserts_when_unique() {
        let mut repo = MockContentRepository::new();
        repo.expect_find_service_conflict()
            .returning(|_, _, _| Ok(None));
        repo.expect_insert_service()
            .times(1)
            .returning(|input| Ok(service(1, &input.name, &input.slug)));

        let manager = ContentManager::new(Arc::new(repo));
        let created = manager
            .create_service(service_input("Network", "network"))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.slug, "network");
    }

    #[tokio::test]
    async fn test_update_service_excludes_itself_from_conflict_check() {
        let mut repo = MockContentRepository::new();
        repo.expect_find_service()
            .with(eq(5))
            .returning(|id| Ok(Some(service(id, "Old", "old"))));
        repo.expect_find_service_conflict()
            .with(eq("New".to_string()), eq("new".to_string()), eq(Some(5)))
            .returning(|_, _, _| Ok(None));
        repo.expect_update_service()
            .returning(|id, input| Ok(Some(service(id, &input.name, &input.slug))));

        let manager = ContentManager::new(Arc::new(repo));
        let updated = manager.update_service(5, service_input("New", "new")).await.unwrap();

        assert_eq!(updated.name, "New");
    }

    #[tokio::test]
    async fn test_update_missing_service_is_not_found() {
        let mut repo = MockContentRepository::new();
        repo.expect_find_service().returning(|_| Ok(None));
        repo.expect_find_service_conflict().never();
        repo.expect_update_service().never();

        let manager = ContentManager::new(Arc::new(repo));
        let err = manager
            .update_service(42, service_input("New", "new"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Service not found");
    }

    #[tokio::test]
    async fn test_submit_ticket_starts_open() {
        let mut repo = MockContentRepository::new();
        repo.expect_insert_ticket()
            .with(mockall::predicate::always(), eq("open".to_string()))
            .times(1)
            .returning(|input, status| {
                Ok(Ticket {
                    id: 9,
                    name: input.name,
                    email: input.email,
                    subject: input.subject,
                    message: input.message,
                    status,
                    created_at: Utc::now(),
                })
            });

        let manager = ContentManager::new(Arc::new(repo));
        let ticket = manager.submit_ticket(ticket_input()).await.unwrap();

        assert_eq!(ticket.status, "open");
    }

    #[tokio::test]
    async fn test_missing_ticket_is_not_found() {
        let mut repo = MockContentRepository::new();
        repo.expect_find_ticket().returning(|_| Ok(None));
        repo.expect_update_ticket_status().returning(|_, _| Ok(None));

        let manager = ContentManager::new(Arc::new(repo));

        assert!(matches!(manager.get_ticket(1).await, Err(AppError::NotFound("Ticket"))));
        assert!(matches!(
            manager.set_ticket_status(1, "closed".to_string()).await,
            Err(AppError::NotFound("Ticket"))
        ));
    }

    #[tokio::test]
    async fn test_about_unset_is_not_found() {
        let mut repo = MockContentRepository::new();
        repo.expect_find_about().returning(|| Ok(None));

        let manager = ContentManager::new(Arc::new(repo));

        assert!(matches!(manager.get_about().await, Err(AppError::NotFound("About"))));
    }

    #[tokio::test]
    async fn test_update_about_upserts() {
        let mut repo = MockContentRepository::new();
        repo.expect_upsert_about()
            .with(eq("We fix computers.".to_string()))
            .times(1)
            .returning(|content| Ok(About { id: 1, content }));

        let manager = ContentManager::new(Arc::new(repo));
        let about = manager.update_about("We fix computers.".to_string()).await.unwrap();

        assert_eq!(about.id, 1);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_rows() {
        let mut repo = MockContentRepository::new();
        repo.expect_delete_leader().with(eq(1)).returning(|_| Ok(true));
        repo.expect_delete_leader().with(eq(2)).returning(|_| Ok(false));
        repo.expect_delete_partner().returning(|_| Ok(false));

        let manager = ContentManager::new(Arc::new(repo));

        assert!(manager.delete_leader(1).await.is_ok());
        assert!(matches!(manager.delete_leader(2).await, Err(AppError::NotFound("Leader"))));
        assert!(matches!(manager.delete_partner(2).await, Err(AppError::NotFound("Partner"))));
    }
}
