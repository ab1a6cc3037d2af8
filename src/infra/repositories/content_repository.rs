//! Content repository - Data access for every managed site entity.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PrimaryKeyTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::{about, leader, partner, resource, service, ticket};
use crate::domain::{
    About, Leader, LeaderInput, Partner, PartnerInput, Resource, ResourceInput, Service,
    ServiceInput, Ticket, TicketInput,
};
use crate::errors::{AppError, AppResult};

/// Content repository trait for dependency injection.
///
/// Lookups by id return `None` when the row does not exist; deletes report
/// whether a row was removed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    // Services
    async fn list_services(&self) -> AppResult<Vec<Service>>;
    async fn find_service(&self, id: i32) -> AppResult<Option<Service>>;
    /// Find another service sharing `name` or `slug`, ignoring `exclude_id`
    async fn find_service_conflict(
        &self,
        name: String,
        slug: String,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Service>>;
    async fn insert_service(&self, input: ServiceInput) -> AppResult<Service>;
    async fn update_service(&self, id: i32, input: ServiceInput) -> AppResult<Option<Service>>;
    async fn delete_service(&self, id: i32) -> AppResult<bool>;

    // Tickets
    async fn list_tickets(&self) -> AppResult<Vec<Ticket>>;
    async fn find_ticket(&self, id: i32) -> AppResult<Option<Ticket>>;
    async fn insert_ticket(&self, input: TicketInput, status: String) -> AppResult<Ticket>;
    async fn update_ticket_status(&self, id: i32, status: String) -> AppResult<Option<Ticket>>;
    async fn delete_ticket(&self, id: i32) -> AppResult<bool>;

    // About
    async fn find_about(&self) -> AppResult<Option<About>>;
    async fn upsert_about(&self, content: String) -> AppResult<About>;

    // Leaders
    async fn list_leaders(&self) -> AppResult<Vec<Leader>>;
    async fn insert_leader(&self, input: LeaderInput) -> AppResult<Leader>;
    async fn update_leader(&self, id: i32, input: LeaderInput) -> AppResult<Option<Leader>>;
    async fn delete_leader(&self, id: i32) -> AppResult<bool>;

    // Resources
    async fn list_resources(&self) -> AppResult<Vec<Resource>>;
    async fn insert_resource(&self, input: ResourceInput) -> AppResult<Resource>;
    async fn update_resource(&self, id: i32, input: ResourceInput) -> AppResult<Option<Resource>>;
    async fn delete_resource(&self, id: i32) -> AppResult<bool>;

    // Partners
    async fn list_partners(&self) -> AppResult<Vec<Partner>>;
    async fn insert_partner(&self, input: PartnerInput) -> AppResult<Partner>;
    async fn update_partner(&self, id: i32, input: PartnerInput) -> AppResult<Option<Partner>>;
    async fn delete_partner(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM implementation of ContentRepository
pub struct ContentStore {
    db: DatabaseConnection,
}

impl ContentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a service write that lost a race on the unique name/slug index to 409.
fn map_unique_violation(err: DbErr) -> AppError {
    let sql_err = err.sql_err();
    unique_violation_or_database(err, sql_err)
}

fn unique_violation_or_database(err: DbErr, sql_err: Option<SqlErr>) -> AppError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique index rejected service write: {}", detail);
            AppError::conflict("Service name or slug")
        }
        _ => AppError::Database(err),
    }
}

/// Delete a row by integer primary key, reporting whether one was removed.
async fn delete_row<E>(db: &DatabaseConnection, id: i32) -> AppResult<bool>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let result = E::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[async_trait]
impl ContentRepository for ContentStore {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        let models = service::Entity::find()
            .order_by_desc(service::Column::CreatedAt)
            .order_by_desc(service::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn find_service(&self, id: i32) -> AppResult<Option<Service>> {
        let model = service::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Service::from))
    }

    async fn find_service_conflict(
        &self,
        name: String,
        slug: String,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Service>> {
        let mut query = service::Entity::find().filter(
            Condition::any()
                .add(service::Column::Name.eq(name))
                .add(service::Column::Slug.eq(slug)),
        );
        if let Some(id) = exclude_id {
            query = query.filter(service::Column::Id.ne(id));
        }

        Ok(query.one(&self.db).await?.map(Service::from))
    }

    async fn insert_service(&self, input: ServiceInput) -> AppResult<Service> {
        let model = service::ActiveModel {
            name: Set(input.name),
            slug: Set(input.slug),
            description: Set(input.description),
            price: Set(input.price),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(map_unique_violation)?;

        Ok(Service::from(model))
    }

    async fn update_service(&self, id: i32, input: ServiceInput) -> AppResult<Option<Service>> {
        let Some(model) = service::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: service::ActiveModel = model.into();
        active.name = Set(input.name);
        active.slug = Set(input.slug);
        active.description = Set(input.description);
        active.price = Set(input.price);

        let model = active.update(&self.db).await.map_err(map_unique_violation)?;
        Ok(Some(Service::from(model)))
    }

    async fn delete_service(&self, id: i32) -> AppResult<bool> {
        delete_row::<service::Entity>(&self.db, id).await
    }

    async fn list_tickets(&self) -> AppResult<Vec<Ticket>> {
        let models = ticket::Entity::find()
            .order_by_desc(ticket::Column::CreatedAt)
            .order_by_desc(ticket::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Ticket::from).collect())
    }

    async fn find_ticket(&self, id: i32) -> AppResult<Option<Ticket>> {
        let model = ticket::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Ticket::from))
    }

    async fn insert_ticket(&self, input: TicketInput, status: String) -> AppResult<Ticket> {
        let model = ticket::ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            subject: Set(input.subject),
            message: Set(input.message),
            status: Set(status),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Ticket::from(model))
    }

    async fn update_ticket_status(&self, id: i32, status: String) -> AppResult<Option<Ticket>> {
        let Some(model) = ticket::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ticket::ActiveModel = model.into();
        active.status = Set(status);

        let model = active.update(&self.db).await?;
        Ok(Some(Ticket::from(model)))
    }

    async fn delete_ticket(&self, id: i32) -> AppResult<bool> {
        delete_row::<ticket::Entity>(&self.db, id).await
    }

    async fn find_about(&self) -> AppResult<Option<About>> {
        let model = about::Entity::find()
            .order_by_asc(about::Column::Id)
            .one(&self.db)
            .await?;

        Ok(model.map(About::from))
    }

    async fn upsert_about(&self, content: String) -> AppResult<About> {
        let existing = about::Entity::find()
            .order_by_asc(about::Column::Id)
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(model) => {
                let mut active: about::ActiveModel = model.into();
                active.content = Set(content);
                active.update(&self.db).await?
            }
            None => {
                about::ActiveModel {
                    content: Set(content),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?
            }
        };

        Ok(About::from(model))
    }

    async fn list_leaders(&self) -> AppResult<Vec<Leader>> {
        let models = leader::Entity::find()
            .order_by_asc(leader::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Leader::from).collect())
    }

    async fn insert_leader(&self, input: LeaderInput) -> AppResult<Leader> {
        let model = leader::ActiveModel {
            name: Set(input.name),
            photo: Set(input.photo),
            bio: Set(input.bio),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Leader::from(model))
    }

    async fn update_leader(&self, id: i32, input: LeaderInput) -> AppResult<Option<Leader>> {
        let Some(model) = leader::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: leader::ActiveModel = model.into();
        active.name = Set(input.name);
        active.photo = Set(input.photo);
        active.bio = Set(input.bio);

        let model = active.update(&self.db).await?;
        Ok(Some(Leader::from(model)))
    }

    async fn delete_leader(&self, id: i32) -> AppResult<bool> {
        delete_row::<leader::Entity>(&self.db, id).await
    }

    async fn list_resources(&self) -> AppResult<Vec<Resource>> {
        let models = resource::Entity::find()
            .order_by_asc(resource::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Resource::from).collect())
    }

    async fn insert_resource(&self, input: ResourceInput) -> AppResult<Resource> {
        let model = resource::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            kind: Set(input.kind),
            url: Set(input.url),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Resource::from(model))
    }

    async fn update_resource(&self, id: i32, input: ResourceInput) -> AppResult<Option<Resource>> {
        let Some(model) = resource::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: resource::ActiveModel = model.into();
        active.title = Set(input.title);
        active.description = Set(input.description);
        active.kind = Set(input.kind);
        active.url = Set(input.url);

        let model = active.update(&self.db).await?;
        Ok(Some(Resource::from(model)))
    }

    async fn delete_resource(&self, id: i32) -> AppResult<bool> {
        delete_row::<resource::Entity>(&self.db, id).await
    }

    async fn list_partners(&self) -> AppResult<Vec<Partner>> {
        let models = partner::Entity::find()
            .order_by_asc(partner::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Partner::from).collect())
    }

    async fn insert_partner(&self, input: PartnerInput) -> AppResult<Partner> {
        let model = partner::ActiveModel {
            name: Set(input.name),
            logo: Set(input.logo),
            link: Set(input.link),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Partner::from(model))
    }

    async fn update_partner(&self, id: i32, input: PartnerInput) -> AppResult<Option<Partner>> {
        let Some(model) = partner::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: partner::ActiveModel = model.into();
        active.name = Set(input.name);
        active.logo = Set(input.logo);
        active.link = Set(input.link);

        let model = active.update(&self.db).await?;
        Ok(Some(Partner::from(model)))
    }

    async fn delete_partner(&self, id: i32) -> AppResult<bool> {
        delete_row::<partner::Entity>(&self.db, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let err = unique_violation_or_database(
            DbErr::Custom("Duplicate entry 'network-setup' for key 'slug'".to_string()),
            Some(SqlErr::UniqueConstraintViolation("slug".to_string())),
        );

        assert!(matches!(err, AppError::Conflict(ref entity) if entity == "Service name or slug"));
    }

    #[test]
    fn test_other_database_errors_pass_through() {
        let err = unique_violation_or_database(
            DbErr::Custom("connection reset".to_string()),
            Some(SqlErr::ForeignKeyConstraintViolation("fk".to_string())),
        );
        assert!(matches!(err, AppError::Database(DbErr::Custom(_))));

        assert!(matches!(
            map_unique_violation(DbErr::RecordNotInserted),
            AppError::Database(DbErr::RecordNotInserted)
        ));
        assert!(matches!(
            map_unique_violation(DbErr::Custom("timeout".to_string())),
            AppError::Database(DbErr::Custom(_))
        ));
    }
}
