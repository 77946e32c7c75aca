use async_trait::async_trait;
use chrono::Utc;
use database::BaseRepository;
use sea_orm::{ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, DbErr};

use crate::entity;
use crate::error::{EventError, EventResult};
use crate::models::{Event, NewEvent};
use crate::repository::EventRepository;

/// PostgreSQL implementation of EventRepository using SeaORM
#[derive(Clone)]
pub struct PgEventRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn list(&self, page: u64, limit: u64) -> EventResult<(Vec<Event>, u64)> {
        let total = self
            .base
            .count_active()
            .await
            .map_err(|e| EventError::database("count", e))?;

        let models = self
            .base
            .find_page(page, limit)
            .await
            .map_err(|e| EventError::database("list", e))?;

        Ok((models.into_iter().map(Event::from).collect(), total))
    }

    async fn get_by_id(&self, id: i64) -> EventResult<Option<Event>> {
        self.base
            .find_active_by_id(id)
            .await
            .map(|model| model.map(Event::from))
            .map_err(|e| EventError::database("get", e))
    }

    async fn create(&self, input: NewEvent) -> EventResult<Event> {
        let now = Utc::now().fixed_offset();

        let model = self
            .base
            .insert(entity::ActiveModel {
                title: Set(input.title),
                description: Set(input.description),
                complete: Set(input.complete),
                location: Set(input.location),
                start_time: Set(input.start_time.fixed_offset()),
                end_time: Set(input.end_time.fixed_offset()),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            })
            .await
            .map_err(|e| EventError::database("insert", e))?;

        tracing::info!(event_id = model.id, "Created event");
        Ok(model.into())
    }

    async fn update(&self, event: Event) -> EventResult<Event> {
        let id = event.id;

        let model = self
            .base
            .update(entity::ActiveModel {
                id: Unchanged(id),
                title: Set(event.title),
                description: Set(event.description),
                complete: Set(event.complete),
                location: Set(event.location),
                start_time: Set(event.start_time.fixed_offset()),
                end_time: Set(event.end_time.fixed_offset()),
                updated_at: Set(Utc::now().fixed_offset()),
                ..Default::default()
            })
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => EventError::NotFound(id),
                other => EventError::database("update", other),
            })?;

        tracing::info!(event_id = id, "Updated event");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> EventResult<bool> {
        let affected = self
            .base
            .soft_delete(id)
            .await
            .map_err(|e| EventError::database("delete", e))?;

        if affected == 0 {
            return Ok(false);
        }

        tracing::info!(event_id = id, "Deleted event");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn event(id: i64) -> Event {
        let now = Utc::now();
        Event {
            id,
            title: "Meetup".into(),
            description: None,
            complete: false,
            location: "Oslo".into(),
            start_time: now,
            end_time: now + Duration::hours(2),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_update_without_matching_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgEventRepository::new(db);

        let err = repo.update(event(12)).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound(12)));
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let now = Utc::now().fixed_offset();
        let inserted = entity::Model {
            id: 5,
            title: "Meetup".into(),
            description: Some("monthly".into()),
            complete: false,
            location: "Oslo".into(),
            start_time: now,
            end_time: now + Duration::hours(2),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![inserted]])
            .into_connection();
        let repo = PgEventRepository::new(db);

        let created = repo
            .create(NewEvent {
                title: "Meetup".into(),
                description: Some("monthly".into()),
                complete: false,
                location: "Oslo".into(),
                start_time: now.into(),
                end_time: (now + Duration::hours(2)).into(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created.description.as_deref(), Some("monthly"));
        assert_eq!(created.created_at, created.updated_at);
    }
}
