use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{EventError, EventResult};
use crate::models::{Event, NewEvent};

/// Repository trait for Event persistence.
///
/// Stores whatever it is given; the schedule rule is checked by the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self, page: u64, limit: u64) -> EventResult<(Vec<Event>, u64)>;

    async fn get_by_id(&self, id: i64) -> EventResult<Option<Event>>;

    async fn create(&self, event: NewEvent) -> EventResult<Event>;

    async fn update(&self, event: Event) -> EventResult<Event>;

    async fn delete(&self, id: i64) -> EventResult<bool>;
}

struct Row {
    event: Event,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct Store {
    last_id: i64,
    rows: BTreeMap<i64, Row>,
}

/// In-memory implementation of EventRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryEventRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self, page: u64, limit: u64) -> EventResult<(Vec<Event>, u64)> {
        let store = self.store.read().await;
        let live: Vec<&Event> = store
            .rows
            .values()
            .filter(|row| row.deleted_at.is_none())
            .map(|row| &row.event)
            .collect();

        let total = live.len() as u64;
        let offset = usize::try_from(database::page_offset(page, limit)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        let items = live.into_iter().skip(offset).take(limit).cloned().collect();
        Ok((items, total))
    }

    async fn get_by_id(&self, id: i64) -> EventResult<Option<Event>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .get(&id)
            .filter(|row| row.deleted_at.is_none())
            .map(|row| row.event.clone()))
    }

    async fn create(&self, input: NewEvent) -> EventResult<Event> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let event = Event {
            id: store.last_id,
            title: input.title,
            description: input.description,
            complete: input.complete,
            location: input.location,
            start_time: input.start_time,
            end_time: input.end_time,
            created_at: now,
            updated_at: now,
        };

        store.rows.insert(
            event.id,
            Row {
                event: event.clone(),
                deleted_at: None,
            },
        );

        tracing::info!(event_id = event.id, "Created event");
        Ok(event)
    }

    async fn update(&self, event: Event) -> EventResult<Event> {
        let mut store = self.store.write().await;
        let row = store
            .rows
            .get_mut(&event.id)
            .filter(|row| row.deleted_at.is_none())
            .ok_or(EventError::NotFound(event.id))?;

        let updated_at = Utc::now().max(row.event.updated_at);
        row.event = Event {
            created_at: row.event.created_at,
            updated_at,
            ..event
        };

        tracing::info!(event_id = row.event.id, "Updated event");
        Ok(row.event.clone())
    }

    async fn delete(&self, id: i64) -> EventResult<bool> {
        let mut store = self.store.write().await;
        let Some(row) = store.rows.get_mut(&id).filter(|row| row.deleted_at.is_none()) else {
            return Ok(false);
        };

        row.deleted_at = Some(Utc::now());
        tracing::info!(event_id = id, "Deleted event");
        Ok(true)
    }
}
