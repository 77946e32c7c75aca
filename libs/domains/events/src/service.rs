//! Event service - business logic layer

use axum_helpers::Page;
use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{EventRequest, EventResponse};
use crate::repository::EventRepository;

/// Rejects windows where `start` is not strictly before `end`.
pub fn ensure_valid_schedule(start: DateTime<Utc>, end: DateTime<Utc>) -> EventResult<()> {
    if start < end {
        Ok(())
    } else {
        Err(EventError::Validation(
            "startTime must be before endTime".to_string(),
        ))
    }
}

/// `timestamptz` keeps microseconds, so both ends are truncated to that
/// precision before the schedule is checked and stored.
fn check_request(mut request: EventRequest) -> EventResult<EventRequest> {
    request
        .validate()
        .map_err(|e| EventError::Validation(e.to_string()))?;

    request.start_time = request.start_time.trunc_subsecs(6);
    request.end_time = request.end_time.trunc_subsecs(6);
    ensure_valid_schedule(request.start_time, request.end_time)?;

    Ok(request)
}

/// Event service
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_events(&self, page: u64, limit: u64) -> EventResult<Page<EventResponse>> {
        let (events, total) = self.repository.list(page, limit).await?;
        Ok(Page::new(events, page, limit, total).map(EventResponse::from))
    }

    #[instrument(skip(self))]
    pub async fn get_event(&self, id: i64) -> EventResult<EventResponse> {
        match self.repository.get_by_id(id).await? {
            Some(event) => Ok(event.into()),
            None => Err(EventError::NotFound(id)),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create_event(&self, request: EventRequest) -> EventResult<EventResponse> {
        let request = check_request(request)?;

        let event = self.repository.create(request.into()).await?;
        Ok(event.into())
    }

    /// The schedule is checked before the event is looked up.
    #[instrument(skip(self, request))]
    pub async fn update_event(&self, id: i64, request: EventRequest) -> EventResult<EventResponse> {
        let request = check_request(request)?;

        let mut event = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))?;
        event.apply_request(request);

        Ok(self.repository.update(event).await?.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_event(&self, id: i64) -> EventResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(EventError::NotFound(id));
        }
        Ok(())
    }
}
