//! Event domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A persisted event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub complete: bool,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn apply_request(&mut self, request: EventRequest) {
        self.title = request.title;
        self.description = request.description;
        self.complete = request.complete;
        self.location = request.location;
        self.start_time = request.start_time;
        self.end_time = request.end_time;
    }
}

/// Event fields before the repository assigns an id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub complete: bool,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<EventRequest> for NewEvent {
    fn from(request: EventRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            complete: request.complete,
            location: request.location,
            start_time: request.start_time,
            end_time: request.end_time,
        }
    }
}

/// Body of `POST /events` and `PUT /events/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    #[schema(example = "Team offsite")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 255, message = "location must be 1-255 characters"))]
    #[schema(example = "Berlin")]
    pub location: String,

    /// Must be strictly before `endTime`
    #[schema(example = "2024-01-01T10:00:00Z")]
    pub start_time: DateTime<Utc>,

    #[schema(example = "2024-01-01T12:00:00Z")]
    pub end_time: DateTime<Utc>,

    #[serde(default)]
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub complete: bool,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            complete: event.complete,
            location: event.location,
            start_time: event.start_time,
            end_time: event.end_time,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}
