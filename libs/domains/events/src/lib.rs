//! Events Domain
//!
//! Scheduled events with a title, a location and a time window.
//! An event's `start_time` is always strictly before its `end_time`;
//! [`EventService`] rejects anything else before touching storage.
//!
//! Layout mirrors the tasks domain: handlers → service → repository,
//! with an in-memory repository for tests and [`PgEventRepository`]
//! for PostgreSQL.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::{Event, EventRequest, EventResponse, NewEvent};
pub use postgres::PgEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;
