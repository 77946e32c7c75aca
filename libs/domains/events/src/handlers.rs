//! HTTP handlers for the events API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use axum_helpers::{
    ApiResponse, IdPath, PaginatedResponse, Pagination, PaginationQuery, ValidatedJson,
    ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestPaginationResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::models::{EventRequest, EventResponse};
use crate::repository::EventRepository;
use crate::service::EventService;

#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, get_event, update_event, delete_event),
    components(
        schemas(EventRequest, EventResponse, Pagination),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestPaginationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "events", description = "Event scheduling endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<EventService<R>>>;

pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(Arc::new(service))
}

/// List events
#[utoipa::path(
    get,
    path = "",
    tag = "events",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List events successfully", body = PaginatedResponse<EventResponse>),
        (status = 400, response = BadRequestPaginationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): SharedService<R>,
    ValidatedQuery(query): ValidatedQuery<PaginationQuery>,
) -> EventResult<Json<PaginatedResponse<EventResponse>>> {
    let page = service.list_events(query.page, query.limit).await?;
    Ok(Json(PaginatedResponse::from_page(page, "List events successfully")))
}

/// Create an event
///
/// `startTime` must be strictly before `endTime`.
#[utoipa::path(
    post,
    path = "",
    tag = "events",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = ApiResponse<EventResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): SharedService<R>,
    ValidatedJson(input): ValidatedJson<EventRequest>,
) -> EventResult<(StatusCode, Json<ApiResponse<EventResponse>>)> {
    let event = service.create_event(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(event, "Event created successfully")),
    ))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event retrieved successfully", body = ApiResponse<EventResponse>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> EventResult<Json<ApiResponse<EventResponse>>> {
    let event = service.get_event(id).await?;
    Ok(Json(ApiResponse::success(event, "Event retrieved successfully")))
}

/// Replace an event
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = ApiResponse<EventResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<EventRequest>,
) -> EventResult<Json<ApiResponse<EventResponse>>> {
    let event = service.update_event(id, input).await?;
    Ok(Json(ApiResponse::success(event, "Event updated successfully")))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_event<R: EventRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> EventResult<Json<ApiResponse<()>>> {
    service.delete_event(id).await?;
    Ok(Json(ApiResponse::empty("Event deleted successfully")))
}
