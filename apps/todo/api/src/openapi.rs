use utoipa::OpenApi;

/// Root API document; each domain contributes its own paths under `/v1`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "Tasks and events with soft delete and paginated listing"
    ),
    nest(
        (path = "/v1/tasks", api = domain_tasks::ApiDoc),
        (path = "/v1/events", api = domain_events::ApiDoc)
    )
)]
pub struct ApiDoc;
