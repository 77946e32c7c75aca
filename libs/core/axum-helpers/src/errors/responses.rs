//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": "error",
        "code": 2003,
        "error": "DATABASE_ERROR",
        "message": "Database error occurred",
        "data": null
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "status": "error",
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "data": null,
        "details": {
            "title": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "max": 255, "value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "status": "error",
        "code": 1002,
        "error": "INVALID_ID",
        "message": "Invalid id: abc",
        "data": null
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid pagination",
    content_type = "application/json",
    example = json!({
        "status": "error",
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "data": null,
        "details": {
            "limit": [{
                "code": "range",
                "message": "limit must be between 1 and 100",
                "params": {"min": 1.0, "max": 100.0, "value": 500}
            }]
        }
    })
)]
pub struct BadRequestPaginationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": "error",
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found",
        "data": null
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
