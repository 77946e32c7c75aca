//! Uniform response envelope shared by every resource.
//!
//! ```json
//! { "status": "success", "message": "Task retrieved successfully", "data": { ... } }
//! ```
//!
//! List endpoints use [`PaginatedResponse`], which adds a `pagination` block.

use crate::pagination::{Page, Pagination};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Single-item success envelope. `data` is `null` for operations without a payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with `"data": null`.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: None,
        }
    }
}

/// List envelope with pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn from_page(page: Page<T>, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: page.items,
            pagination: page.pagination,
        }
    }
}
