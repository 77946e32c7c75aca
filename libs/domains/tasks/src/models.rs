use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Task entity, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Overwrites every mutable field. `id` and timestamps are left alone.
    pub fn apply_request(&mut self, request: TaskRequest) {
        self.title = request.title;
        self.description = request.description;
        self.status = request.status;
    }
}

/// Fields for a task that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: bool,
}

impl From<TaskRequest> for NewTask {
    fn from(request: TaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            status: request.status,
        }
    }
}

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
///
/// Updates replace the whole task, so omitted optional fields reset
/// (`description` to null, `status` to false).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    #[schema(example = "Buy milk")]
    pub title: String,

    #[serde(default)]
    #[schema(example = "Two litres, semi-skimmed")]
    pub description: Option<String>,

    /// Completion flag
    #[serde(default)]
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_optional_fields() {
        let request: TaskRequest = serde_json::from_value(json!({"title": "Buy milk"})).unwrap();

        assert_eq!(request.title, "Buy milk");
        assert_eq!(request.description, None);
        assert!(!request.status);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_empty_and_long_titles() {
        let empty = TaskRequest {
            title: String::new(),
            description: None,
            status: false,
        };
        assert!(empty.validate().is_err());

        let long = TaskRequest {
            title: "x".repeat(256),
            ..empty
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let now = Utc::now();
        let response = TaskResponse::from(Task {
            id: 1,
            title: "Buy milk".into(),
            description: None,
            status: false,
            created_at: now,
            updated_at: now,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value["description"].is_null());
    }

    #[test]
    fn test_apply_request_replaces_mutable_fields() {
        let now = Utc::now();
        let mut task = Task {
            id: 7,
            title: "Old".into(),
            description: Some("old description".into()),
            status: true,
            created_at: now,
            updated_at: now,
        };

        task.apply_request(TaskRequest {
            title: "New".into(),
            description: None,
            status: false,
        });

        assert_eq!(task.id, 7);
        assert_eq!(task.title, "New");
        assert_eq!(task.description, None);
        assert!(!task.status);
        assert_eq!(task.created_at, now);
    }
}
