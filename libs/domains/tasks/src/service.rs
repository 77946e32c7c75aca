use axum_helpers::Page;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{TaskRequest, TaskResponse};
use crate::repository::TaskRepository;

/// Task service handling business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// `page` and `limit` arrive already range-checked by the query extractor.
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, page: u64, limit: u64) -> TaskResult<Page<TaskResponse>> {
        let (tasks, total) = self.repository.list(page, limit).await?;
        let items = tasks.into_iter().map(TaskResponse::from).collect();

        Ok(Page::new(items, page, limit, total))
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, id: i64) -> TaskResult<TaskResponse> {
        let task = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        Ok(task.into())
    }

    #[instrument(skip(self, request))]
    pub async fn create_task(&self, request: TaskRequest) -> TaskResult<TaskResponse> {
        request
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self.repository.create(request.into()).await?;
        Ok(task.into())
    }

    /// Full replace of the mutable fields of a live task.
    #[instrument(skip(self, request))]
    pub async fn update_task(&self, id: i64, request: TaskRequest) -> TaskResult<TaskResponse> {
        request
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let mut task = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        task.apply_request(request);

        let updated = self.repository.update(task).await?;
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: i64) -> TaskResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(TaskError::NotFound(id))
        }
    }
}
