use async_trait::async_trait;
use chrono::Utc;
use database::BaseRepository;
use sea_orm::{ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, DbErr};

use crate::entity;
use crate::error::{TaskError, TaskResult};
use crate::models::{NewTask, Task};
use crate::repository::TaskRepository;

/// PostgreSQL implementation of TaskRepository using SeaORM
#[derive(Clone)]
pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self, page: u64, limit: u64) -> TaskResult<(Vec<Task>, u64)> {
        let total = self
            .base
            .count_active()
            .await
            .map_err(|e| TaskError::database("count", e))?;

        let models = self
            .base
            .find_page(page, limit)
            .await
            .map_err(|e| TaskError::database("list", e))?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let model = self
            .base
            .find_active_by_id(id)
            .await
            .map_err(|e| TaskError::database("get", e))?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let now = Utc::now().fixed_offset();

        let active_model = entity::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            status: Set(input.status),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| TaskError::database("insert", e))?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn update(&self, task: Task) -> TaskResult<Task> {
        let id = task.id;

        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            title: Set(task.title),
            description: Set(task.description),
            status: Set(task.status),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let model = self
            .base
            .update(active_model)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => TaskError::NotFound(id),
                other => TaskError::database("update", other),
            })?;

        tracing::info!(task_id = id, "Updated task");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> TaskResult<bool> {
        let affected = self
            .base
            .soft_delete(id)
            .await
            .map_err(|e| TaskError::database("delete", e))?;

        if affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
        }

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i64, title: &str) -> entity::Model {
        let now = Utc::now().fixed_offset();
        entity::Model {
            id,
            title: title.to_string(),
            description: None,
            status: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "write report")]])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let task = repo.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(task.id, 3);
        assert_eq!(task.title, "write report");
    }

    #[tokio::test]
    async fn test_get_by_id_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_database_failure_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection lost".into())])
            .into_connection();
        let repo = PgTaskRepository::new(db);

        let err = repo.get_by_id(1).await.unwrap_err();
        assert!(matches!(err, TaskError::Database { operation: "get", .. }));
    }
}
