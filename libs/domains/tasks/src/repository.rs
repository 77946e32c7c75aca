use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::{NewTask, Task};

/// Repository trait for Task persistence.
///
/// Every read ignores soft-deleted tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// One page of live tasks ordered by id, plus the total live count
    async fn list(&self, page: u64, limit: u64) -> TaskResult<(Vec<Task>, u64)>;

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// Assigns the id and both timestamps
    async fn create(&self, task: NewTask) -> TaskResult<Task>;

    /// Persists mutable fields and refreshes `updated_at`
    async fn update(&self, task: Task) -> TaskResult<Task>;

    /// Soft-deletes a live task. Returns false when nothing was deleted.
    async fn delete(&self, id: i64) -> TaskResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, (Task, Option<DateTime<Utc>>)>,
}

impl Store {
    fn live(&self) -> impl Iterator<Item = &Task> {
        self.rows
            .values()
            .filter(|(_, deleted_at)| deleted_at.is_none())
            .map(|(task, _)| task)
    }
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self, page: u64, limit: u64) -> TaskResult<(Vec<Task>, u64)> {
        let store = self.store.read().await;
        let total = store.live().count() as u64;
        let offset = database::page_offset(page, limit);

        let items = store
            .live()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .get(&id)
            .filter(|(_, deleted_at)| deleted_at.is_none())
            .map(|(task, _)| task.clone()))
    }

    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let now = Utc::now();
        let task = Task {
            id: store.next_id,
            title: input.title,
            description: input.description,
            status: input.status,
            created_at: now,
            updated_at: now,
        };

        store.rows.insert(task.id, (task.clone(), None));
        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn update(&self, task: Task) -> TaskResult<Task> {
        let mut store = self.store.write().await;

        let (stored, _) = store
            .rows
            .get_mut(&task.id)
            .filter(|(_, deleted_at)| deleted_at.is_none())
            .ok_or(TaskError::NotFound(task.id))?;

        stored.title = task.title;
        stored.description = task.description;
        stored.status = task.status;
        stored.updated_at = Utc::now().max(stored.updated_at);

        tracing::info!(task_id = stored.id, "Updated task");
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> TaskResult<bool> {
        let mut store = self.store.write().await;

        match store.rows.get_mut(&id) {
            Some((_, deleted_at @ None)) => {
                *deleted_at = Some(Utc::now());
                tracing::info!(task_id = id, "Deleted task");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: None,
            status: false,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryTaskRepository::new();

        let first = repo.create(new_task("first")).await.unwrap();
        let second = repo.create(new_task("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_list_pages_in_id_order() {
        let repo = InMemoryTaskRepository::new();
        for title in ["a", "b", "c"] {
            repo.create(new_task(title)).await.unwrap();
        }

        let (first, total) = repo.list(1, 2).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(first.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

        let (second, _) = repo.list(2, 2).await.unwrap();
        assert_eq!(second.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);

        let (beyond, total) = repo.list(5, 2).await.unwrap();
        assert!(beyond.is_empty());
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_deleted_tasks_are_hidden() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(new_task("gone")).await.unwrap();
        repo.create(new_task("kept")).await.unwrap();

        assert!(repo.delete(task.id).await.unwrap());
        assert!(!repo.delete(task.id).await.unwrap());

        assert!(repo.get_by_id(task.id).await.unwrap().is_none());
        let (items, total) = repo.list(1, 10).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(items[0].title, "kept");
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(new_task("one")).await.unwrap();
        repo.delete(task.id).await.unwrap();

        let next = repo.create(new_task("two")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let repo = InMemoryTaskRepository::new();
        let mut task = repo.create(new_task("draft")).await.unwrap();
        let created_at = task.created_at;

        task.title = "final".into();
        task.status = true;
        let updated = repo.update(task).await.unwrap();

        assert_eq!(updated.title, "final");
        assert!(updated.status);
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at >= created_at);
    }

    #[tokio::test]
    async fn test_update_deleted_task_is_not_found() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.create(new_task("gone")).await.unwrap();
        repo.delete(task.id).await.unwrap();

        let result = repo.update(task).await;
        assert!(matches!(result, Err(TaskError::NotFound(1))));
    }
}
