use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod tasks;

/// Task storage plus the lifecycle rules applied on the way in.
///
/// Operations that depend on the current date take `today` explicitly so the
/// caller decides which timezone "today" belongs to.
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    async fn list_tasks(&self, limit: Option<i64>) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError>;
}

/// Main repository trait.
pub trait Repository: TaskRepository + Send + Sync {}

impl<T: TaskRepository + Send + Sync> Repository for T {}

/// SQLite implementation of the repository pattern
#[derive(Clone)]
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
