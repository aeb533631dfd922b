use crate::date::{format_date, parse_date};
use crate::error::CoreError;
use crate::models::{
    parse_task_id, CompletionResult, NewTaskData, Task, UpdateTaskData, DEFAULT_TASK_LIMIT,
    MAX_RULE_LENGTH,
};
use crate::recurrence::{next_date, RecurrenceRule};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let data = prepare_new_task(data, today)?;
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as(
            r#"INSERT INTO scheduler (date, title, comment, repeat)
            VALUES ($1, $2, $3, $4)
            RETURNING id, date, title, COALESCE(comment, '') AS comment, COALESCE(repeat, '') AS repeat
            "#,
        )
        .bind(data.date)
        .bind(data.title)
        .bind(data.comment)
        .bind(data.repeat)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(id = task.id, date = %task.date, "task added");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as(
            "SELECT id, date, title, COALESCE(comment, '') AS comment, COALESCE(repeat, '') AS repeat
            FROM scheduler WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(task)
    }

    async fn list_tasks(&self, limit: Option<i64>) -> Result<Vec<Task>, CoreError> {
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_TASK_LIMIT);

        let tasks = sqlx::query_as(
            "SELECT id, date, title, COALESCE(comment, '') AS comment, COALESCE(repeat, '') AS repeat
            FROM scheduler ORDER BY date LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(tasks)
    }

    async fn update_task(&self, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let id = parse_task_id(&data.id)?;
        let date = if data.date.is_empty() {
            format_date(today)
        } else {
            parse_date(&data.date)?;
            data.date
        };
        require_title(&data.title)?;
        validate_rule(&data.repeat)?;

        let mut tx = self.pool().begin().await?;
        let task: Task = sqlx::query_as(
            r#"UPDATE scheduler
            SET date = $1, title = $2, comment = $3, repeat = $4
            WHERE id = $5
            RETURNING id, date, title, COALESCE(comment, '') AS comment, COALESCE(repeat, '') AS repeat
            "#,
        )
        .bind(date)
        .bind(data.title)
        .bind(data.comment)
        .bind(data.repeat)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        tx.commit().await?;

        debug!(id, date = %task.date, "task updated");
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        debug!(id, "task deleted");
        Ok(())
    }

    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as(
            "SELECT id, date, title, COALESCE(comment, '') AS comment, COALESCE(repeat, '') AS repeat
            FROM scheduler WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if !task.is_recurring() {
            sqlx::query("DELETE FROM scheduler WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            debug!(id, "one-off task completed and removed");
            return Ok(CompletionResult::Deleted(task));
        }

        let next = next_date(today, &task.date, &task.repeat)?;
        sqlx::query("UPDATE scheduler SET date = $1 WHERE id = $2")
            .bind(&next)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!(id, from = %task.date, to = %next, "recurring task rescheduled");
        let previous_date = task.date;
        Ok(CompletionResult::Rescheduled {
            previous_date,
            task: Task { date: next, ..task },
        })
    }
}

/// Applies the creation rules to incoming task data.
///
/// An empty date means today. A date on or before today is moved to today
/// for one-off tasks, and to the next occurrence after today for recurring
/// ones. Future dates are kept as given.
pub(crate) fn prepare_new_task(mut data: NewTaskData, today: NaiveDate) -> Result<NewTaskData, CoreError> {
    if data.date.is_empty() {
        data.date = format_date(today);
    } else {
        let anchor = parse_date(&data.date)?;
        if anchor <= today {
            data.date = if data.repeat.is_empty() {
                format_date(today)
            } else {
                next_date(today, &data.date, &data.repeat)?
            };
        }
    }

    validate_rule(&data.repeat)?;
    require_title(&data.title)?;
    Ok(data)
}

fn require_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::InvalidInput("task title is required".to_string()));
    }
    Ok(())
}

fn validate_rule(repeat: &str) -> Result<(), CoreError> {
    if repeat.is_empty() {
        return Ok(());
    }
    if repeat.chars().count() > MAX_RULE_LENGTH {
        return Err(CoreError::InvalidInput(format!(
            "repeat rule is longer than {} characters",
            MAX_RULE_LENGTH
        )));
    }
    repeat.parse::<RecurrenceRule>()?;
    Ok(())
}
