use anyhow::Result;
use chrono::NaiveDate;
use planner_core::date::today_in;
use planner_core::error::CoreError;
use planner_core::models::{parse_task_id, Task};
use planner_core::repository::Repository;

use crate::config::Config;

/// Today's date in the configured timezone.
pub fn today(config: &Config) -> NaiveDate {
    today_in(config.tz())
}

/// Loads a task by its textual ID, failing when it does not exist.
pub async fn resolve_task(repo: &impl Repository, raw_id: &str) -> Result<Task> {
    let id = parse_task_id(raw_id)?;
    let task = repo
        .find_task_by_id(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("No task found with ID '{}'", id)))?;
    Ok(task)
}
