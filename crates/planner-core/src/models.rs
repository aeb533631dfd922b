use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use sqlx::FromRow;

use crate::recurrence::RecurrenceRule;

/// Default page size for task listings.
pub const DEFAULT_TASK_LIMIT: i64 = 50;

/// Longest repeat rule the `scheduler` table accepts.
pub const MAX_RULE_LENGTH: usize = 128;

/// A stored task.
///
/// `date` is always in `YYYYMMDD` form. Empty `comment` and `repeat`
/// mean "none"; a task with an empty `repeat` is one-off.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl Task {
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }

    /// The parsed repeat rule, if the task has one and it is well formed.
    pub fn rule(&self) -> Option<RecurrenceRule> {
        self.repeat.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewTaskData {
    /// Anchor date in `YYYYMMDD` form; empty means today
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Full replacement of an existing task's fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskData {
    /// Raw identifier as received from the caller
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

#[derive(Debug)]
pub enum CompletionResult {
    /// One-off task removed from the store
    Deleted(Task),
    /// Recurring task moved to its next date
    Rescheduled { previous_date: String, task: Task },
}

/// Parses a caller-supplied task identifier.
pub fn parse_task_id(raw: &str) -> Result<i64, crate::error::CoreError> {
    if raw.is_empty() {
        return Err(crate::error::CoreError::InvalidInput(
            "task id is required".to_string(),
        ));
    }
    raw.parse().map_err(|_| {
        crate::error::CoreError::InvalidInput(format!("task id must be a number, got '{}'", raw))
    })
}
