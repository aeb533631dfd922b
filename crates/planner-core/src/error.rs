use thiserror::Error;

use crate::date::DateError;

/// Failures reported by the recurrence engine.
///
/// Every variant is a caller input error; nothing here is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("invalid date format: {0}")]
    InvalidAnchorDate(String),

    #[error("empty repeat rule")]
    EmptyRule,

    #[error("invalid or unsupported repeat rule: {0}")]
    UnsupportedRule(String),

    #[error("invalid days in repeat rule: {0}")]
    InvalidDailyParameter(String),

    #[error("next date is out of the supported calendar range")]
    DateOutOfRange,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Invalid repeat rule: {0}")]
    Recurrence(#[from] RecurrenceError),

    #[error("Invalid date: {0}")]
    Date(#[from] DateError),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

impl CoreError {
    /// True for errors caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::Recurrence(_)
                | CoreError::Date(_)
                | CoreError::InvalidInput(_)
                | CoreError::InvalidTimezone(_)
        )
    }
}
