use anyhow::Result;
use planner_core::models::UpdateTaskData;
use planner_core::repository::Repository;

use crate::cli::EditCommand;
use crate::config::Config;
use crate::parser::parse_task_date;
use crate::util::{resolve_task, today};

/// Picks the new value of an optional field: an explicit clear wins, then a
/// replacement, then the current value.
fn merge_field(current: String, replacement: Option<String>, clear: bool) -> String {
    if clear {
        String::new()
    } else {
        replacement.unwrap_or(current)
    }
}

pub async fn edit_task(repo: &impl Repository, command: EditCommand, config: &Config) -> Result<()> {
    let current = resolve_task(repo, &command.id).await?;
    let today = today(config);

    let date = match command.date.as_deref() {
        Some(date) => parse_task_date(date, today, config.tz())?,
        None => current.date,
    };

    let update = UpdateTaskData {
        id: current.id.to_string(),
        date,
        title: command.title.unwrap_or(current.title),
        comment: merge_field(current.comment, command.comment, command.comment_clear),
        repeat: merge_field(current.repeat, command.repeat, command.repeat_clear),
    };

    let updated = repo.update_task(update, today).await?;
    println!("Task '{}' updated (date {}).", updated.title, updated.date);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_field() {
        assert_eq!(merge_field("d 1".into(), None, false), "d 1");
        assert_eq!(merge_field("d 1".into(), Some("y".into()), false), "y");
        assert_eq!(merge_field("d 1".into(), None, true), "");
    }
}
