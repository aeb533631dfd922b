use anyhow::Result;
use planner_core::repository::Repository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::util::today;
use crate::views::table::display_tasks;

pub async fn list_tasks(repo: &impl Repository, command: ListCommand, config: &Config) -> Result<()> {
    let limit = command.limit.unwrap_or(config.list_limit);
    let tasks = repo.list_tasks(Some(limit)).await?;

    display_tasks(&tasks, today(config));

    Ok(())
}
