use anyhow::Result;
use planner_core::models::CompletionResult;
use planner_core::repository::Repository;

use crate::cli::DoneCommand;
use crate::config::Config;
use crate::util::{resolve_task, today};

pub async fn done_task(repo: &impl Repository, command: DoneCommand, config: &Config) -> Result<()> {
    let task = resolve_task(repo, &command.id).await?;

    match repo.complete_task(task.id, today(config)).await? {
        CompletionResult::Deleted(task) => {
            println!("Completed task: '{}'", task.title);
        }
        CompletionResult::Rescheduled { previous_date, task } => {
            println!("Completed task: '{}' ({})", task.title, previous_date);
            println!("Next occurrence scheduled for {}", task.date);
        }
    }

    Ok(())
}
