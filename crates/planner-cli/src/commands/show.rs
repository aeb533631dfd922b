use anyhow::Result;
use planner_core::repository::Repository;

use crate::cli::ShowCommand;
use crate::util::resolve_task;

pub async fn show_task(repo: &impl Repository, command: ShowCommand) -> Result<()> {
    let task = resolve_task(repo, &command.id).await?;
    println!("{}", serde_json::to_string_pretty(&task)?);
    Ok(())
}
