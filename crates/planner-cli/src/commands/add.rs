use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use planner_core::models::NewTaskData;
use planner_core::repository::Repository;

use crate::cli::AddCommand;
use crate::config::Config;
use crate::parser::parse_task_date;
use crate::util::today;

pub async fn add_task(repo: &impl Repository, command: AddCommand, config: &Config) -> Result<()> {
    let today = today(config);
    let date = command
        .date
        .as_deref()
        .map(|d| parse_task_date(d, today, config.tz()))
        .transpose()?
        .unwrap_or_default();

    let new_task_data = NewTaskData {
        date,
        title: command.title,
        comment: command.comment.unwrap_or_default(),
        repeat: command.repeat.unwrap_or_default(),
    };

    let added_task = repo.add_task(new_task_data, today).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        added_task.title.bright_white().bold()
    );
    println!(
        "  {} Task ID: {}",
        "→".style(info_style),
        added_task.id.to_string().yellow()
    );
    println!("  {} Date: {}", "→".style(info_style), added_task.date);
    if let Some(rule) = added_task.rule() {
        println!("  {} Repeats: {}", "→".style(info_style), rule);
    }

    Ok(())
}
