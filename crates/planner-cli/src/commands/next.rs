use anyhow::Result;
use planner_core::date::parse_date;
use planner_core::recurrence::next_date;

use crate::cli::NextCommand;
use crate::config::Config;
use crate::util::today;

pub fn next_task_date(command: NextCommand, config: &Config) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(now) => parse_date(now)?,
        None => today(config),
    };

    println!("{}", next_date(now, &command.date, &command.repeat)?);
    Ok(())
}
