use clap::{Parser, Subcommand};

/// A personal task scheduler with repeating tasks
#[derive(Parser, Debug)]
#[command(name = "planner", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List upcoming tasks
    List(ListCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as done (reschedules repeating tasks)
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Compute the next date for a repeat rule
    Next(NextCommand),
    /// Run the HTTP server
    Serve(ServeCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The date of the task (YYYYMMDD or a phrase like "tomorrow")
    #[clap(short, long)]
    pub date: Option<String>,
    /// A free-form comment
    #[clap(short, long)]
    pub comment: Option<String>,
    /// Repeat rule: "d <1-400>" or "y"
    #[clap(short, long)]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Maximum number of tasks to show
    #[clap(short, long)]
    pub limit: Option<i64>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long, conflicts_with = "comment")]
    pub comment_clear: bool,

    #[arg(long, help = "Replace the repeat rule")]
    pub repeat: Option<String>,
    #[arg(long, conflicts_with = "repeat", help = "Remove the repeat rule (one-off task)")]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as done
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// Anchor date (YYYYMMDD)
    #[clap(long)]
    pub date: String,
    /// Repeat rule
    #[clap(long)]
    pub repeat: String,
    /// Reference date (YYYYMMDD); defaults to today
    #[clap(long)]
    pub now: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeCommand {
    /// Port to listen on; overrides TODO_PORT
    #[clap(short, long)]
    pub port: Option<u16>,
}
