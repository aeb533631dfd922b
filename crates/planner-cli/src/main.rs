use clap::Parser;
use owo_colors::{OwoColorize, Style};
use planner_core::db;
use planner_core::error::CoreError;
use planner_core::repository::SqliteRepository;

mod cli;
mod commands;
mod config;
mod http;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Interactive commands stay quiet unless RUST_LOG says otherwise.
    let default_filter = match cli.command {
        cli::Commands::Serve(_) => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = config::Config::new().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
        config::Config::default()
    });

    // `next` is pure computation and never touches the database.
    if let cli::Commands::Next(command) = cli.command {
        if let Err(e) = commands::next::next_task_date(command, &config) {
            handle_error(e);
        }
        return;
    }

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => handle_error(e.into()),
    };
    let repository = SqliteRepository::new(db_pool);

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&repository, command, &config).await,
        cli::Commands::List(command) => {
            commands::list::list_tasks(&repository, command, &config).await
        }
        cli::Commands::Show(command) => commands::show::show_task(&repository, command).await,
        cli::Commands::Edit(command) => {
            commands::edit::edit_task(&repository, command, &config).await
        }
        cli::Commands::Done(command) => {
            commands::done::done_task(&repository, command, &config).await
        }
        cli::Commands::Delete(command) => {
            commands::delete::delete_task(&repository, command).await
        }
        cli::Commands::Serve(command) => {
            commands::serve::serve(repository.clone(), command, &config).await
        }
        cli::Commands::Next(_) => Ok(()),
    };

    if let Err(e) = result {
        handle_error(e);
    }
}

fn handle_error(err: anyhow::Error) -> ! {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::NotFound(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        Some(CoreError::Recurrence(e)) => {
            eprintln!("{} {}", "Error:".style(error_style), e.yellow());
        }
        Some(CoreError::Database(e)) => {
            eprintln!("{} Database error: {}", "Error:".style(error_style), e);
        }
        _ => eprintln!("{} {}", "Error:".style(error_style), err),
    }

    std::process::exit(1);
}
