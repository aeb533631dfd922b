//! JSON API and static front end served by `planner serve`.

use axum::routing::{get, post};
use axum::Router;
use chrono::NaiveDate;
use chrono_tz::Tz;
use planner_core::date::today_in;
use planner_core::repository::SqliteRepository;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod handlers;

/// Shared state handed to every handler.
pub struct AppState {
    pub repo: SqliteRepository,
    pub tz: Tz,
    pub list_limit: i64,
}

impl AppState {
    pub fn new(repo: SqliteRepository, tz: Tz, list_limit: i64) -> Self {
        Self {
            repo,
            tz,
            list_limit,
        }
    }

    pub fn today(&self) -> NaiveDate {
        today_in(self.tz)
    }
}

pub fn build_router(state: Arc<AppState>, web_dir: &Path) -> Router {
    Router::new()
        .route("/api/nextdate", get(handlers::next_date_handler))
        .route(
            "/api/task",
            post(handlers::create_task)
                .get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/api/task/done", post(handlers::complete_task))
        .route("/api/tasks", get(handlers::list_tasks))
        .fallback_service(ServeDir::new(web_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
