use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use planner_core::date::parse_date;
use planner_core::error::CoreError;
use planner_core::models::{parse_task_id, NewTaskData, Task, UpdateTaskData};
use planner_core::recurrence::next_date;
use planner_core::repository::TaskRepository;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::errors::ApiError;
use super::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NextDateQuery {
    pub now: String,
    pub date: String,
    pub repeat: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdQuery {
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub limit: String,
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// `GET /api/nextdate`: plain-text result, plain-text errors.
pub async fn next_date_handler(Query(query): Query<NextDateQuery>) -> Response {
    let Ok(now) = parse_date(&query.now) else {
        return (StatusCode::BAD_REQUEST, "Invalid now parameter").into_response();
    };

    match next_date(now, &query.date, &query.repeat) {
        Ok(next) => ([(header::CONTENT_TYPE, "text/plain")], next).into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    }
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewTaskData>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(data) = payload?;
    let task = state.repo.add_task(data, state.today()).await?;
    Ok(Json(json!({ "id": task.id.to_string() })))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(&query.id)?;
    let task = state
        .repo
        .find_task_by_id(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateTaskData>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(data) = payload?;
    state.repo.update_task(data, state.today()).await?;
    Ok(Json(json!({})))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_task_id(&query.id)?;
    state.repo.delete_task(id).await?;
    Ok(Json(json!({})))
}

/// `POST /api/task/done`: removes one-off tasks, reschedules repeating ones.
pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_task_id(&query.id)?;
    state.repo.complete_task(id, state.today()).await?;
    Ok(Json(json!({})))
}

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<TaskListResponse>, ApiError> {
    // Unparseable limits fall back to the configured page size.
    let limit = query
        .limit
        .parse::<i64>()
        .ok()
        .filter(|l| *l > 0)
        .unwrap_or(state.list_limit);
    let tasks = state.repo.list_tasks(Some(limit)).await?;
    Ok(Json(TaskListResponse { tasks }))
}
