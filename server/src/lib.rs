//! In-memory task-management REST API.
//!
//! # Overview
//! Four routes under `/tasks`: list, create, update, delete. Records live in
//! a [`store::TaskStore`] for the lifetime of the process — there is no
//! persistence, authentication, or pagination.
//!
//! # Design
//! - Handlers receive the store through axum state; nothing is process-global.
//! - All successful responses are 200 with a JSON task body, including
//!   DELETE, which returns the removed task.
//! - Failures are 400 (validation, malformed body) or 404 (unknown id);
//!   see [`error::ApiError`].

pub mod error;
pub mod store;
pub mod types;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::debug;
use uuid::Uuid;

pub use error::ApiError;
pub use store::{TaskRecord, TaskStore};
pub use types::{TaskRequest, TaskResponse};

/// Build the router with a fresh, empty store.
pub fn app() -> Router {
    router(TaskStore::new())
}

/// Build the router around an existing store.
pub fn router(store: TaskStore) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", axum::routing::put(update_task).delete(delete_task))
        .with_state(store)
}

/// Serve the API on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_tasks(State(store): State<TaskStore>) -> Json<Vec<TaskResponse>> {
    let tasks = store.list().await;
    Json(tasks.iter().map(TaskResponse::from).collect())
}

async fn create_task(
    State(store): State<TaskStore>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    let record = store.insert(request.name, request.is_completed).await;
    debug!("created task {}", record.id);
    Ok(Json(TaskResponse::from(&record)))
}

async fn update_task(
    State(store): State<TaskStore>,
    Path(id): Path<Uuid>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    let record = store
        .update(id, request.name, request.is_completed)
        .await
        .ok_or(ApiError::NotFound)?;
    debug!("updated task {id}");
    Ok(Json(TaskResponse::from(&record)))
}

async fn delete_task(
    State(store): State<TaskStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let record = store.remove(id).await.ok_or(ApiError::NotFound)?;
    debug!("deleted task {id}");
    Ok(Json(TaskResponse::from(&record)))
}
