//! HTTP server for the task API
//!
//! Routes:
//! - `POST /tasks`, `GET /tasks`
//! - `GET /tasks/:id`, `PATCH /tasks/:id`, `DELETE /tasks/:id`
//! - `GET /ping` (liveness), `GET /health` (readiness)

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::{future::Future, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    error::ApiError,
    handler::{HealthStatus, TaskHandler},
};
use task_core::{NewTask, Task, TaskRepository, UpdateTask};

/// Shared server state for handlers
pub struct ApiState<R> {
    pub handler: TaskHandler<R>,
}

/// Task API server
pub struct TaskApiServer<R> {
    handler: TaskHandler<R>,
}

impl<R: TaskRepository + 'static> TaskApiServer<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            handler: TaskHandler::new(repository),
        }
    }

    /// Build the router with all endpoints
    pub fn router(&self) -> Router {
        create_router(self.handler.clone())
    }

    /// Bind `addr` and serve until `shutdown` resolves
    pub async fn serve<F>(self, addr: SocketAddr, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr).await?;
        self.serve_with_listener(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// In-flight requests are allowed to complete before this returns.
    pub async fn serve_with_listener<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        info!("Task API listening on {}", local_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}

/// Create the router for the given handler
pub fn create_router<R: TaskRepository + 'static>(handler: TaskHandler<R>) -> Router {
    let state = Arc::new(ApiState { handler });

    Router::new()
        .route("/tasks", get(list_tasks::<R>).post(create_task::<R>))
        .route(
            "/tasks/:id",
            get(get_task::<R>)
                .patch(update_task::<R>)
                .delete(delete_task::<R>),
        )
        .route("/ping", get(ping))
        .route("/health", get(health::<R>))
        .layer(middleware::from_fn(
            crate::request_logger::request_logging_middleware,
        ))
        .with_state(state)
}

type ApiResult<T> = Result<T, ApiError>;

async fn create_task<R: TaskRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let Json(new_task) = payload?;
    let task = state.handler.create_task(new_task).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_tasks<R: TaskRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.handler.list_tasks().await?))
}

async fn get_task<R: TaskRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Task>> {
    let Path(id) = id?;
    Ok(Json(state.handler.get_task(id).await?))
}

async fn update_task<R: TaskRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTask>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let Path(id) = id?;
    let Json(updates) = payload?;
    Ok(Json(state.handler.update_task(id, updates).await?))
}

async fn delete_task<R: TaskRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.handler.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Liveness check, never touches the database
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness check backed by the repository health check
async fn health<R: TaskRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
) -> (StatusCode, Json<HealthStatus>) {
    match state.handler.health_check().await {
        Ok(status) => (StatusCode::OK, Json(status)),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthStatus::unavailable()))
        }
    }
}
