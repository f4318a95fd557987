//! Task API endpoints
//!
//! Thin pass-through from HTTP to the task lifecycle service.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use tasks_core::task::{validation::validate_id, CreateTask, Task};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

// Fields are kept as raw JSON so that a missing or mistyped value reaches
// the core validation instead of failing deserialization.

#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub new_status: Option<Value>,
}

fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

impl From<CreateTaskRequest> for CreateTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            title: text(req.title),
            description: text(req.description),
        }
    }
}

/// Parse a request body, reading an empty body or a non-object as `{}`
///
/// Only syntactically broken JSON is an error.
fn lenient_json<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    match serde_json::from_slice::<Value>(body)? {
        object @ Value::Object(_) => serde_json::from_value(object),
        _ => Ok(T::default()),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.task_service().list_all())
}

/// GET /tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = state.task_service().get_by_id(&id)?;
    Ok(Json(task))
}

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let req: CreateTaskRequest = lenient_json(&body)?;
    let created = state.task_service().create(req.into())?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /tasks/{id}/status - Replace the status of a task
///
/// Answers 204 yet still carries the updated task as its body; existing
/// clients depend on that pairing.
async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    // A blank ID outranks any problem with the body
    let req: UpdateStatusRequest = lenient_json(&body).map_err(|e| {
        validate_id(Some(id.as_str()))
            .err()
            .map_or(ApiError::from(e), ApiError::from)
    })?;
    let new_status = text(req.new_status);
    let updated = state
        .task_service()
        .update_status(Some(id.as_str()), new_status.as_deref())?;
    Ok((StatusCode::NO_CONTENT, Json(updated)))
}

/// DELETE /tasks/{id} - Delete a task
///
/// Deleting an unknown but well-formed ID still answers 204.
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    state.task_service().remove(Some(id.as_str()))?;
    Ok((StatusCode::NO_CONTENT, Json("Task deleted successfully")))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task).delete(delete_task))
        .route("/tasks/{id}/status", put(update_task_status))
}
