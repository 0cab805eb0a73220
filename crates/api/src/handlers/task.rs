//! Handlers for the `/tasks` resource.
//!
//! Create and update both take camelCase query parameters (the desktop
//! client's wire format). Assignee resolution degrades silently: naming
//! an employee that does not exist never fails the request.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use crewdesk_core::error::CoreError;
use crewdesk_core::types::{DateOnly, DbId};
use crewdesk_db::models::task::{CreateTask, Task, UpdateTask};
use crewdesk_db::repositories::{EmployeeRepo, ProjectRepo, TaskRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `POST /tasks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskParams {
    pub name: String,
    pub description: String,
    pub priority: String,
    pub due_date: DateOnly,
    pub status: String,
    pub assignee_id: DbId,
}

/// Query parameters for `PUT /tasks/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskParams {
    pub name: String,
    pub description: String,
    pub priority: String,
    pub due_date: DateOnly,
    pub status: String,
    pub assignee_id: DbId,
    pub project_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /tasks?name=&description=&priority=&dueDate=yyyy-MM-dd&status=&assigneeId=
///
/// A non-existent `assigneeId` is tolerated: the task is created unassigned.
pub async fn create(
    State(state): State<AppState>,
    Query(input): Query<CreateTaskParams>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let assignee_id = resolve_assignee(&state, input.assignee_id).await?;

    let task = TaskRepo::create(
        &state.pool,
        &CreateTask {
            name: input.name,
            description: input.description,
            priority: input.priority,
            due_date: input.due_date,
            status: input.status,
            assignee_id,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /tasks/{id}?...&projectId=
///
/// Requires both an existing task and an existing project; if either is
/// missing the update is a no-op and the response is 404. On success the
/// task is attached to the target project (idempotently) and a vanished
/// `assigneeId` leaves the current assignee in place.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(input): Query<UpdateTaskParams>,
) -> AppResult<Json<Task>> {
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    let project = ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }))?;

    let assignee_id = resolve_assignee(&state, input.assignee_id).await?;

    let task = TaskRepo::update(
        &state.pool,
        id,
        &UpdateTask {
            name: input.name,
            description: input.description,
            priority: input.priority,
            due_date: input.due_date,
            status: input.status,
            assignee_id,
            project_id: project.id,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    Ok(Json(task))
}

/// DELETE /tasks/{id}
///
/// Never affects the assignee employee.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a requested assignee to an existing employee id, or `None` when
/// the employee does not exist (silent degradation, no error raised).
async fn resolve_assignee(state: &AppState, requested: DbId) -> Result<Option<DbId>, AppError> {
    let employee = EmployeeRepo::find_by_id(&state.pool, requested).await?;
    if employee.is_none() {
        tracing::debug!(assignee_id = requested, "Requested assignee does not exist");
    }
    Ok(employee.map(|e| e.id))
}
