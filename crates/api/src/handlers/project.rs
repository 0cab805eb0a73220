//! Handlers for the `/projects` resource.
//!
//! Creation takes query parameters (the desktop client's wire format);
//! updates take a JSON body. Responses embed the members mapping and the
//! owned task list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use crewdesk_core::error::CoreError;
use crewdesk_core::types::DbId;
use crewdesk_db::models::project::{CreateProject, Project, ProjectView, UpdateProject};
use crewdesk_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /projects?name=&description=&deadline=yyyy-MM-dd&priority=
pub async fn create(
    State(state): State<AppState>,
    Query(input): Query<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectView>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    let view = load_view(&state, project).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectView>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let mut views = Vec::with_capacity(projects.len());
    for project in projects {
        views.push(load_view(&state, project).await?);
    }
    Ok(Json(views))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectView>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let view = load_view(&state, project).await?;
    Ok(Json(view))
}

/// PUT /projects/{id}
///
/// Replaces name, description, deadline, and priority wholesale. The
/// members mapping is only replaced when the request carries a non-empty
/// map; an empty or absent map leaves the stored membership untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectView>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    if let Some(members) = input.members.as_ref().filter(|m| !m.is_empty()) {
        ProjectRepo::replace_members(&state.pool, id, members).await?;
    }

    let view = load_view(&state, project).await?;
    Ok(Json(view))
}

/// DELETE /projects/{id}
///
/// Cascades to owned tasks.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// Assemble the API view of a project: row + members mapping + owned tasks.
async fn load_view(state: &AppState, project: Project) -> Result<ProjectView, AppError> {
    let members = ProjectRepo::members(&state.pool, project.id).await?;
    let tasks = TaskRepo::list_by_project(&state.pool, project.id).await?;
    Ok(ProjectView::assemble(project, members, tasks))
}
