//! Handlers for the `/employees` resource.
//!
//! The create and rename endpoints take the employee name as a raw text
//! body rather than JSON, matching the desktop client's wire format.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use crewdesk_core::error::CoreError;
use crewdesk_core::types::DbId;
use crewdesk_db::models::employee::Employee;
use crewdesk_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /employees
pub async fn create(
    State(state): State<AppState>,
    name: String,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Employee name must not be empty".into(),
        )));
    }
    let employee = EmployeeRepo::create(&state.pool, name).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(employee))
}

/// PUT /employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    name: String,
) -> AppResult<Json<Employee>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Employee name must not be empty".into(),
        )));
    }
    let employee = EmployeeRepo::rename(&state.pool, id, name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(employee))
}

/// DELETE /employees/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EmployeeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))
    }
}
