//! Task entity model and DTOs.

use crewdesk_core::types::{DateOnly, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub priority: String,
    pub due_date: DateOnly,
    /// Free-text status; observed values are TODO / IN PROGRESS / DONE.
    pub status: String,
    /// Non-owning reference: cleared when the employee is deleted.
    pub assignee_id: Option<DbId>,
    /// Owning project: the task is deleted with it.
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task. `assignee_id` is the already-resolved
/// employee id (`None` when the requested assignee did not exist).
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub name: String,
    pub description: String,
    pub priority: String,
    pub due_date: DateOnly,
    pub status: String,
    pub assignee_id: Option<DbId>,
}

/// DTO for updating an existing task.
///
/// Scalar fields are replaced wholesale. `assignee_id = None` means
/// "keep the current assignee" (the requested employee did not resolve);
/// `project_id` re-attaches the task to its target project.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub name: String,
    pub description: String,
    pub priority: String,
    pub due_date: DateOnly,
    pub status: String,
    pub assignee_id: Option<DbId>,
    pub project_id: DbId,
}
