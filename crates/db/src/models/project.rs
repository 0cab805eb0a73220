//! Project entity model and DTOs.

use std::collections::HashMap;

use crewdesk_core::types::{DateOnly, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// Members and owned tasks live in their own tables; handlers assemble
/// them into a [`ProjectView`] for API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub deadline: DateOnly,
    pub priority: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with its members mapping and owned tasks, as
/// serialized in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub deadline: DateOnly,
    pub priority: String,
    /// Employee id (string-encoded) -> role. Dangling ids are possible.
    pub members: HashMap<String, String>,
    pub tasks: Vec<super::task::Task>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectView {
    pub fn assemble(
        project: Project,
        members: HashMap<String, String>,
        tasks: Vec<super::task::Task>,
    ) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            deadline: project.deadline,
            priority: project.priority,
            members,
            tasks,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub deadline: DateOnly,
    pub priority: String,
}

/// DTO for updating an existing project.
///
/// The four scalar fields are replaced wholesale. `members` is only
/// applied when present AND non-empty: an empty or absent map means
/// "leave the stored membership untouched".
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    pub description: String,
    pub deadline: DateOnly,
    pub priority: String,
    #[serde(default)]
    pub members: Option<HashMap<String, String>>,
}
