//! Wire models for the gateway.
//!
//! These mirror the server's JSON shapes (a subset -- unknown fields such
//! as timestamps are ignored on deserialization). Dates cross the wire as
//! `yyyy-MM-dd` strings, which is `chrono::NaiveDate`'s serde format.

use std::collections::HashMap;

use crewdesk_core::types::{DateOnly, DbId};
use serde::{Deserialize, Serialize};

/// An employee as returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
}

/// A task as returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub priority: String,
    pub due_date: DateOnly,
    pub status: String,
    pub assignee_id: Option<DbId>,
    pub project_id: Option<DbId>,
}

/// A project as returned by the server, including its members mapping and
/// owned tasks.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub deadline: DateOnly,
    pub priority: String,
    /// Employee id (string-encoded) -> role. Ids may be dangling; looking
    /// one up via the employees endpoint will then fail with a 404.
    pub members: HashMap<String, String>,
    pub tasks: Vec<Task>,
}

/// Query parameters for creating a project.
#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub deadline: DateOnly,
    pub priority: String,
}

/// JSON body for updating a project.
///
/// `members` follows the server's replace-if-non-empty rule: leave it
/// `None` (or empty) to keep the stored membership untouched.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectUpdate {
    pub name: String,
    pub description: String,
    pub deadline: DateOnly,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<HashMap<String, String>>,
}

/// Query parameters for creating a task. Serialized in camelCase, the
/// form the server expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub priority: String,
    pub due_date: DateOnly,
    pub status: String,
    pub assignee_id: DbId,
}

/// Query parameters for updating a task and attaching it to a project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub name: String,
    pub description: String,
    pub priority: String,
    pub due_date: DateOnly,
    pub status: String,
    pub assignee_id: DbId,
    pub project_id: DbId,
}
