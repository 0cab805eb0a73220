//! Repository for the `projects` and `project_members` tables.

use std::collections::HashMap;

use crewdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, deadline, priority, created_at, updated_at";

/// Provides CRUD operations for projects and their members mapping.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, deadline, priority)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.deadline)
            .bind(&input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace a project's scalar fields.
    ///
    /// Returns `None` if no row with the given `id` exists. The members
    /// mapping is handled separately via [`replace_members`](Self::replace_members).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                description = $3,
                deadline = $4,
                priority = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.deadline)
            .bind(&input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Owned tasks and member rows go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the members mapping (`employee_id -> role`) for a project.
    pub async fn members(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<HashMap<String, String>, sqlx::Error> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT employee_id, role FROM project_members WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    /// Replace the full members mapping of a project.
    ///
    /// Callers only invoke this with a non-empty mapping; an empty input
    /// upstream means "no change" and never reaches this method.
    pub async fn replace_members(
        pool: &PgPool,
        project_id: DbId,
        members: &HashMap<String, String>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_members WHERE project_id = $1")
            .bind(project_id)
            .execute(pool)
            .await?;
        for (employee_id, role) in members {
            sqlx::query(
                "INSERT INTO project_members (project_id, employee_id, role)
                 VALUES ($1, $2, $3)",
            )
            .bind(project_id)
            .bind(employee_id)
            .bind(role)
            .execute(pool)
            .await?;
        }
        Ok(())
    }
}
